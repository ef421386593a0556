//! Nuwa Language Room chat service binary.
//!
//! Serves `/chat`, `/health` and the correction endpoints until Ctrl-C.

use clap::Parser;
use nuwa_api::config::{ApiConfig, parse_origins};
use tracing::info;

/// CLI arguments for the chat service.
#[derive(Parser, Debug)]
#[command(name = "nuwa_api_server", about = "Nuwa Language Room chat service")]
struct Args {
    /// Interface to bind. Overrides `BIND_ADDR` / `HOST`.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (0 = ephemeral). Overrides `BIND_ADDR` / `PORT`.
    #[arg(long)]
    port: Option<u16>,

    /// Comma separated CORS origins. Overrides `ALLOWED_ORIGINS`.
    #[arg(long)]
    allowed_origins: Option<String>,

    /// Seed for canned reply selection (reproducible replies).
    #[arg(long)]
    seed: Option<u64>,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| {
                    tracing_subscriber::EnvFilter::try_new("info,nuwa_api=debug,nuwa_core=debug")
                })?,
        )
        .init();

    let args = Args::parse();

    let mut config = ApiConfig::from_env();
    if args.host.is_some() || args.port.is_some() {
        let host = args
            .host
            .or_else(|| std::env::var("HOST").ok())
            .unwrap_or_else(|| "127.0.0.1".into());
        let port = match args.port {
            Some(port) => port.to_string(),
            None => std::env::var("PORT").unwrap_or_else(|_| "3000".into()),
        };
        config.bind_addr = format!("{host}:{port}");
    }
    if let Some(origins) = args.allowed_origins.as_deref() {
        config.allowed_origins = parse_origins(origins);
    }

    let state = match args.seed {
        Some(seed) => nuwa_api::AppState::seeded(config.clone(), seed),
        None => nuwa_api::AppState::new(config.clone()),
    };
    let app = nuwa_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(
        addr = %local_addr,
        origins = ?config.allowed_origins,
        "chat service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
