// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::time::Duration;

use clap::Parser;
use cli::{Cli, Commands};
use nuwa_core::correction::RuleCorrector;
use nuwa_core::{CorrectionProvider, CorrectionTable};

mod chat;
mod cli;
mod logging;
mod render;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match args.command {
        Commands::Chat {
            policy,
            service_url,
            timeout_secs,
            seed,
            min_delay_ms,
            max_delay_ms,
            corrections,
        } => {
            let opts = chat::ChatOptions {
                policy,
                service_url,
                timeout: timeout_secs.map(Duration::from_secs),
                seed,
                min_delay: Duration::from_millis(min_delay_ms),
                max_delay: Duration::from_millis(max_delay_ms),
            };
            let mut client = chat::build_client(&opts)?;
            if let Some(path) = corrections {
                client = client.with_corrections(chat::load_corrections(&path)?);
            }

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(chat::run(client))?;
        }
        Commands::Correct {
            text,
            rules,
            corrections,
        } => {
            let provider: Box<dyn CorrectionProvider> = match corrections {
                Some(path) => Box::new(chat::load_corrections(&path)?),
                None if rules => Box::new(RuleCorrector::new()),
                None => Box::new(CorrectionTable::builtin()),
            };
            let text = text.trim();
            if text.is_empty() {
                return Err(Error::Custom("nothing to correct".into()));
            }
            println!("{}", render::correction_panel(&provider.correct(text)));
        }
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
