//! # nuwa_api
//!
//! HTTP API library for the Nuwa Language Room chat service.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{any, get, post};
use nuwa_core::language::Language;
use nuwa_core::reply::canned::service_replies;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::config::ApiConfig;
use crate::handlers::{chat, correction, health, process, unimplemented};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Random source for canned reply selection.
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            rng: Arc::new(Mutex::new(StdRng::from_os_rng())),
        }
    }

    /// State with a fixed reply seed.
    pub fn seeded(config: ApiConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Pick a canned reply for a message in `language`.
    pub fn pick_reply(&self, language: Language) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        service_replies(language)
            .choose(&mut *rng)
            .map(|s| s.to_string())
            .unwrap_or_default()
    }
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match &config.allowed_origins {
        None => layer.allow_origin(Any),
        Some(origins) => {
            let values: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(v) => Some(v),
                    Err(_) => {
                        warn!(origin = %o, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(AllowOrigin::list(values))
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let chat_routes = Router::new()
        .route(routes::GET_ROOT, get(health::root_handler))
        .route(routes::GET_HEALTH, get(health::health_handler))
        .route(routes::POST_CHAT, post(chat::chat_handler))
        .route(routes::POST_API_CHAT, post(chat::chat_handler))
        .route(routes::POST_CORRECTION, post(correction::correction_handler))
        .route(routes::POST_PROCESS, post(process::process_handler));

    // Mounted so clients get a stable 501 instead of a 404.
    let mounts = Router::new()
        .route(routes::API_AUTH, any(unimplemented::not_implemented_handler))
        .route(routes::API_AUTH_ANY, any(unimplemented::not_implemented_handler))
        .route(routes::API_USER, any(unimplemented::not_implemented_handler))
        .route(routes::API_USER_ANY, any(unimplemented::not_implemented_handler));

    Router::new()
        .merge(chat_routes)
        .merge(mounts)
        .fallback(unimplemented::not_found_handler)
        .layer(cors)
        .with_state(state)
}
