//! Health check and service banner.

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::models::{HealthResponse, RootResponse};

/// `GET /health`: always `OK` with the current server time.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// `GET /`: service banner.
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Nuwa Language Room API".to_string(),
    })
}
