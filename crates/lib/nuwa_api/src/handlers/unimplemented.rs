//! Handlers for mount points without behaviour.

use axum::http::Uri;

use crate::error::AppError;

/// `/api/auth/*`, `/api/user/*`: reserved, always 501.
pub async fn not_implemented_handler(uri: Uri) -> AppError {
    AppError::NotImplemented(format!("{} is not available yet", uri.path()))
}

/// Fallback for unknown paths.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
