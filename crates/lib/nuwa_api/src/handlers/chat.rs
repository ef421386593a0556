//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use nuwa_core::language::detect_language;
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatRequest, ChatResponse};

/// `POST /chat`: reply to one user message.
///
/// The reply is a canned line in the language the message is written in.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(body) = payload?;
    let message = body.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message must not be empty".into()));
    }

    let language = detect_language(message);
    let reply = state.pick_reply(language);
    debug!(language = language.code(), chars = message.chars().count(), "chat reply");

    Ok(Json(ChatResponse { reply }))
}
