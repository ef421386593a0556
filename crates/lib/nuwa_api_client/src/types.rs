//! Wire types of the chat service, as seen by the client.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub message: &'a str,
}

/// `POST /chat` response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: String,
}

/// `GET /health` response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CorrectionRequest<'a> {
    pub message: &'a str,
    pub target_language: &'a str,
}

/// `POST /correction` response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CorrectionResponse {
    pub original: String,
    pub corrected: String,
    pub is_correct: bool,
    pub translation: String,
    pub grammar_note: String,
}
