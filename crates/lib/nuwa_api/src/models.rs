//! Request and response bodies of the chat service.

use nuwa_core::correction::rules::RuleCorrection;
use serde::{Deserialize, Serialize};

/// Error body returned with every non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `POST /chat` request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// `POST /chat` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: String,
}

/// `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
}

/// `GET /` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootResponse {
    pub message: String,
}

fn default_target_language() -> String {
    "id".to_string()
}

/// `POST /correction` request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorrectionRequest {
    pub message: String,
    /// ISO 639-1 code of the translation target.
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

/// `POST /correction` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorrectionResponse {
    pub original: String,
    pub corrected: String,
    pub is_correct: bool,
    pub translation: String,
    pub grammar_note: String,
}

/// `POST /process` request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessRequest {
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// `POST /process` response: reply, correction and translation in one call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessResponse {
    pub response: String,
    pub correction: RuleCorrection,
    pub translation: String,
    pub language: String,
    pub grammar_formula: String,
}
