//! Combined reply + correction + translation handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use nuwa_core::correction::RuleCorrector;
use nuwa_core::correction::rules::TRANSLATION_UNAVAILABLE;
use nuwa_core::language::{Language, detect_language};
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ProcessRequest, ProcessResponse};

/// `POST /process`: everything the correction panel needs in one call.
///
/// English messages are translated to Indonesian, everything else to English.
pub async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> AppResult<Json<ProcessResponse>> {
    let Json(body) = payload?;
    let message = body.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message must not be empty".into()));
    }

    let language = detect_language(message);
    let response = state.pick_reply(language);

    let corrector = RuleCorrector::new();
    let correction = corrector.apply(message);
    let target = if language == Language::English {
        Language::Indonesian
    } else {
        Language::English
    };
    let translation = corrector
        .translate(message, target)
        .unwrap_or(TRANSLATION_UNAVAILABLE)
        .to_string();
    debug!(
        user_id = body.user_id.as_deref().unwrap_or("-"),
        language = language.code(),
        "processed message"
    );

    Ok(Json(ProcessResponse {
        response,
        grammar_formula: correction.grammar_formula.clone(),
        correction,
        translation,
        language: language.name().to_string(),
    }))
}
