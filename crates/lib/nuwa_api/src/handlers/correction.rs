//! Rule-based correction handler.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use nuwa_core::correction::RuleCorrector;
use nuwa_core::correction::rules::TRANSLATION_UNAVAILABLE;
use nuwa_core::language::Language;

use crate::error::{AppError, AppResult};
use crate::models::{CorrectionRequest, CorrectionResponse};

/// Map an ISO 639-1 code to a translation target.
pub(crate) fn target_language(code: &str) -> Option<Language> {
    match code.trim().to_ascii_lowercase().as_str() {
        "en" => Some(Language::English),
        "id" => Some(Language::Indonesian),
        "ja" => Some(Language::Japanese),
        "zh" => Some(Language::Chinese),
        _ => None,
    }
}

/// `POST /correction`: capitalisation/punctuation fix plus a phrase
/// translation into `target_language` (default `id`).
pub async fn correction_handler(
    payload: Result<Json<CorrectionRequest>, JsonRejection>,
) -> AppResult<Json<CorrectionResponse>> {
    let Json(body) = payload?;
    if body.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".into()));
    }

    let corrector = RuleCorrector::new();
    let outcome = corrector.apply(&body.message);
    let translation = target_language(&body.target_language)
        .and_then(|lang| corrector.translate(&body.message, lang))
        .unwrap_or(TRANSLATION_UNAVAILABLE);

    Ok(Json(CorrectionResponse {
        original: outcome.original,
        corrected: outcome.corrected,
        is_correct: outcome.is_correct,
        translation: translation.to_string(),
        grammar_note: "Basic sentence structure applied".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_codes() {
        assert_eq!(target_language("ID"), Some(Language::Indonesian));
        assert_eq!(target_language("en"), Some(Language::English));
        assert_eq!(target_language("fr"), None);
    }
}
