//! Correction lookup: corrected text, translations and a grammar note for a
//! user utterance.
//!
//! Lookups go through [`CorrectionProvider`] so the built-in phrase table can
//! be swapped for another backend without touching the turn protocol.
//!
//! # Providers
//!
//! - [`CorrectionTable`]: exact, case-folded phrase match with an
//!   "already correct" fallback
//! - [`RuleCorrector`]: capitalisation/punctuation rules plus a small
//!   English ↔ Indonesian phrase dictionary

pub mod rules;
pub mod table;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub use rules::RuleCorrector;
pub use table::{CorrectionEntry, CorrectionTable, CorrectionTableError};

/// Indonesian placeholder used when no translation is known.
pub const TRANSLATION_PLACEHOLDER: &str = "Translation would appear here";

/// Rule text of the fallback correction.
pub const ALREADY_CORRECT_RULE: &str = "Great job! Your sentence looks good! ⭐";

/// Formula text of the fallback correction.
pub const ALREADY_CORRECT_FORMULA: &str = "Perfect grammar structure";

/// Translations of the corrected sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    pub english: String,
    pub indonesian: String,
}

/// Grammar explanation attached to a correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub rule: String,
    pub formula: String,
}

/// A correction record for one user utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub user_text: String,
    pub corrected_text: String,
    pub translations: Translations,
    pub explanation: Explanation,
}

impl Correction {
    /// The identity correction returned when nothing needs fixing.
    pub fn already_correct(text: &str) -> Self {
        Self {
            user_text: text.to_string(),
            corrected_text: text.to_string(),
            translations: Translations {
                english: text.to_string(),
                indonesian: TRANSLATION_PLACEHOLDER.to_string(),
            },
            explanation: Explanation {
                rule: ALREADY_CORRECT_RULE.to_string(),
                formula: ALREADY_CORRECT_FORMULA.to_string(),
            },
        }
    }

    /// Sample correction shown in the panel before the first turn.
    ///
    /// Display only; the sentence is not a lookup row.
    pub fn sample() -> Self {
        let corrected = "Yesterday I went to the market and bought some fruits.";
        Self {
            user_text: "Yesterday I go to the market and buy some fruits.".to_string(),
            corrected_text: corrected.to_string(),
            translations: Translations {
                english: corrected.to_string(),
                indonesian: "Kemarin saya pergi ke pasar dan membeli beberapa buah.".to_string(),
            },
            explanation: Explanation {
                rule: "Use past tense verbs when talking about completed actions in the past."
                    .to_string(),
                formula: "Time + Subject + Past Verb".to_string(),
            },
        }
    }

    /// True when the corrected text is identical to what the user typed.
    pub fn is_unchanged(&self) -> bool {
        self.user_text == self.corrected_text
    }
}

/// Anything able to derive a [`Correction`] from user text.
pub trait CorrectionProvider: Send + Sync {
    fn correct(&self, text: &str) -> Correction;
}

static BUILTIN_TABLE: LazyLock<CorrectionTable> = LazyLock::new(CorrectionTable::builtin);

/// Look up `text` in the built-in phrase table.
///
/// Case-folded exact match; misses return [`Correction::already_correct`].
pub fn lookup_correction(text: &str) -> Correction {
    BUILTIN_TABLE.correct(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_phrase_is_corrected() {
        let c = lookup_correction("i am feeling good");
        assert_eq!(c.user_text, "i am feeling good");
        assert_eq!(c.corrected_text, "I am feeling good.");
        assert_eq!(c.translations.english, "I am feeling good.");
        assert_eq!(c.translations.indonesian, "Saya merasa baik.");
        assert_eq!(c.explanation.formula, "Subject + Verb + Adjective");
    }

    #[test]
    fn lookup_is_case_folded() {
        let c = lookup_correction("Today Is Nice Day");
        assert_eq!(c.user_text, "Today Is Nice Day");
        assert_eq!(c.corrected_text, "Today is a nice day.");
    }

    #[test]
    fn miss_returns_identity() {
        let c = lookup_correction("anything not in the table");
        assert_eq!(c.corrected_text, "anything not in the table");
        assert_eq!(c.user_text, c.corrected_text);
        assert_eq!(c.explanation.rule, ALREADY_CORRECT_RULE);
        assert_eq!(c.translations.indonesian, TRANSLATION_PLACEHOLDER);
        assert!(c.is_unchanged());
    }

    #[test]
    fn no_fuzzy_matching() {
        // Trailing punctuation or whitespace is not normalised away.
        assert!(lookup_correction("i am feeling good.").is_unchanged());
        assert!(lookup_correction("i am feeling good ").is_unchanged());
    }

    #[test]
    fn sample_is_past_tense_example() {
        let c = Correction::sample();
        assert_eq!(
            c.corrected_text,
            "Yesterday I went to the market and bought some fruits."
        );
        assert_eq!(c.explanation.formula, "Time + Subject + Past Verb");
    }

    #[test]
    fn typing_the_sample_sentence_is_already_correct() {
        let c = lookup_correction(&Correction::sample().user_text);
        assert!(c.is_unchanged());
        assert_eq!(c.explanation.rule, ALREADY_CORRECT_RULE);
    }
}
