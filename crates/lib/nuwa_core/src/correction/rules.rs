//! Rule-based correction: sentence capitalisation, terminal punctuation and a
//! coarse grammar formula, plus a small English ↔ Indonesian phrase list.

use serde::{Deserialize, Serialize};

use super::{Correction, CorrectionProvider, Explanation, Translations};
use crate::language::Language;

/// Returned by [`RuleCorrector::translate`] callers when no phrase matches.
pub const TRANSLATION_UNAVAILABLE: &str = "Translation not available";

const EN_TO_ID: &[(&str, &str)] = &[
    ("hello", "halo"),
    ("good morning", "selamat pagi"),
    ("thank you", "terima kasih"),
    ("how are you", "apa kabar"),
    ("i am fine", "saya baik-baik saja"),
    ("good night", "selamat malam"),
];

const ID_TO_EN: &[(&str, &str)] = &[
    ("halo", "hello"),
    ("selamat pagi", "good morning"),
    ("terima kasih", "thank you"),
    ("apa kabar", "how are you"),
    ("saya baik-baik saja", "i am fine"),
];

const BE_VERBS: &[&str] = &["am", "is", "are"];

/// Outcome of applying the sentence rules to one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCorrection {
    pub original: String,
    pub corrected: String,
    pub is_correct: bool,
    pub grammar_formula: String,
}

/// Stateless rule-based corrector.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleCorrector;

impl RuleCorrector {
    pub fn new() -> Self {
        Self
    }

    /// Capitalise the first letter and make sure the sentence ends in `.`,
    /// `!` or `?`.
    pub fn apply(&self, text: &str) -> RuleCorrection {
        let trimmed = text.trim();
        let mut corrected = String::with_capacity(trimmed.len() + 1);
        let mut chars = trimmed.chars();
        if let Some(first) = chars.next() {
            corrected.extend(first.to_uppercase());
            corrected.push_str(chars.as_str());
        }
        if let Some(last) = corrected.chars().last()
            && !matches!(last, '.' | '!' | '?')
        {
            corrected.push('.');
        }

        RuleCorrection {
            original: text.to_string(),
            is_correct: trimmed == corrected,
            corrected,
            grammar_formula: Self::grammar_formula(text).to_string(),
        }
    }

    /// Classify the sentence pattern of `text`.
    pub fn grammar_formula(text: &str) -> &'static str {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();

        if words.len() == 1 {
            "Single word"
        } else if words.iter().any(|w| BE_VERBS.contains(w)) {
            "Subject + Be + Complement"
        } else if text.contains('?') {
            "Question form"
        } else {
            "Subject + Verb + Object"
        }
    }

    /// Translate a known phrase into `target`.
    ///
    /// Only English → Indonesian and Indonesian → English are covered.
    pub fn translate(&self, text: &str, target: Language) -> Option<&'static str> {
        let dictionary = match target {
            Language::Indonesian => EN_TO_ID,
            Language::English => ID_TO_EN,
            _ => return None,
        };
        let key = text.trim().to_lowercase();
        dictionary
            .iter()
            .find(|(from, _)| *from == key)
            .map(|(_, to)| *to)
    }
}

impl CorrectionProvider for RuleCorrector {
    fn correct(&self, text: &str) -> Correction {
        let outcome = self.apply(text);
        let english = self
            .translate(text, Language::English)
            .map(str::to_string)
            .unwrap_or_else(|| outcome.corrected.clone());
        let indonesian = self
            .translate(text, Language::Indonesian)
            .unwrap_or(TRANSLATION_UNAVAILABLE)
            .to_string();
        let rule = if outcome.is_correct {
            super::ALREADY_CORRECT_RULE
        } else {
            "Capitalize the first letter and end the sentence with punctuation."
        };

        Correction {
            user_text: outcome.original,
            corrected_text: outcome.corrected,
            translations: Translations { english, indonesian },
            explanation: Explanation {
                rule: rule.to_string(),
                formula: outcome.grammar_formula,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalises_and_adds_period() {
        let c = RuleCorrector.apply("hello there");
        assert_eq!(c.corrected, "Hello there.");
        assert!(!c.is_correct);
    }

    #[test]
    fn keeps_existing_terminal_punctuation() {
        assert_eq!(RuleCorrector.apply("are you ok?").corrected, "Are you ok?");
        assert_eq!(RuleCorrector.apply("wow!").corrected, "Wow!");
    }

    #[test]
    fn correct_sentence_is_flagged() {
        let c = RuleCorrector.apply("  I am fine.  ");
        assert_eq!(c.corrected, "I am fine.");
        assert!(c.is_correct);
        assert_eq!(c.original, "  I am fine.  ");
    }

    #[test]
    fn empty_text_stays_empty() {
        let c = RuleCorrector.apply("   ");
        assert_eq!(c.corrected, "");
        assert!(c.is_correct);
    }

    #[test]
    fn formula_classification() {
        assert_eq!(RuleCorrector::grammar_formula("hello"), "Single word");
        assert_eq!(
            RuleCorrector::grammar_formula("the sky is blue"),
            "Subject + Be + Complement"
        );
        assert_eq!(
            RuleCorrector::grammar_formula("did you eat?"),
            "Question form"
        );
        assert_eq!(
            RuleCorrector::grammar_formula("I like apples"),
            "Subject + Verb + Object"
        );
    }

    #[test]
    fn be_verb_wins_over_question_mark() {
        assert_eq!(
            RuleCorrector::grammar_formula("how are you?"),
            "Subject + Be + Complement"
        );
    }

    #[test]
    fn translation_dictionary() {
        assert_eq!(
            RuleCorrector.translate("Good Morning", Language::Indonesian),
            Some("selamat pagi")
        );
        assert_eq!(
            RuleCorrector.translate("terima kasih", Language::English),
            Some("thank you")
        );
        assert_eq!(RuleCorrector.translate("hello", Language::Japanese), None);
        assert_eq!(RuleCorrector.translate("unknown", Language::Indonesian), None);
    }

    #[test]
    fn provider_fills_translations() {
        let c = RuleCorrector.correct("thank you");
        assert_eq!(c.corrected_text, "Thank you.");
        assert_eq!(c.translations.indonesian, "terima kasih");
        assert_eq!(c.translations.english, "Thank you.");

        let c = RuleCorrector.correct("random words here");
        assert_eq!(c.translations.indonesian, TRANSLATION_UNAVAILABLE);
    }
}
