//! Static phrase table: normalized phrase → correction template.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::{Correction, CorrectionProvider, Explanation, Translations};

/// Errors raised while loading a correction table.
#[derive(Debug, Error)]
pub enum CorrectionTableError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate phrase: {0}")]
    DuplicatePhrase(String),

    #[error("Empty phrase in correction table")]
    EmptyPhrase,
}

/// One row of a correction table, as written in table files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionEntry {
    pub phrase: String,
    pub corrected: String,
    pub english: String,
    pub indonesian: String,
    pub rule: String,
    pub formula: String,
}

impl CorrectionEntry {
    fn to_correction(&self, user_text: &str) -> Correction {
        Correction {
            user_text: user_text.to_string(),
            corrected_text: self.corrected.clone(),
            translations: Translations {
                english: self.english.clone(),
                indonesian: self.indonesian.clone(),
            },
            explanation: Explanation {
                rule: self.rule.clone(),
                formula: self.formula.clone(),
            },
        }
    }
}

fn entry(
    phrase: &str,
    corrected: &str,
    indonesian: &str,
    rule: &str,
    formula: &str,
) -> CorrectionEntry {
    CorrectionEntry {
        phrase: phrase.to_string(),
        corrected: corrected.to_string(),
        english: corrected.to_string(),
        indonesian: indonesian.to_string(),
        rule: rule.to_string(),
        formula: formula.to_string(),
    }
}

/// Ordered mapping from lowercased phrase to correction template.
#[derive(Debug, Clone, Default)]
pub struct CorrectionTable {
    entries: BTreeMap<String, CorrectionEntry>,
}

impl CorrectionTable {
    /// Build a table from entries, lowercasing every phrase.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CorrectionEntry>,
    ) -> Result<Self, CorrectionTableError> {
        let mut map = BTreeMap::new();
        for e in entries {
            let key = e.phrase.to_lowercase();
            if key.is_empty() {
                return Err(CorrectionTableError::EmptyPhrase);
            }
            if map.contains_key(&key) {
                return Err(CorrectionTableError::DuplicatePhrase(e.phrase));
            }
            map.insert(key, e);
        }
        Ok(Self { entries: map })
    }

    /// Parse a YAML list of [`CorrectionEntry`] rows.
    pub fn from_yaml_str(s: &str) -> Result<Self, CorrectionTableError> {
        let entries: Vec<CorrectionEntry> = serde_yaml::from_str(s)?;
        Self::from_entries(entries)
    }

    /// Parse a JSON array of [`CorrectionEntry`] rows.
    pub fn from_json_str(s: &str) -> Result<Self, CorrectionTableError> {
        let entries: Vec<CorrectionEntry> = serde_json::from_str(s)?;
        Self::from_entries(entries)
    }

    /// The phrases shipped with the room.
    pub fn builtin() -> Self {
        let entries = [
            entry(
                "i am feeling good",
                "I am feeling good.",
                "Saya merasa baik.",
                "Remember to capitalize 'I' and end sentences with a period.",
                "Subject + Verb + Adjective",
            ),
            entry(
                "today is nice day",
                "Today is a nice day.",
                "Hari ini adalah hari yang menyenangkan.",
                "Don't forget the article 'a' before 'nice day'.",
                "Subject + Verb + Article + Adjective + Noun",
            ),
        ];
        let mut map = BTreeMap::new();
        for e in entries {
            map.insert(e.phrase.clone(), e);
        }
        Self { entries: map }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Phrases in table order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl CorrectionProvider for CorrectionTable {
    fn correct(&self, text: &str) -> Correction {
        match self.entries.get(&text.to_lowercase()) {
            Some(e) => {
                debug!(phrase = %e.phrase, "correction table hit");
                e.to_correction(text)
            }
            None => Correction::already_correct(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
- phrase: She Go To School
  corrected: She goes to school.
  english: She goes to school.
  indonesian: Dia pergi ke sekolah.
  rule: Third person singular verbs take -s.
  formula: Subject + Verb-s + Object
"#;

    #[test]
    fn builtin_has_known_phrases() {
        let table = CorrectionTable::builtin();
        assert_eq!(table.len(), 2);
        assert!(table.phrases().any(|p| p == "i am feeling good"));
        assert!(table.phrases().all(|p| p == p.to_lowercase()));
    }

    #[test]
    fn yaml_table_loads_and_normalizes() {
        let table = CorrectionTable::from_yaml_str(YAML).expect("parse");
        assert_eq!(table.phrases().collect::<Vec<_>>(), vec!["she go to school"]);

        let c = table.correct("she go to school");
        assert_eq!(c.corrected_text, "She goes to school.");
        assert_eq!(c.translations.indonesian, "Dia pergi ke sekolah.");
        assert_eq!(c.user_text, "she go to school");
    }

    #[test]
    fn replacement_table_drops_builtins() {
        let table = CorrectionTable::from_yaml_str(YAML).expect("parse");
        assert!(table.correct("i am feeling good").is_unchanged());
    }

    #[test]
    fn json_table_loads() {
        let json = serde_json::json!([{
            "phrase": "i has a cat",
            "corrected": "I have a cat.",
            "english": "I have a cat.",
            "indonesian": "Saya punya kucing.",
            "rule": "Use 'have' with 'I'.",
            "formula": "Subject + Verb + Object"
        }])
        .to_string();
        let table = CorrectionTable::from_json_str(&json).expect("parse");
        assert_eq!(table.correct("I HAS A CAT").corrected_text, "I have a cat.");
    }

    #[test]
    fn duplicate_phrases_rejected() {
        let dup = format!("{YAML}{}", YAML.replace("She Go To School", "she go to school"));
        let err = CorrectionTable::from_yaml_str(&dup).unwrap_err();
        assert!(matches!(err, CorrectionTableError::DuplicatePhrase(_)));
    }

    #[test]
    fn empty_phrase_rejected() {
        let yaml = YAML.replace("She Go To School", "\"\"");
        let err = CorrectionTable::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, CorrectionTableError::EmptyPhrase));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = CorrectionTable::from_yaml_str("- phrase: [unclosed").unwrap_err();
        assert!(matches!(err, CorrectionTableError::Yaml(_)));
    }
}
