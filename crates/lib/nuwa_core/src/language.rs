//! Practice languages and script-based language detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A language the room knows how to talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Japanese,
    Chinese,
    Indonesian,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
            Language::Indonesian => "id",
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese",
            Language::Indonesian => "Indonesian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_kana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}')
}

fn is_han(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FAF}')
}

/// Detect the language of `text` from its script.
///
/// Any hiragana or katakana means Japanese; Han characters without kana mean
/// Chinese; everything else is treated as English.
pub fn detect_language(text: &str) -> Language {
    let mut saw_han = false;
    for c in text.chars() {
        if is_kana(c) {
            return Language::Japanese;
        }
        saw_han |= is_han(c);
    }
    if saw_han {
        Language::Chinese
    } else {
        Language::English
    }
}

const PRACTICE_HINT: &str = "Try switching to Japanese (JP) or Mandarin (CN) for practice!";

/// The practice-language selector shown above the correction panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageTab {
    #[default]
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "JP")]
    Jp,
    #[serde(rename = "CN")]
    Cn,
}

impl LanguageTab {
    pub fn label(self) -> &'static str {
        match self {
            LanguageTab::En => "EN",
            LanguageTab::Jp => "JP",
            LanguageTab::Cn => "CN",
        }
    }

    pub fn language(self) -> Language {
        match self {
            LanguageTab::En => Language::English,
            LanguageTab::Jp => Language::Japanese,
            LanguageTab::Cn => Language::Chinese,
        }
    }

    /// Footer hint for the current tab.
    pub fn tip(self) -> String {
        match self {
            LanguageTab::En => format!("Current language: {} - {PRACTICE_HINT}", self.label()),
            _ => format!("Current language: {}", self.label()),
        }
    }
}

impl fmt::Display for LanguageTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a tab label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language tab: {0} (expected EN, JP or CN)")]
pub struct UnknownLanguageTab(pub String);

impl FromStr for LanguageTab {
    type Err = UnknownLanguageTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EN" => Ok(LanguageTab::En),
            "JP" | "JA" => Ok(LanguageTab::Jp),
            "CN" | "ZH" => Ok(LanguageTab::Cn),
            _ => Err(UnknownLanguageTab(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_text_is_english() {
        assert_eq!(detect_language("today is nice day"), Language::English);
        assert_eq!(detect_language(""), Language::English);
    }

    #[test]
    fn kana_is_japanese() {
        assert_eq!(detect_language("こんばんは"), Language::Japanese);
        assert_eq!(detect_language("日本語をべんきょうします"), Language::Japanese);
    }

    #[test]
    fn han_without_kana_is_chinese() {
        assert_eq!(detect_language("我很好"), Language::Chinese);
    }

    #[test]
    fn tab_parses_case_insensitively() {
        assert_eq!("jp".parse::<LanguageTab>().unwrap(), LanguageTab::Jp);
        assert_eq!(" CN ".parse::<LanguageTab>().unwrap(), LanguageTab::Cn);
        assert_eq!("en".parse::<LanguageTab>().unwrap(), LanguageTab::En);
        assert!("fr".parse::<LanguageTab>().is_err());
    }

    #[test]
    fn english_tab_suggests_switching() {
        assert!(LanguageTab::En.tip().contains("Try switching"));
        assert!(!LanguageTab::Jp.tip().contains("Try switching"));
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::Indonesian.code(), "id");
        assert_eq!(LanguageTab::Cn.language(), Language::Chinese);
    }
}
