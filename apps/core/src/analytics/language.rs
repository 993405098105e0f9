//! Lexicon-based language guess.
//!
//! Counts common French and English function words plus French accented
//! characters. This is a tally, not a classifier.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Detected language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    French,
    English,
    Mixed,
    Unknown,
}

impl Language {
    /// Returns the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
            Language::Mixed => "mixed",
            Language::Unknown => "unknown",
        }
    }
}

const FRENCH_MARKERS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "et", "ou", "mais", "je", "tu", "il",
    "elle", "nous", "vous", "ils", "elles", "est", "sont", "être", "avoir", "faire", "pour",
    "dans", "sur", "avec", "comment", "pourquoi", "quand", "qui", "que", "quoi", "bonjour",
    "merci",
];

const ENGLISH_MARKERS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "have", "has", "had", "do",
    "does", "did", "i", "you", "he", "she", "it", "we", "they", "and", "or", "but", "for",
    "with", "from", "to", "in", "on", "what", "why", "how", "when", "where", "who", "hello",
    "please", "thank",
];

/// Guess the dominant language of `text`.
pub fn detect_language(text: &str) -> Language {
    let lower = text.to_lowercase();
    let words: HashSet<&str> = lower
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .collect();

    let french_chars = text
        .chars()
        .filter(|c| {
            matches!(*c, 'é' | 'è' | 'ê' | 'ë' | 'à' | 'â' | 'ù' | 'û' | 'ô' | 'î' | 'ï' | 'ç' | 'œ')
        })
        .count();

    let french_words = FRENCH_MARKERS.iter().filter(|w| words.contains(**w)).count();
    let english_words = ENGLISH_MARKERS.iter().filter(|w| words.contains(**w)).count();

    let french_score = french_words + french_chars;
    let english_score = english_words;

    if french_score > 0 && english_score > 0 {
        if french_score > english_score * 2 {
            Language::French
        } else if english_score > french_score * 2 {
            Language::English
        } else {
            Language::Mixed
        }
    } else if french_score > 0 {
        Language::French
    } else if english_score > 0 {
        Language::English
    } else {
        Language::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french() {
        assert_eq!(
            detect_language("Le chat mange dans le jardin et il est très content."),
            Language::French
        );
    }

    #[test]
    fn test_english() {
        assert_eq!(
            detect_language("The cat is eating in the garden and it was happy."),
            Language::English
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(detect_language(""), Language::Unknown);
        assert_eq!(detect_language("12345 ### xyz"), Language::Unknown);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::French.code(), "fr");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Mixed.code(), "mixed");
        assert_eq!(Language::Unknown.code(), "unknown");
    }
}
