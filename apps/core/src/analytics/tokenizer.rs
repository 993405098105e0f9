//! Tokenizer and segmenter.
//!
//! Two kinds of "words" live here and must not be confused:
//! - raw words: split on whitespace and hyphens, punctuation kept, used for counts and lengths
//! - lexical tokens: runs of Latin-script letters, lower-cased, used for frequency analysis
//!
//! Sentences and paragraphs are segmented with regex patterns compiled once.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// NOTE: expect() is acceptable here, the patterns are constants.
static LETTER_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Latin}&&\p{L}]+").expect("Invalid regex: letter run pattern")
});

static SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^.!?]+(?:[.!?]+|$)").expect("Invalid regex: sentence pattern")
});

/// A sentence together with where it starts in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Trimmed sentence text, terminal punctuation included
    pub text: String,
    /// Byte offset of the first character of `text` in the source
    pub offset: usize,
}

impl Sentence {
    /// Number of raw words in the sentence
    pub fn word_count(&self) -> usize {
        words(&self.text).len()
    }
}

/// Raw split used for word counts and length statistics.
///
/// Hyphenated compounds ("vas-tu", "peut-être") count as separate words; any
/// other punctuation stays attached to its word.
pub fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .collect()
}

/// Lower-cased letter runs with at least `min_len` characters.
///
/// `min_len` counts characters, not bytes, so accented letters weigh one each.
pub fn lexical_tokens(text: &str, min_len: usize) -> Vec<String> {
    LETTER_RUN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|token| token.chars().count() >= min_len)
        .collect()
}

/// Splits text into sentences ending in runs of `.`, `!` or `?`.
///
/// A trailing fragment without terminator is a sentence too. Fragments made of
/// whitespace only are dropped.
pub fn sentences(text: &str) -> Vec<Sentence> {
    SENTENCE
        .find_iter(text)
        .filter_map(|m| {
            let raw = m.as_str();
            let body = raw.trim_end_matches(['.', '!', '?']);
            if body.trim().is_empty() {
                return None;
            }

            let leading = raw.len() - raw.trim_start().len();
            Some(Sentence {
                text: raw.trim().to_string(),
                offset: m.start() + leading,
            })
        })
        .collect()
}

/// Splits text on blank lines (`\n\n`), trimmed, empties dropped.
///
/// Text without any blank-line separator is a single paragraph. Blank text has none.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
