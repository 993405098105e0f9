//! Text statistics.
//!
//! Counts, averages, reading-time estimates and a heuristic complexity class
//! computed from raw words and segmented sentences. Every division is guarded,
//! so blank input yields a zeroed snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::tokenizer;

/// Words per minute for a normal read
pub const FAST_READING_WPM: f64 = 200.0;

/// Words per minute for a careful read
pub const SLOW_READING_WPM: f64 = 150.0;

/// Scores below this are easy
pub const MEDIUM_THRESHOLD: f64 = 30.0;

/// Scores at or above this are complex
pub const COMPLEX_THRESHOLD: f64 = 50.0;

/// Heuristic complexity class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Easy,
    Medium,
    Complex,
}

impl Complexity {
    /// Lower bound inclusive, upper bound exclusive for each band.
    pub fn from_score(score: f64) -> Self {
        if score < MEDIUM_THRESHOLD {
            Complexity::Easy
        } else if score < COMPLEX_THRESHOLD {
            Complexity::Medium
        } else {
            Complexity::Complex
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Easy => "easy",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Metrics for one document at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Raw words (whitespace and hyphen delimited)
    pub word_count: usize,
    /// Characters (not bytes)
    pub char_count: usize,
    /// Characters without spaces and newlines
    pub char_count_no_spaces: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Mean raw word length in characters
    pub avg_word_length: f64,
    /// Mean raw words per sentence
    pub avg_sentence_length: f64,
    /// At 200 words per minute, one decimal
    pub reading_time_minutes: f64,
    /// At 150 words per minute, one decimal
    pub reading_time_slow_minutes: f64,
    /// (avg_word_length * 10 + avg_sentence_length) / 2
    pub complexity_score: f64,
    pub complexity: Complexity,
    /// Distinct lower-cased raw words
    pub unique_words: usize,
}

/// Compute the statistics snapshot of `text`.
pub fn compute_stats(text: &str) -> StatsSnapshot {
    let words = tokenizer::words(text);
    let sentences = tokenizer::sentences(text);
    let paragraphs = tokenizer::paragraphs(text);

    let word_count = words.len();
    let char_count = text.chars().count();
    let char_count_no_spaces = text.chars().filter(|c| *c != ' ' && *c != '\n').count();

    let sentence_count = sentences.len();
    let paragraph_count = if text.trim().is_empty() {
        0
    } else {
        paragraphs.len().max(1)
    };

    let total_word_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = ratio(total_word_chars, word_count);

    let sentence_words: usize = sentences.iter().map(|s| s.word_count()).sum();
    let avg_sentence_length = ratio(sentence_words, sentence_count);

    let complexity_score = (avg_word_length * 10.0 + avg_sentence_length) / 2.0;

    let unique_words = words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<HashSet<_>>()
        .len();

    StatsSnapshot {
        word_count,
        char_count,
        char_count_no_spaces,
        sentence_count,
        paragraph_count,
        avg_word_length,
        avg_sentence_length,
        reading_time_minutes: round_one_decimal(word_count as f64 / FAST_READING_WPM),
        reading_time_slow_minutes: round_one_decimal(word_count as f64 / SLOW_READING_WPM),
        complexity_score,
        complexity: Complexity::from_score(complexity_score),
        unique_words,
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Round half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = compute_stats("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.char_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.paragraph_count, 0);
        assert_eq!(stats.avg_word_length, 0.0);
        assert_eq!(stats.avg_sentence_length, 0.0);
        assert_eq!(stats.complexity_score, 0.0);
        assert_eq!(stats.complexity, Complexity::Easy);
    }

    #[test]
    fn test_greeting_counts() {
        let stats = compute_stats("Bonjour. Comment vas-tu?");
        assert_eq!(stats.sentence_count, 2);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.word_count, 4);
    }

    #[test]
    fn test_chars() {
        let stats = compute_stats("été là\nici");
        assert_eq!(stats.char_count, 10);
        assert_eq!(stats.char_count_no_spaces, 8);
    }

    #[test]
    fn test_complexity_bands() {
        assert_eq!(Complexity::from_score(29.99), Complexity::Easy);
        assert_eq!(Complexity::from_score(30.0), Complexity::Medium);
        assert_eq!(Complexity::from_score(49.99), Complexity::Medium);
        assert_eq!(Complexity::from_score(50.0), Complexity::Complex);
        assert_eq!(Complexity::Medium.to_string(), "medium");
    }

    #[test]
    fn test_reading_times() {
        let text = "word ".repeat(300);
        let stats = compute_stats(&text);
        assert_eq!(stats.reading_time_minutes, 1.5);
        assert_eq!(stats.reading_time_slow_minutes, 2.0);
        assert_eq!(stats.unique_words, 1);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(0.26), 0.3);
        assert_eq!(round_one_decimal(1.04), 1.0);
        assert_eq!(round_one_decimal(0.0), 0.0);
    }
}
