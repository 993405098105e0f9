//! Text Analyzer - entry point of the analytics engine.
//!
//! Binds one stop-word set to the statistics, keyword, word-cloud and
//! extractive summary operations, and bundles them into a `DocumentReport`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

use super::frequency::{self, CloudTerm};
use super::language::{detect_language, Language};
use super::stats::{self, StatsSnapshot};
use super::stopwords::StopWords;
use super::summarizer::ExtractiveSummarizer;

/// Everything the engine computes for one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Unique report identifier, for whoever stores it
    pub id: Uuid,
    pub stats: StatsSnapshot,
    /// Fallback keywords, most frequent first
    pub keywords: Vec<String>,
    pub word_cloud: Vec<CloudTerm>,
    pub language: Language,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    pub generated_at: DateTime<Utc>,
}

impl DocumentReport {
    /// One-line description for logging
    pub fn summary(&self) -> String {
        format!(
            "Words: {}, Sentences: {}, Complexity: {} ({:.1}), Language: {}, Keywords: {}",
            self.stats.word_count,
            self.stats.sentence_count,
            self.stats.complexity,
            self.stats.complexity_score,
            self.language.code(),
            self.keywords.len()
        )
    }
}

/// The deterministic analytics engine.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    stopwords: StopWords,
    summarizer: ExtractiveSummarizer,
}

impl TextAnalyzer {
    /// Create an analyzer with the default French/English stop words
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom stop-word set
    pub fn with_stopwords(stopwords: StopWords) -> Self {
        Self {
            summarizer: ExtractiveSummarizer::new(stopwords.clone()),
            stopwords,
        }
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    pub fn compute_stats(&self, text: &str) -> StatsSnapshot {
        stats::compute_stats(text)
    }

    pub fn summarize_extractive(&self, text: &str, target_words: usize) -> String {
        self.summarizer.summarize(text, target_words)
    }

    pub fn top_keywords(&self, text: &str, count: usize) -> Vec<String> {
        frequency::top_keywords(text, count, &self.stopwords)
    }

    pub fn word_cloud(&self, text: &str, max_words: usize) -> Vec<CloudTerm> {
        frequency::word_cloud(text, max_words, &self.stopwords)
    }

    /// Compute the full report of `text`.
    pub fn report(&self, text: &str, keyword_count: usize, cloud_words: usize) -> DocumentReport {
        let start = Instant::now();

        let stats = self.compute_stats(text);
        let keywords = self.top_keywords(text, keyword_count);
        let word_cloud = self.word_cloud(text, cloud_words);
        let language = detect_language(text);

        DocumentReport {
            id: Uuid::new_v4(),
            stats,
            keywords,
            word_cloud,
            language,
            processing_time_ms: start.elapsed().as_millis() as u64,
            generated_at: Utc::now(),
        }
    }
}
