//! # Analytics Module
//!
//! Deterministic text analytics for docsum. Computes results from raw text
//! without any remote model, and serves as the fallback when the model path fails.
//!
//! ## Components
//! - `tokenizer`: raw words, lexical tokens, sentences and paragraphs
//! - `stopwords`: injected stop-word sets (French and English by default)
//! - `frequency`: term frequency tables, keywords and word-cloud sizing
//! - `summarizer`: extractive summarization
//! - `stats`: counts, reading times and complexity
//! - `language`: lexicon-based language guess
//! - `analyzer`: main entry point and document report
//!
//! Every operation is a pure function of its inputs; nothing is cached between calls.

pub mod analyzer;
pub mod frequency;
pub mod language;
pub mod stats;
pub mod stopwords;
pub mod summarizer;
pub mod tokenizer;

use std::sync::LazyLock;

pub use analyzer::{DocumentReport, TextAnalyzer};
pub use frequency::{CloudTerm, FrequencyTable};
pub use language::{detect_language, Language};
pub use stats::{Complexity, StatsSnapshot};
pub use stopwords::StopWords;
pub use summarizer::{ExtractiveSummarizer, ScoredSentence};
pub use tokenizer::Sentence;

static DEFAULT_ANALYZER: LazyLock<TextAnalyzer> = LazyLock::new(TextAnalyzer::new);

/// Statistics snapshot of `text`.
pub fn compute_stats(text: &str) -> StatsSnapshot {
    stats::compute_stats(text)
}

/// Extractive summary of `text` using the default stop words.
pub fn summarize_extractive(text: &str, target_words: usize) -> String {
    DEFAULT_ANALYZER.summarize_extractive(text, target_words)
}

/// Fallback keywords of `text` using the default stop words.
pub fn top_keywords(text: &str, count: usize) -> Vec<String> {
    DEFAULT_ANALYZER.top_keywords(text, count)
}

/// Word-cloud data of `text` using the default stop words.
pub fn word_cloud(text: &str, max_words: usize) -> Vec<CloudTerm> {
    DEFAULT_ANALYZER.word_cloud(text, max_words)
}
