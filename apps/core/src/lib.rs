//! Docsum core: document text analytics.
//!
//! "The Engine" - deterministic statistics, keywords, word clouds and
//! extractive summaries, wrapped by a model-backed assistant that falls back
//! to the engine whenever the remote model is unavailable.

pub mod analytics;
pub mod assistant;
pub mod config;
pub mod error;
pub mod logging;
pub mod text_extract;

#[cfg(test)]
mod tests;

pub use analytics::{
    compute_stats, summarize_extractive, top_keywords, word_cloud, CloudTerm, Complexity,
    DocumentReport, StatsSnapshot, StopWords, TextAnalyzer,
};
pub use config::Config;
pub use error::AppError;
