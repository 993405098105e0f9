//! # Assistant Module
//!
//! The calling layer around the remote language model. Every model-backed
//! operation that has a deterministic counterpart (summary, keywords,
//! sentiment) degrades to it on failure instead of surfacing the error.
//!
//! ## Components
//! - `traits`: `LanguageModel` abstraction and the always-failing `OfflineModel`
//! - `openai`: OpenAI-compatible HTTP client
//! - `prompts`: prompt builders and answer parsing
//! - `service`: `DocumentAssistant`, the fallback chain

pub mod openai;
pub mod prompts;
pub mod service;
pub mod traits;

pub use openai::OpenAiClient;
pub use prompts::SummaryStyle;
pub use service::{
    DocumentAssistant, KeywordMethod, KeywordOutcome, Section, SectionsOutcome, SentimentOutcome,
    SummaryMethod, SummaryOutcome, TranslationOutcome,
};
pub use traits::{CompletionRequest, LanguageModel, OfflineModel};
