use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::prompts::{self, SummaryStyle};
use super::traits::LanguageModel;
use crate::analytics::stats::round_one_decimal;
use crate::analytics::{tokenizer, TextAnalyzer};
use crate::error::AppError;

/// How a summary was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMethod {
    /// Input was already within the target length
    Original,
    /// Remote language model
    Model,
    /// Deterministic fallback
    Extractive,
}

/// How keywords were produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMethod {
    Model,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutcome {
    pub summary: String,
    pub method: SummaryMethod,
    /// Model name, only when the model produced the summary
    pub model: Option<String>,
    pub original_words: usize,
    pub summary_words: usize,
    /// Percentage of words removed, one decimal
    pub compression_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordOutcome {
    pub keywords: Vec<String>,
    pub method: KeywordMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationOutcome {
    pub translation: String,
    /// Human-readable target language
    pub target_language: String,
}

/// Sentiment as reported by the model, or a neutral placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentOutcome {
    pub sentiment: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub tone: String,
    #[serde(default = "default_true")]
    pub success: bool,
}

impl SentimentOutcome {
    /// Placeholder used when the model could not answer
    pub fn undetermined() -> Self {
        Self {
            sentiment: "neutral".to_string(),
            score: 0.0,
            emotions: vec![],
            tone: "undetermined".to_string(),
            success: false,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionsOutcome {
    pub sections: Vec<Section>,
    #[serde(default)]
    pub total_sections: usize,
}

#[derive(Deserialize)]
struct KeywordsAnswer {
    keywords: Vec<String>,
}

#[derive(Deserialize)]
struct TitlesAnswer {
    titles: Vec<String>,
}

/// Combines a remote language model with the deterministic analytics engine.
///
/// Summaries and keywords always succeed: model failures are logged and the
/// engine answers instead, with the result tagged by method.
pub struct DocumentAssistant<M: LanguageModel> {
    model: Arc<M>,
    analyzer: TextAnalyzer,
}

impl<M: LanguageModel> Clone for DocumentAssistant<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            analyzer: self.analyzer.clone(),
        }
    }
}

impl<M: LanguageModel> DocumentAssistant<M> {
    pub fn new(model: M) -> Self {
        Self::with_analyzer(Arc::new(model), TextAnalyzer::new())
    }

    pub fn with_analyzer(model: Arc<M>, analyzer: TextAnalyzer) -> Self {
        Self { model, analyzer }
    }

    pub fn analyzer(&self) -> &TextAnalyzer {
        &self.analyzer
    }

    /// Summarize with the model, falling back to the extractive summarizer.
    #[instrument(skip(self, text))]
    pub async fn summarize(
        &self,
        text: &str,
        target_words: usize,
        style: SummaryStyle,
    ) -> Result<SummaryOutcome, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("The text is empty".to_string()));
        }

        let target_words = target_words.max(1);
        let original_words = tokenizer::words(text).len();
        if original_words <= target_words {
            return Ok(outcome(text.to_string(), SummaryMethod::Original, None, original_words));
        }

        match self
            .model
            .complete(prompts::summary(text, target_words, style))
            .await
        {
            Ok(summary) if !summary.trim().is_empty() => {
                info!("Summary produced by model {}", self.model.name());
                Ok(outcome(
                    summary,
                    SummaryMethod::Model,
                    Some(self.model.name().to_string()),
                    original_words,
                ))
            }
            Ok(_) => {
                warn!("Model returned an empty summary, using extractive fallback");
                Ok(self.extractive(text, target_words, original_words))
            }
            Err(e) => {
                warn!("Model summarization failed ({}), using extractive fallback", e);
                Ok(self.extractive(text, target_words, original_words))
            }
        }
    }

    /// Summarize without calling the model.
    pub fn summarize_offline(&self, text: &str, target_words: usize) -> SummaryOutcome {
        let target_words = target_words.max(1);
        let original_words = tokenizer::words(text).len();
        if original_words <= target_words {
            return outcome(text.to_string(), SummaryMethod::Original, None, original_words);
        }
        self.extractive(text, target_words, original_words)
    }

    fn extractive(&self, text: &str, target_words: usize, original_words: usize) -> SummaryOutcome {
        let summary = self.analyzer.summarize_extractive(text, target_words);
        outcome(summary, SummaryMethod::Extractive, None, original_words)
    }

    /// Keywords from the model, falling back to term frequency.
    #[instrument(skip(self, text))]
    pub async fn extract_keywords(&self, text: &str, count: usize) -> KeywordOutcome {
        let count = count.max(1);
        let answer = self
            .model
            .complete(prompts::keywords(text, count))
            .await
            .and_then(|content| prompts::parse_json_answer::<KeywordsAnswer>(&content));

        match answer {
            Ok(parsed) => KeywordOutcome {
                keywords: parsed.keywords,
                method: KeywordMethod::Model,
            },
            Err(e) => {
                warn!("Model keyword extraction failed ({}), using frequency fallback", e);
                KeywordOutcome {
                    keywords: self.analyzer.top_keywords(text, count),
                    method: KeywordMethod::Fallback,
                }
            }
        }
    }

    /// Translate into the language named by `target_language` (a code such as "fr").
    #[instrument(skip(self, text))]
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<TranslationOutcome, AppError> {
        let language = prompts::language_name(target_language).to_string();
        let translation = self
            .model
            .complete(prompts::translation(text, &language))
            .await?;

        Ok(TranslationOutcome {
            translation,
            target_language: language,
        })
    }

    /// Answer a question from the document's content only.
    #[instrument(skip(self, text))]
    pub async fn answer_question(&self, text: &str, question: &str) -> Result<String, AppError> {
        if question.trim().is_empty() {
            return Err(AppError::Validation("The question is empty".to_string()));
        }
        self.model
            .complete(prompts::question(text, question))
            .await
    }

    /// Sentiment and tone; neutral and unsuccessful when the model fails.
    #[instrument(skip(self, text))]
    pub async fn analyze_sentiment(&self, text: &str) -> SentimentOutcome {
        let answer = self
            .model
            .complete(prompts::sentiment(text))
            .await
            .and_then(|content| prompts::parse_json_answer::<SentimentOutcome>(&content));

        match answer {
            Ok(mut outcome) => {
                outcome.success = true;
                outcome
            }
            Err(e) => {
                warn!("Sentiment analysis failed: {}", e);
                SentimentOutcome::undetermined()
            }
        }
    }

    /// Title suggestions.
    #[instrument(skip(self, text))]
    pub async fn generate_titles(&self, text: &str, count: usize) -> Result<Vec<String>, AppError> {
        let content = self
            .model
            .complete(prompts::titles(text, count.max(1)))
            .await?;
        Ok(prompts::parse_json_answer::<TitlesAnswer>(&content)?.titles)
    }

    /// Section-by-section summary.
    #[instrument(skip(self, text))]
    pub async fn summarize_by_sections(
        &self,
        text: &str,
        words_per_section: usize,
    ) -> Result<SectionsOutcome, AppError> {
        let content = self
            .model
            .complete(prompts::sections(text, words_per_section.max(1)))
            .await?;
        let mut outcome: SectionsOutcome = prompts::parse_json_answer(&content)?;
        outcome.total_sections = outcome.sections.len();
        Ok(outcome)
    }
}

fn outcome(
    summary: String,
    method: SummaryMethod,
    model: Option<String>,
    original_words: usize,
) -> SummaryOutcome {
    let summary_words = tokenizer::words(&summary).len();
    let compression_rate = if original_words == 0 {
        0.0
    } else {
        round_one_decimal((1.0 - summary_words as f64 / original_words as f64) * 100.0)
    };

    SummaryOutcome {
        summary,
        method,
        model,
        original_words,
        summary_words,
        compression_rate,
    }
}
