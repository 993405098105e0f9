//! Prompt construction for the model-backed operations.
//!
//! Document text is truncated per operation before it is sent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::traits::CompletionRequest;
use crate::error::AppError;

pub const SUMMARY_TEXT_LIMIT: usize = 15_000;
pub const KEYWORDS_TEXT_LIMIT: usize = 10_000;
pub const TRANSLATION_TEXT_LIMIT: usize = 10_000;
pub const SENTIMENT_TEXT_LIMIT: usize = 8_000;
pub const TITLES_TEXT_LIMIT: usize = 8_000;
pub const QUESTION_TEXT_LIMIT: usize = 12_000;
pub const SECTIONS_TEXT_LIMIT: usize = 12_000;

/// Writing style requested from the model for a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    #[default]
    Paragraph,
    Bullets,
    Academic,
    Simple,
}

impl SummaryStyle {
    fn instruction(&self) -> &'static str {
        match self {
            SummaryStyle::Paragraph => {
                "Write the summary as fluent, well-structured paragraphs."
            }
            SummaryStyle::Bullets => "Write the summary as clear, concise bullet points.",
            SummaryStyle::Academic => {
                "Write the summary in a formal academic style with an introduction, a body and a conclusion."
            }
            SummaryStyle::Simple => {
                "Write the summary in simple, accessible language, as if explaining to a beginner."
            }
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SummaryStyle::Paragraph => "paragraph",
            SummaryStyle::Bullets => "bullets",
            SummaryStyle::Academic => "academic",
            SummaryStyle::Simple => "simple",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for SummaryStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paragraph" => Ok(SummaryStyle::Paragraph),
            "bullets" => Ok(SummaryStyle::Bullets),
            "academic" => Ok(SummaryStyle::Academic),
            "simple" => Ok(SummaryStyle::Simple),
            other => Err(AppError::Validation(format!("Unknown summary style: {}", other))),
        }
    }
}

/// Human-readable name for a language code; unknown codes pass through.
pub fn language_name(code: &str) -> &str {
    match code {
        "fr" => "French",
        "en" => "English",
        "es" => "Spanish",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "ar" => "Arabic",
        "zh" => "Chinese",
        "ja" => "Japanese",
        "ru" => "Russian",
        other => other,
    }
}

/// First `max_chars` characters of `text`, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Strip a Markdown code fence (```json or ```) around a model answer.
pub fn strip_code_fences(content: &str) -> &str {
    let content = content.trim();
    let inner = if let Some((_, rest)) = content.split_once("```json") {
        rest
    } else if let Some((_, rest)) = content.split_once("```") {
        rest
    } else {
        return content;
    };
    inner.split("```").next().unwrap_or(inner).trim()
}

/// Parse a JSON model answer, fenced or not.
pub fn parse_json_answer<T: DeserializeOwned>(content: &str) -> Result<T, AppError> {
    Ok(serde_json::from_str(strip_code_fences(content))?)
}

pub fn summary(text: &str, target_words: usize, style: SummaryStyle) -> CompletionRequest {
    CompletionRequest {
        system: "You are an expert at condensing documents. You write clear, faithful summaries."
            .to_string(),
        prompt: format!(
            "Summarize the following text in about {} words.\n\n\
             STYLE: {}\n\n\
             INSTRUCTIONS:\n\
             - Rephrase the main ideas\n\
             - Keep the key information\n\
             - Write in the same language as the original text\n\
             - Answer ONLY with the summary\n\n\
             TEXT:\n{}",
            target_words,
            style.instruction(),
            truncate_chars(text, SUMMARY_TEXT_LIMIT)
        ),
        temperature: 0.3,
        max_tokens: u32::try_from(target_words.saturating_mul(4)).unwrap_or(u32::MAX),
    }
}

pub fn keywords(text: &str, count: usize) -> CompletionRequest {
    CompletionRequest {
        system: "You extract the most important keywords from a text.".to_string(),
        prompt: format!(
            "Extract the {} most important keywords from this text.\n\
             Answer in JSON with exactly this format: {{\"keywords\": [\"word1\", \"word2\", ...]}}\n\n\
             TEXT:\n{}",
            count,
            truncate_chars(text, KEYWORDS_TEXT_LIMIT)
        ),
        temperature: 0.2,
        max_tokens: 500,
    }
}

pub fn translation(text: &str, language: &str) -> CompletionRequest {
    CompletionRequest {
        system: format!(
            "You are a professional translator. Translate the text faithfully into {}.",
            language
        ),
        prompt: format!(
            "Translate this text into {}. Answer ONLY with the translation:\n\n{}",
            language,
            truncate_chars(text, TRANSLATION_TEXT_LIMIT)
        ),
        temperature: 0.3,
        max_tokens: 4000,
    }
}

pub fn sentiment(text: &str) -> CompletionRequest {
    CompletionRequest {
        system: "You analyze the sentiment and tone of texts.".to_string(),
        prompt: format!(
            "Analyze the sentiment of this text.\n\
             Answer in JSON with exactly this format:\n\
             {{\"sentiment\": \"positive\" or \"negative\" or \"neutral\", \
             \"score\": number between -1 and 1, \
             \"emotions\": [\"emotion1\", \"emotion2\"], \
             \"tone\": \"description of the overall tone\"}}\n\n\
             TEXT:\n{}",
            truncate_chars(text, SENTIMENT_TEXT_LIMIT)
        ),
        temperature: 0.2,
        max_tokens: 300,
    }
}

pub fn titles(text: &str, count: usize) -> CompletionRequest {
    CompletionRequest {
        system: "You write catchy, relevant titles.".to_string(),
        prompt: format!(
            "Suggest {} titles for this text.\n\
             Answer in JSON: {{\"titles\": [\"title1\", \"title2\", \"title3\"]}}\n\n\
             TEXT:\n{}",
            count,
            truncate_chars(text, TITLES_TEXT_LIMIT)
        ),
        temperature: 0.7,
        max_tokens: 200,
    }
}

pub fn question(text: &str, question: &str) -> CompletionRequest {
    CompletionRequest {
        system: "You answer questions using ONLY the provided text. \
                 If the answer is not in the text, say so clearly."
            .to_string(),
        prompt: format!(
            "DOCUMENT:\n{}\n\nQUESTION: {}\n\nAnswer precisely and concisely.",
            truncate_chars(text, QUESTION_TEXT_LIMIT),
            question
        ),
        temperature: 0.3,
        max_tokens: 1000,
    }
}

pub fn sections(text: &str, words_per_section: usize) -> CompletionRequest {
    CompletionRequest {
        system: "You analyze and summarize documents section by section.".to_string(),
        prompt: format!(
            "Analyze this text and write a summary structured by sections.\n\
             Identify the main parts and summarize each in about {} words.\n\n\
             Answer in JSON:\n\
             {{\"sections\": [{{\"title\": \"Section title\", \"summary\": \"Summary...\"}}], \
             \"total_sections\": number}}\n\n\
             TEXT:\n{}",
            words_per_section,
            truncate_chars(text, SECTIONS_TEXT_LIMIT)
        ),
        temperature: 0.3,
        max_tokens: 2000,
    }
}
