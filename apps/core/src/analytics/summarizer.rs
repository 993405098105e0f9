//! Extractive summarization.
//!
//! Scores sentences by the average document frequency of their words, keeps the
//! best ones within a word budget and emits them in document order. No model is
//! involved, which makes this the fallback whenever the remote path fails.

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;
use super::stopwords::StopWords;
use super::tokenizer::{self, Sentence};

/// Minimum token length counted in the document frequency table
pub const SUMMARY_MIN_TOKEN_LEN: usize = 3;

/// Allowed overrun of the target word count while accepting sentences
pub const BUDGET_OVERRUN: f64 = 1.2;

/// A sentence with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    /// Average term frequency per word
    pub score: f64,
    /// Position in the segmented document
    pub position: usize,
}

/// Extractive summarizer bound to a stop-word set.
#[derive(Debug, Clone, Default)]
pub struct ExtractiveSummarizer {
    stopwords: StopWords,
}

impl ExtractiveSummarizer {
    pub fn new(stopwords: StopWords) -> Self {
        Self { stopwords }
    }

    /// Score every sentence of `text` against the document's frequency table.
    pub fn score_sentences(&self, text: &str) -> Vec<ScoredSentence> {
        let table = FrequencyTable::from_text(text, &self.stopwords, SUMMARY_MIN_TOKEN_LEN);

        tokenizer::sentences(text)
            .into_iter()
            .enumerate()
            .map(|(position, sentence)| {
                let score = sentence_score(&sentence.text, &table);
                ScoredSentence {
                    sentence,
                    score,
                    position,
                }
            })
            .collect()
    }

    /// Summarize `text` to roughly `target_words` raw words.
    ///
    /// Text already within budget comes back verbatim. Never fails; a
    /// `target_words` of 0 is treated as 1.
    pub fn summarize(&self, text: &str, target_words: usize) -> String {
        let target_words = target_words.max(1);
        if tokenizer::words(text).len() <= target_words {
            return text.to_string();
        }

        let mut ranked = self.score_sentences(text);
        if ranked.is_empty() {
            return text.to_string();
        }

        // Ties keep document order
        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.position.cmp(&b.position))
        });

        let budget = target_words as f64 * BUDGET_OVERRUN;
        let mut selected: Vec<Sentence> = Vec::new();
        let mut word_count = 0usize;

        for scored in &ranked {
            let sentence_words = scored.sentence.word_count();
            if (word_count + sentence_words) as f64 <= budget {
                word_count += sentence_words;
                selected.push(scored.sentence.clone());
            }
            if word_count >= target_words {
                break;
            }
        }

        // Every sentence overruns the budget: keep the best one whole
        if selected.is_empty() {
            selected.push(ranked[0].sentence.clone());
        }

        selected.sort_by_key(|s| s.offset);

        selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Sum of the frequencies of the sentence's letter tokens over their number.
fn sentence_score(sentence: &str, table: &FrequencyTable) -> f64 {
    let tokens = tokenizer::lexical_tokens(sentence, 1);
    if tokens.is_empty() {
        return 0.0;
    }
    let total: usize = tokens.iter().map(|t| table.count(t)).sum();
    total as f64 / tokens.len() as f64
}
