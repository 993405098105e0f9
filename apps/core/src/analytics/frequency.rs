//! Term frequency engine.
//!
//! Counts lexical tokens after stop-word filtering, ranks them by count (ties
//! keep first-seen order) and sizes them for word clouds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::stopwords::StopWords;
use super::tokenizer;

/// Minimum token length for word clouds and general keyword use
pub const CLOUD_MIN_TOKEN_LEN: usize = 3;

/// Minimum token length for the basic keyword fallback
pub const KEYWORD_MIN_TOKEN_LEN: usize = 4;

/// Term counts in descending-count order, ties in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count tokens, skipping stop words and tokens shorter than `min_len` characters.
    pub fn build<I, S>(tokens: I, stopwords: &StopWords, min_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for token in tokens {
            let token = token.as_ref();
            if token.chars().count() < min_len || stopwords.is_stopword(token) {
                continue;
            }
            match positions.get(token) {
                Some(&pos) => entries[pos].1 += 1,
                None => {
                    positions.insert(token.to_string(), entries.len());
                    entries.push((token.to_string(), 1));
                }
            }
        }

        // Stable: equal counts stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (term, _))| (term.clone(), i))
            .collect();

        Self { entries, index }
    }

    /// Tokenize `text` and count its lexical tokens.
    pub fn from_text(text: &str, stopwords: &StopWords, min_len: usize) -> Self {
        Self::build(tokenizer::lexical_tokens(text, min_len), stopwords, min_len)
    }

    /// Count for a term, 0 when absent
    pub fn count(&self, term: &str) -> usize {
        self.index
            .get(term)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0)
    }

    /// All entries, ranked
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// The `n` highest-count terms
    pub fn top_n(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One word-cloud entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudTerm {
    /// The term
    pub term: String,
    /// Raw occurrence count
    pub count: usize,
    /// Display size in `[0, 100]`, relative to the most frequent term
    pub size: u8,
}

/// Sizes the top `n` terms of `table` relative to the highest count among them.
pub fn word_cloud_sizing(table: &FrequencyTable, n: usize) -> Vec<CloudTerm> {
    let top = table.top_n(n);
    let max_count = match top.iter().map(|(_, count)| *count).max() {
        Some(max) if max > 0 => max as f64,
        _ => return vec![],
    };

    top.iter()
        .map(|(term, count)| CloudTerm {
            term: term.clone(),
            count: *count,
            size: ((*count as f64 / max_count) * 100.0).round().clamp(0.0, 100.0) as u8,
        })
        .collect()
}

/// Most frequent terms of at least four letters, the keyword fallback.
///
/// A `count` of 0 is treated as 1.
pub fn top_keywords(text: &str, count: usize, stopwords: &StopWords) -> Vec<String> {
    FrequencyTable::from_text(text, stopwords, KEYWORD_MIN_TOKEN_LEN)
        .top_n(count.max(1))
        .iter()
        .map(|(term, _)| term.clone())
        .collect()
}

/// Word-cloud data for the `max_words` most frequent terms of at least three letters.
///
/// A `max_words` of 0 is treated as 1.
pub fn word_cloud(text: &str, max_words: usize, stopwords: &StopWords) -> Vec<CloudTerm> {
    let table = FrequencyTable::from_text(text, stopwords, CLOUD_MIN_TOKEN_LEN);
    word_cloud_sizing(&table, max_words.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let stopwords = StopWords::default();
        let table = FrequencyTable::from_text(
            "zebra apple zebra mango apple zebra kiwi",
            &stopwords,
            3,
        );

        assert_eq!(table.count("zebra"), 3);
        assert_eq!(table.count("apple"), 2);
        assert_eq!(table.count("missing"), 0);
        let terms: Vec<&str> = table.entries().iter().map(|(t, _)| t.as_str()).collect();
        // mango and kiwi tie at 1: first-seen order
        assert_eq!(terms, vec!["zebra", "apple", "mango", "kiwi"]);
    }

    #[test]
    fn test_stopwords_and_short_tokens_skipped() {
        let stopwords = StopWords::default();
        let table = FrequencyTable::from_text("Le chat et le chien dans la maison ok", &stopwords, 3);

        assert_eq!(table.count("le"), 0);
        assert_eq!(table.count("dans"), 0);
        assert_eq!(table.count("ok"), 0);
        assert_eq!(table.count("chat"), 1);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_top_n_bounds() {
        let stopwords = StopWords::empty();
        let table = FrequencyTable::from_text("alpha beta gamma", &stopwords, 1);
        assert_eq!(table.top_n(2).len(), 2);
        assert_eq!(table.top_n(10).len(), 3);
        assert!(table.top_n(0).is_empty());
    }

    #[test]
    fn test_word_cloud_sizes() {
        let stopwords = StopWords::default();
        let cloud = word_cloud(
            "rust rust rust cargo cargo crate",
            10,
            &stopwords,
        );

        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud[0].term, "rust");
        assert_eq!(cloud[0].size, 100);
        assert_eq!(cloud[1].size, 67);
        assert_eq!(cloud[2].size, 33);
        assert!(cloud.iter().all(|t| t.size <= 100));
    }

    #[test]
    fn test_word_cloud_empty_and_clamped() {
        let stopwords = StopWords::default();
        assert!(word_cloud("", 10, &stopwords).is_empty());
        assert!(word_cloud("the and of", 10, &stopwords).is_empty());
        assert_eq!(word_cloud("alpha beta gamma", 0, &stopwords).len(), 1);
    }

    #[test]
    fn test_word_cloud_counts_ligature_words() {
        let cloud = word_cloud("cœur cœur cœur sœur", 5, &StopWords::default());

        assert_eq!(cloud[0].term, "cœur");
        assert_eq!(cloud[0].count, 3);
        assert_eq!(cloud[0].size, 100);
        assert_eq!(cloud[1].term, "sœur");
        assert_eq!(cloud[1].size, 33);
    }

    #[test]
    fn test_top_keywords_min_length_four() {
        let stopwords = StopWords::default();
        let keywords = top_keywords("chat chat chien chien chien rat rat rat rat", 5, &stopwords);
        assert_eq!(keywords, vec!["chien", "chat"]);
    }

    #[test]
    fn test_top_keywords_zero_count_clamped() {
        let stopwords = StopWords::default();
        let keywords = top_keywords("document analyse document", 0, &stopwords);
        assert_eq!(keywords, vec!["document"]);
    }
}
