//! Stop-word filtering.
//!
//! Function words are excluded before any frequency computation so that scoring
//! leans toward content-bearing terms. The set is a plain value handed to the
//! engine, so new locales are added by building a different set, not by
//! touching the scoring code.

use std::collections::HashSet;

/// Stopwords for French language
pub const STOPWORDS_FR: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "d", "l", "au", "aux", "à", "et", "ou",
    "où", "mais", "donc", "or", "ni", "car", "je", "tu", "il", "elle", "on", "nous", "vous",
    "ils", "elles", "me", "te", "se", "lui", "leur", "leurs", "y", "en", "mon", "ton", "son",
    "ma", "ta", "sa", "mes", "tes", "ses", "notre", "votre", "nos", "vos", "ce", "cet", "cette",
    "ces", "ça", "ceci", "cela", "qui", "que", "quoi", "dont", "lequel", "laquelle", "ne", "pas",
    "plus", "moins", "très", "trop", "peu", "bien", "mal", "être", "est", "sont", "était",
    "étaient", "sera", "seront", "avoir", "ai", "as", "a", "avons", "avez", "ont", "avait",
    "avaient", "faire", "fait", "fais", "font", "faisait", "aller", "va", "vais", "vont",
    "allait", "pouvoir", "peut", "peux", "peuvent", "pouvait", "vouloir", "veut", "veux",
    "veulent", "voulait", "devoir", "doit", "dois", "doivent", "devait", "dans", "sur", "sous",
    "avec", "sans", "pour", "par", "entre", "avant", "après", "pendant", "depuis", "jusqu",
    "jusque", "ici", "là", "voici", "voilà", "quand", "comment", "pourquoi", "combien", "tout",
    "tous", "toute", "toutes", "autre", "autres", "même", "mêmes", "aussi", "encore", "déjà",
    "toujours", "jamais", "si", "alors", "ainsi", "comme", "parce", "puisque", "lorsque", "oui",
    "non", "c", "n", "s", "t", "qu", "j", "m",
];

/// Stopwords for English language
pub const STOPWORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "nor", "for", "yet", "so", "i", "you", "he", "she", "it",
    "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their",
    "mine", "yours", "hers", "ours", "theirs", "this", "that", "these", "those", "who", "whom",
    "which", "what", "whose", "is", "am", "are", "was", "were", "be", "been", "being", "have",
    "has", "had", "having", "do", "does", "did", "doing", "will", "would", "shall", "should",
    "can", "could", "may", "might", "must", "of", "in", "on", "at", "to", "from", "by", "with",
    "about", "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "up", "down", "out", "off", "over", "under", "again", "further", "here", "there",
    "where", "when", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other",
    "some", "any", "no", "not", "only", "own", "same", "than", "too", "very", "just", "also",
    "now", "then", "once", "always", "never", "if", "because", "as", "until", "while",
    "although", "though", "yes", "maybe", "s", "t", "ve", "re", "ll", "d", "m",
];

/// A case-insensitive, exact-match stop-word set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    /// French and English combined.
    fn default() -> Self {
        let mut stopwords = Self::from_list(STOPWORDS_FR);
        stopwords.extend(STOPWORDS_EN);
        stopwords
    }
}

impl StopWords {
    /// Build a set from a custom word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// An empty set (nothing is filtered)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Add more words, e.g. another locale's list
    pub fn extend(&mut self, words: &[&str]) {
        self.words.extend(words.iter().map(|w| w.to_lowercase()));
    }

    /// Check if a token is a stop word. No stemming is applied.
    pub fn is_stopword(&self, token: &str) -> bool {
        if token.chars().any(char::is_uppercase) {
            self.words.contains(&token.to_lowercase())
        } else {
            self.words.contains(token)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_both_languages() {
        let stopwords = StopWords::default();
        assert!(stopwords.is_stopword("le"));
        assert!(stopwords.is_stopword("dans"));
        assert!(stopwords.is_stopword("the"));
        assert!(stopwords.is_stopword("were"));
        assert!(!stopwords.is_stopword("chat"));
        assert!(!stopwords.is_stopword("database"));
    }

    #[test]
    fn test_case_insensitive() {
        let stopwords = StopWords::default();
        assert!(stopwords.is_stopword("The"));
        assert!(stopwords.is_stopword("ÉTAIT"));
    }

    #[test]
    fn test_exact_match_only() {
        let stopwords = StopWords::default();
        // no stemming: "chats" is not "chat", "theme" is not "the"
        assert!(!stopwords.is_stopword("theme"));
        assert!(!stopwords.is_stopword("lesquels"));
    }

    #[test]
    fn test_custom_locale() {
        let mut stopwords = StopWords::from_list(&["der", "die", "das"]);
        assert!(stopwords.is_stopword("Das"));
        assert!(!stopwords.is_stopword("the"));

        stopwords.extend(&["und"]);
        assert!(stopwords.is_stopword("und"));
        assert_eq!(stopwords.len(), 4);
    }

    #[test]
    fn test_empty_filters_nothing() {
        let stopwords = StopWords::empty();
        assert!(stopwords.is_empty());
        assert!(!stopwords.is_stopword("le"));
    }
}
