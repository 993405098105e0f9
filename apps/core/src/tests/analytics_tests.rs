//! Analytics Engine Tests
//!
//! Properties of the engine that must hold for any input text.

use crate::analytics::{self, tokenizer, Complexity, StopWords, TextAnalyzer};

const CORPUS: &[&str] = &[
    "Le chat mange. Le chat dort. Le chien court vite dans le jardin vert.",
    "Rust is a systems programming language. It guarantees memory safety without a garbage collector. \
     Ownership and borrowing are checked at compile time! Is it hard to learn? Many developers say the \
     compiler is a patient guide.",
    "La documentation technique décrit l'architecture du système.\n\n\
     Chaque module possède une responsabilité claire. Les modules communiquent par messages. \
     L'architecture favorise les tests.\n\n\
     Les tests vérifient chaque module séparément",
    "One sentence without a terminator but with quite a few words in it to exceed small targets",
    "Short. Tiny! Small? Brief...",
];

#[cfg(test)]
mod summarizer_properties {
    use super::*;

    #[test]
    fn test_within_target_is_verbatim() {
        for text in CORPUS {
            let words = tokenizer::words(text).len();
            assert_eq!(analytics::summarize_extractive(text, words), *text);
            assert_eq!(analytics::summarize_extractive(text, words + 10), *text);
        }
    }

    #[test]
    fn test_summary_is_ordered_subsequence_of_sentences() {
        for text in CORPUS {
            let words = tokenizer::words(text).len();
            for target in [1, 3, 5, 10, 20] {
                if words <= target {
                    continue;
                }

                let summary = analytics::summarize_extractive(text, target);
                assert!(!summary.is_empty(), "Empty summary for target {}", target);

                let originals: Vec<String> =
                    tokenizer::sentences(text).into_iter().map(|s| s.text).collect();
                let picked: Vec<String> =
                    tokenizer::sentences(&summary).into_iter().map(|s| s.text).collect();

                let mut cursor = 0;
                for sentence in &picked {
                    let found = originals[cursor..].iter().position(|o| o == sentence);
                    match found {
                        Some(idx) => cursor += idx + 1,
                        None => panic!("'{}' is not an in-order original sentence", sentence),
                    }
                }

                let summary_words = tokenizer::words(&summary).len() as f64;
                if picked.len() > 1 {
                    assert!(
                        summary_words <= target as f64 * 1.2,
                        "{} words for target {}",
                        summary_words,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn test_frequent_sentences_win() {
        assert_eq!(
            analytics::summarize_extractive(CORPUS[0], 5),
            "Le chat mange. Le chat dort."
        );
    }

    #[test]
    fn test_blank_text_never_fails() {
        assert_eq!(analytics::summarize_extractive("", 0), "");
        assert_eq!(analytics::summarize_extractive("   \n ", 5), "   \n ");
        assert_eq!(analytics::summarize_extractive("... !!! ???", 1), "... !!! ???");
    }
}

#[cfg(test)]
mod stats_properties {
    use super::*;

    #[test]
    fn test_empty_text_is_all_zero() {
        let stats = analytics::compute_stats("");

        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.char_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.paragraph_count, 0);
        assert_eq!(stats.avg_word_length, 0.0);
        assert_eq!(stats.avg_sentence_length, 0.0);
        assert_eq!(stats.reading_time_minutes, 0.0);
        assert_eq!(stats.complexity_score, 0.0);
        assert_eq!(stats.complexity, Complexity::Easy);
    }

    #[test]
    fn test_idempotent() {
        for text in CORPUS {
            assert_eq!(analytics::compute_stats(text), analytics::compute_stats(text));
        }
    }

    #[test]
    fn test_greeting_example() {
        let stats = analytics::compute_stats("Bonjour. Comment vas-tu?");

        assert_eq!(stats.sentence_count, 2);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.word_count, 4);
    }

    #[test]
    fn test_complexity_boundary_thirty_is_medium() {
        // Ten five-character words in one sentence: (5 * 10 + 10) / 2 = 30
        let text = "aaaaa bbbbb ccccc ddddd eeeee fffff ggggg hhhhh iiiii abcd.";
        let stats = analytics::compute_stats(text);

        assert_eq!(stats.complexity_score, 30.0);
        assert_eq!(stats.complexity, Complexity::Medium);
    }

    #[test]
    fn test_complexity_boundary_fifty_is_complex() {
        // Ten nine-character words in one sentence: (9 * 10 + 10) / 2 = 50
        let text = "aaaaaaaaa bbbbbbbbb ccccccccc ddddddddd eeeeeeeee \
                    fffffffff ggggggggg hhhhhhhhh iiiiiiiii abcdefgh.";
        let stats = analytics::compute_stats(text);

        assert_eq!(stats.complexity_score, 50.0);
        assert_eq!(stats.complexity, Complexity::Complex);
    }

    #[test]
    fn test_paragraphs_counted() {
        let stats = analytics::compute_stats(CORPUS[2]);
        assert_eq!(stats.paragraph_count, 3);
        assert_eq!(stats.sentence_count, 5);
    }
}

#[cfg(test)]
mod frequency_properties {
    use super::*;

    #[test]
    fn test_word_cloud_sizes_in_range() {
        for text in CORPUS {
            for max_words in [1, 3, 50] {
                let cloud = analytics::word_cloud(text, max_words);
                assert!(cloud.len() <= max_words);

                if let Some(first) = cloud.first() {
                    assert_eq!(first.size, 100);
                    assert!(cloud.iter().all(|term| term.count <= first.count));
                }
                assert!(cloud.iter().all(|term| term.size <= 100));
            }
        }
    }

    #[test]
    fn test_word_cloud_ranks_repeated_terms() {
        let cloud = analytics::word_cloud(CORPUS[2], 3);

        // Equal counts keep first-seen order
        assert_eq!(cloud[0].term, "architecture");
        assert!(cloud.iter().all(|term| term.count == 2 && term.size == 100));
    }

    #[test]
    fn test_keywords_skip_stopwords_and_short_tokens() {
        let keywords = analytics::top_keywords(CORPUS[0], 10);

        assert!(keywords.contains(&"chat".to_string()));
        assert!(!keywords.iter().any(|k| k == "le" || k == "dans"));
        assert!(keywords.iter().all(|k| k.chars().count() >= 4));
        assert_eq!(keywords[0], "chat");
    }

    #[test]
    fn test_injected_stopwords() {
        let mut stopwords = StopWords::default();
        stopwords.extend(&["chat"]);
        let analyzer = TextAnalyzer::with_stopwords(stopwords);

        assert!(!analyzer.top_keywords(CORPUS[0], 10).contains(&"chat".to_string()));
        assert!(analyzer.word_cloud(CORPUS[0], 50).iter().all(|term| term.term != "chat"));
    }
}

#[cfg(test)]
mod concurrency_tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_analyzer_shared_across_threads() {
        let analyzer = Arc::new(TextAnalyzer::new());
        let expected = analyzer.report(CORPUS[1], 5, 10);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analyzer = Arc::clone(&analyzer);
                std::thread::spawn(move || analyzer.report(CORPUS[1], 5, 10))
            })
            .collect();

        for handle in handles {
            let report = handle.join().unwrap();
            assert_eq!(report.stats, expected.stats);
            assert_eq!(report.keywords, expected.keywords);
            assert_eq!(report.word_cloud, expected.word_cloud);
        }
    }
}
