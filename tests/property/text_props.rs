//! Tokenizer and sentence splitter properties.

use proptest::prelude::*;
use quire::{sentence_collection, split_sentences, tokenize};
use quire::text::is_stopword;

/// Words, stopwords, and punctuation mixed into sentences.
fn text_strategy() -> impl Strategy<Value = String> {
    let piece = prop::sample::select(vec![
        "Cats", "purr", "the", "and", "Dogs", "BARK", "café", ",", ".", "!", "?", "\n", "is",
        "Neural", "networks",
    ]);
    prop::collection::vec(piece, 0..30).prop_map(|pieces| pieces.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: tokens are lowercase, never stopwords, never bare punctuation.
    #[test]
    fn prop_tokens_are_normalized(text in text_strategy()) {
        for token in tokenize(&text) {
            prop_assert_eq!(token.to_lowercase(), token.clone());
            prop_assert!(!is_stopword(&token), "stopword '{}' survived", token);
            prop_assert!(token.chars().any(char::is_alphanumeric), "punctuation token '{}'", token);
        }
    }

    /// Property: sentences are trimmed, non-empty, and never span a line break.
    #[test]
    fn prop_sentences_trimmed_single_line(text in text_strategy()) {
        for sentence in split_sentences(&text) {
            prop_assert!(!sentence.is_empty());
            prop_assert_eq!(sentence.trim(), sentence.as_str());
            prop_assert!(!sentence.contains('\n'));
        }
    }

    /// Property: every sentence that reaches a ranker has at least one token.
    #[test]
    fn prop_sentence_collection_members_non_empty(text in text_strategy()) {
        let sentences = sentence_collection([text.as_str()]);
        prop_assert!(sentences.iter().all(|e| !e.tokens.is_empty()));
    }
}
