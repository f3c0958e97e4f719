// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text processing: turning raw text into the token sequences the rankers eat.
//!
//! Words and sentences come from Unicode segmentation (UAX #29). A token is a
//! word that survived normalization (diacritics folded, lowercased) and is
//! neither pure punctuation nor an English stopword.
//!
//! Sentences never span a line break. Each line is treated as a passage and
//! split on its own, so headings and list items don't get glued to whatever
//! follows them.
//!
//! UAX #29 has no abbreviation list: a period followed by a space and a capital
//! letter always ends a sentence, so "Dr. Smith" splits after "Dr.". A period
//! followed by a lowercase word ("e.g. tuna") does not.

mod stopwords;

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Collection, Token};
use crate::util::normalize_word;

pub use stopwords::is_stopword;

/// Split text into normalized tokens, in order, dropping stopwords and punctuation.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_word_bounds()
        .filter(|segment| !is_punctuation(segment))
        .map(|word| normalize_word(&word.replace('\u{2019}', "'")))
        .filter(|word| !is_stopword(word))
        .collect()
}

/// True when a word-boundary segment has no alphanumeric character at all:
/// punctuation, whitespace, and symbol runs.
fn is_punctuation(segment: &str) -> bool {
    !segment.chars().any(char::is_alphanumeric)
}

/// Split text into trimmed, non-empty sentences, passage by passage.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|passage| passage.unicode_sentences())
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(String::from)
        .collect()
}

/// Build the sentence collection for a set of texts.
///
/// Sentences are keyed by their own text, in the order they appear. Sentences
/// with no tokens left after filtering are skipped entirely. A sentence that
/// occurs twice keeps its first position.
pub fn sentence_collection<'a>(texts: impl IntoIterator<Item = &'a str>) -> Collection {
    let mut sentences = Collection::new();
    for text in texts {
        for sentence in split_sentences(text) {
            let tokens = tokenize(&sentence);
            if !tokens.is_empty() {
                sentences.insert(sentence, tokens);
            }
        }
    }
    sentences
}
