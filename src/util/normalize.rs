// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word normalization: lowercase and fold diacritics.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a single word for matching: strip diacritics, then lowercase.
///
/// This lets a query typed without accents match accented corpus text:
/// - "Café" → "cafe"
/// - "naïve" → "naive"
/// - "Résumé" → "resume"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
///
/// Without the feature the word is only lowercased.
#[cfg(feature = "unicode-normalization")]
pub fn normalize_word(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
///
/// Examples: ́ (acute), ̄ (macron), ̈ (diaeresis)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
