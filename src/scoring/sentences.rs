// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentence ranking by summed IDF, density as tie-break.
//!
//! The IDF table passed in should be computed over the sentence collection
//! itself, not over the documents the sentences came from. A word common to
//! the whole corpus can still be rare among the sentences of one document.

use crate::error::RankError;
use crate::types::{Collection, IdfTable, Query, Ranked, UnknownTermPolicy};

use super::core::{idf_sum_score, map_entries, query_term_density, resolve_query};
use super::ranking::{select_top, Candidate};

/// Rank sentences against `query`, returning at most `n` with scores.
///
/// Equal scores are ordered by query term density (higher first), then by
/// position in `sentences`. Density counts every query token in the sentence,
/// including ones with no IDF entry.
///
/// Only query tokens that occur in at least one sentence are looked up in
/// `idfs`, so `policy` applies to those alone. A token found in no sentence
/// adds nothing and is never an error; with `idfs` computed over `sentences`
/// the lookup cannot miss.
pub fn rank_sentences(
    query: &Query,
    sentences: &Collection,
    idfs: &IdfTable,
    n: usize,
    policy: UnknownTermPolicy,
) -> Result<Vec<Ranked>, RankError> {
    let present = present_terms(query, sentences);
    let terms = resolve_query(&present, idfs, policy)?;

    let candidates = map_entries(sentences, |entry| Candidate {
        id: entry.id.as_str(),
        score: idf_sum_score(&terms, entry),
        density: Some(query_term_density(query, entry)),
    });

    Ok(select_top(candidates, n))
}

/// Query tokens that occur in at least one member.
fn present_terms(query: &Query, sentences: &Collection) -> Query {
    query
        .iter()
        .filter(|term| sentences.iter().any(|entry| entry.contains(term)))
        .collect()
}

/// Text of the top `n` sentences for `query`.
///
/// Query tokens that occur in a sentence but are missing from `idfs` are
/// rejected; use [`rank_sentences`] to pick a different policy.
pub fn top_sentences(
    query: &Query,
    sentences: &Collection,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<String>, RankError> {
    let ranked = rank_sentences(query, sentences, idfs, n, UnknownTermPolicy::Reject)?;
    Ok(ranked.into_iter().map(|r| r.id).collect())
}
