// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document ranking by TF-IDF.

use crate::error::RankError;
use crate::types::{Collection, IdfTable, Query, Ranked, UnknownTermPolicy};

use super::core::{map_entries, resolve_query, tf_idf_score};
use super::ranking::{select_top, Candidate};

/// Rank documents by TF-IDF against `query`, returning at most `n` with scores.
///
/// Ties on score keep the documents' order in `documents`. Documents scoring
/// zero are never returned, so the result can be shorter than `n` even when
/// the collection is larger.
pub fn rank_files(
    query: &Query,
    documents: &Collection,
    idfs: &IdfTable,
    n: usize,
    policy: UnknownTermPolicy,
) -> Result<Vec<Ranked>, RankError> {
    let terms = resolve_query(query, idfs, policy)?;

    let candidates = map_entries(documents, |entry| Candidate {
        id: entry.id.as_str(),
        score: tf_idf_score(&terms, entry),
        density: None,
    });

    Ok(select_top(candidates, n))
}

/// Names of the top `n` documents for `query`.
///
/// Query tokens missing from `idfs` are rejected; use [`rank_files`] to pick
/// a different policy.
pub fn top_files(
    query: &Query,
    documents: &Collection,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<String>, RankError> {
    let ranked = rank_files(query, documents, idfs, n, UnknownTermPolicy::Reject)?;
    Ok(ranked.into_iter().map(|r| r.id).collect())
}
