// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind both ranking passes.
//!
//! # Formulas
//!
//! | Pass      | Score                                   | Tie-break              |
//! |-----------|-----------------------------------------|------------------------|
//! | Documents | `Σ idf(w) × count(w, doc)` over query   | first-encountered      |
//! | Sentences | `Σ idf(w)` over query words in sentence | density, then first    |
//!
//! The sentence formula ignores term frequency. Repetition only shows up in
//! the density tie-break.

use tracing::debug;

use crate::error::RankError;
use crate::types::{Collection, Entry, IdfTable, Query, UnknownTermPolicy};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Candidates must score strictly above this to be selected.
pub const SELECTION_THRESHOLD: f64 = 0.0;

/// A query token paired with its IDF over the collection being ranked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedTerm<'a> {
    pub term: &'a str,
    pub idf: f64,
}

/// Look up every query token in the IDF table, applying `policy` to misses.
///
/// Runs before any scoring, so a rejected query never produces a partial ranking.
/// Terms come back in the query's sorted order.
pub fn resolve_query<'q>(
    query: &'q Query,
    idfs: &IdfTable,
    policy: UnknownTermPolicy,
) -> Result<Vec<WeightedTerm<'q>>, RankError> {
    let mut terms = Vec::with_capacity(query.len());
    for term in query.iter() {
        match (idfs.get(term), policy) {
            (Some(idf), _) => terms.push(WeightedTerm { term, idf }),
            (None, UnknownTermPolicy::Reject) => {
                return Err(RankError::UnknownTerm {
                    term: term.to_string(),
                })
            }
            (None, UnknownTermPolicy::Ignore) => {
                debug!(term, "ignoring query term with no IDF entry");
            }
        }
    }
    Ok(terms)
}

/// TF-IDF: each query term weighted by how often it occurs in the member.
pub fn tf_idf_score(terms: &[WeightedTerm<'_>], entry: &Entry) -> f64 {
    terms
        .iter()
        .map(|t| t.idf * entry.count(t.term) as f64)
        .sum()
}

/// Summed IDF of the query terms present in the member. Frequency is ignored.
pub fn idf_sum_score(terms: &[WeightedTerm<'_>], entry: &Entry) -> f64 {
    terms
        .iter()
        .filter(|t| entry.contains(t.term))
        .map(|t| t.idf)
        .sum()
}

/// Fraction of the member's tokens (counting repeats) that are query tokens.
///
/// Returns 0 for an empty member rather than dividing by zero.
pub fn query_term_density(query: &Query, entry: &Entry) -> f64 {
    if entry.tokens.is_empty() {
        return 0.0;
    }
    let matches = entry.tokens.iter().filter(|t| query.contains(t)).count();
    matches as f64 / entry.tokens.len() as f64
}

/// Apply `f` to every member, keeping collection order in the output.
///
/// With the `parallel` feature the members are processed on the rayon pool;
/// `collect` on an indexed parallel iterator preserves order either way.
#[cfg(feature = "parallel")]
pub(crate) fn map_entries<'c, T, F>(collection: &'c Collection, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&'c Entry) -> T + Sync + Send,
{
    collection.entries().par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn map_entries<'c, T, F>(collection: &'c Collection, f: F) -> Vec<T>
where
    F: Fn(&'c Entry) -> T,
{
    collection.entries().iter().map(f).collect()
}
