//! Reference oracles for differential testing, plus shared strategies.
//!
//! The oracles are the slow, obviously-correct greedy scans: keep a running
//! best that starts at zero, replace it only with something strictly better,
//! remove the winner, repeat. The library sorts instead; these make sure the
//! two agree, ties included.

use proptest::prelude::*;
use quire::{Collection, Entry, IdfTable, Query};

// =============================================================================
// STRATEGIES
// =============================================================================

/// Tiny vocabulary: ties and shared terms are common.
pub const VOCABULARY: &[&str] = &["cat", "dog", "mat", "sat", "ran", "fast", "tree"];

pub fn token_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(VOCABULARY).prop_map(str::to_string)
}

/// Members as `(id, tokens)` with unique ids `m0, m1, ...`.
pub fn members_strategy(min_tokens: usize) -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(prop::collection::vec(token_strategy(), min_tokens..6), 0..7).prop_map(
        |members| {
            members
                .into_iter()
                .enumerate()
                .map(|(i, tokens)| (format!("m{i}"), tokens))
                .collect()
        },
    )
}

pub fn query_strategy() -> impl Strategy<Value = Query> {
    prop::collection::vec(token_strategy(), 0..4).prop_map(|tokens| tokens.into_iter().collect())
}

pub fn build(members: &[(String, Vec<String>)]) -> Collection {
    members.iter().cloned().collect()
}

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

fn oracle_tf_idf(query: &Query, entry: &Entry, idfs: &IdfTable) -> f64 {
    query
        .iter()
        .map(|w| idfs.get(w).unwrap_or(0.0) * entry.count(w) as f64)
        .sum()
}

fn oracle_idf_sum(query: &Query, entry: &Entry, idfs: &IdfTable) -> f64 {
    query
        .iter()
        .filter(|w| entry.contains(w))
        .map(|w| idfs.get(w).unwrap_or(0.0))
        .sum()
}

fn oracle_density(query: &Query, entry: &Entry) -> f64 {
    let matches: usize = query.iter().map(|w| entry.count(w)).sum();
    matches as f64 / entry.tokens.len() as f64
}

/// Greedy document selection with a zero baseline and strict improvement.
pub fn oracle_top_files(query: &Query, docs: &Collection, idfs: &IdfTable, n: usize) -> Vec<String> {
    let mut remaining: Vec<(&Entry, f64)> = docs
        .iter()
        .map(|e| (e, oracle_tf_idf(query, e, idfs)))
        .collect();

    let mut ranked = Vec::new();
    while !remaining.is_empty() && ranked.len() < n {
        let mut best = 0.0;
        let mut pick = None;
        for (i, (_, score)) in remaining.iter().enumerate() {
            if *score > best {
                best = *score;
                pick = Some(i);
            }
        }
        match pick {
            Some(i) => ranked.push(remaining.remove(i).0.id.clone()),
            None => break,
        }
    }
    ranked
}

/// Greedy sentence selection: equal scores are challenged on density.
pub fn oracle_top_sentences(
    query: &Query,
    sentences: &Collection,
    idfs: &IdfTable,
    n: usize,
) -> Vec<String> {
    let mut remaining: Vec<(&Entry, f64)> = sentences
        .iter()
        .map(|e| (e, oracle_idf_sum(query, e, idfs)))
        .collect();

    let mut ranked = Vec::new();
    while !remaining.is_empty() && ranked.len() < n {
        let mut best = 0.0;
        let mut pick: Option<usize> = None;
        for (i, (entry, score)) in remaining.iter().enumerate() {
            if *score > best {
                best = *score;
                pick = Some(i);
            } else if *score == best {
                if let Some(held) = pick {
                    if oracle_density(query, entry) > oracle_density(query, remaining[held].0) {
                        pick = Some(i);
                    }
                }
            }
        }
        match pick {
            Some(i) => ranked.push(remaining.remove(i).0.id.clone()),
            None => break,
        }
    }
    ranked
}
