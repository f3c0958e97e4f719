// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverse document frequency over a collection.
//!
//! `idf(t) = ln(N / df(t))` where `N` is the number of members and `df(t)` the
//! number of members containing `t` at least once. No smoothing: a token found
//! in every member gets exactly 0, which makes it useless for ranking.

use std::collections::{HashMap, HashSet};

use crate::contracts::check_idf_table;
use crate::types::{Collection, IdfTable};

use super::core::map_entries;

/// IDF of a single token given the collection size and its document frequency.
///
/// `document_frequency` must be in `1..=members`.
#[inline]
pub fn inverse_document_frequency(members: usize, document_frequency: usize) -> f64 {
    (members as f64 / document_frequency as f64).ln()
}

/// Document frequency of every distinct token: presence per member, not count.
pub fn document_frequencies(collection: &Collection) -> HashMap<&str, usize> {
    let distinct: Vec<HashSet<&str>> = map_entries(collection, |entry| {
        entry.tokens.iter().map(String::as_str).collect()
    });

    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    for tokens in distinct {
        for token in tokens {
            *frequencies.entry(token).or_insert(0) += 1;
        }
    }
    frequencies
}

/// Compute the IDF table for a collection.
///
/// An empty collection yields an empty table. The result depends only on which
/// tokens each member contains, never on iteration order.
pub fn compute_idfs(collection: &Collection) -> IdfTable {
    let members = collection.len();
    let table: IdfTable = document_frequencies(collection)
        .into_iter()
        .map(|(token, df)| (token, inverse_document_frequency(members, df)))
        .collect();

    check_idf_table(&table, collection);
    table
}
