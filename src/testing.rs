// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Collection, IdfTable, Query};

/// Build a collection from `(id, tokens)` pairs, keeping the given order.
pub fn collection(members: &[(&str, &[&str])]) -> Collection {
    members
        .iter()
        .map(|(id, tokens)| (*id, tokens.iter().copied()))
        .collect()
}

/// Build a query from token literals.
pub fn query(tokens: &[&str]) -> Query {
    tokens.iter().copied().collect()
}

/// Build an IDF table with fixed values, bypassing `compute_idfs`.
pub fn idf_table(values: &[(&str, f64)]) -> IdfTable {
    values.iter().copied().collect()
}

/// A three-document corpus about animals, used by loader and pipeline tests.
pub fn animal_corpus() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "cats.txt",
            "Cats are small carnivorous mammals.\nA cat sleeps for most of the day. Cats purr when content.",
        ),
        (
            "dogs.txt",
            "Dogs are loyal companions.\nA dog barks at strangers. Dogs were domesticated from wolves.",
        ),
        (
            "birds.txt",
            "Birds have feathers and lay eggs.\nMany birds migrate south in winter.",
        ),
    ]
}
