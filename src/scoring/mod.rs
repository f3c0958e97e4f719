// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how documents and sentences get their numbers.
//!
//! Two passes share one IDF calculator and one selection policy. Documents are
//! scored by TF-IDF, sentences by summed IDF with a query-term-density
//! tie-break. Nothing scoring zero or less is ever returned.

mod core;
pub mod documents;
pub mod idf;
pub mod ranking;
pub mod sentences;

pub use core::*;
