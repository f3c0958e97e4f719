// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get ordered and cut.
//!
//! Both rankers behave like a greedy selector whose running best starts at 0
//! and is only replaced by a strictly better candidate. That selector is
//! equivalent to:
//!
//! 1. drop every candidate scoring `<= 0`,
//! 2. stable-sort the rest by the ranking key,
//! 3. take the first `n`.
//!
//! The stable sort is what keeps first-encountered order as the last tie-break,
//! so the candidate vector must arrive in collection order.

use std::cmp::Ordering;

use crate::contracts::check_selection;
use crate::types::Ranked;

use super::core::SELECTION_THRESHOLD;

/// A scored member awaiting selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub id: &'a str,
    pub score: f64,
    /// Secondary key for equal scores. `None` means "no tie-break beyond order".
    pub density: Option<f64>,
}

/// Compare two candidates for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Density** - descending, only when both candidates carry one
/// 3. `Equal` otherwise, so a stable sort keeps input order
pub fn compare_candidates(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => match (a.density, b.density) {
            (Some(da), Some(db)) => db.partial_cmp(&da).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

/// Select up to `n` candidates with positive scores, best first.
pub fn select_top(mut candidates: Vec<Candidate<'_>>, n: usize) -> Vec<Ranked> {
    candidates.retain(|c| c.score > SELECTION_THRESHOLD);
    candidates.sort_by(compare_candidates);

    let ranked: Vec<Ranked> = candidates
        .into_iter()
        .take(n)
        .map(|c| Ranked {
            id: c.id.to_string(),
            score: c.score,
        })
        .collect();

    check_selection(&ranked, n);
    ranked
}
