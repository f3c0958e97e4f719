// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking invariants.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (everything sits behind `debug_assert!`
//!    or `cfg(debug_assertions)`)
//! 2. **Early failure** when a change to scoring breaks an invariant during tests
//!
//! | Contract Function   | Invariant                                               |
//! |---------------------|---------------------------------------------------------|
//! | `check_idf_table`   | every member token has an entry, every value is `>= 0`  |
//! | `check_selection`   | `len <= n`, all scores `> 0`, scores non-increasing     |

use crate::scoring::SELECTION_THRESHOLD;
use crate::types::{Collection, IdfTable, Ranked};

// ============================================================================
// IDF CONTRACTS
// ============================================================================

/// Check that an IDF table covers its collection and has no negative values.
///
/// # Panics (debug builds only)
/// Panics if a member token is missing, or a value is negative or not finite.
#[inline]
pub fn check_idf_table(table: &IdfTable, collection: &Collection) {
    #[cfg(debug_assertions)]
    {
        for entry in collection {
            for token in &entry.tokens {
                debug_assert!(
                    table.contains(token),
                    "Contract violation: IdfTable.Complete - token '{}' of member '{}' has no entry",
                    token,
                    entry.id
                );
            }
        }
        for (token, idf) in table.iter() {
            debug_assert!(
                idf.is_finite() && idf >= 0.0,
                "Contract violation: IdfTable.NonNegative - idf('{}') = {}",
                token,
                idf
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = (table, collection);
}

// ============================================================================
// SELECTION CONTRACTS
// ============================================================================

/// Check a ranked selection against the zero threshold and the result bound.
///
/// # Panics (debug builds only)
/// Panics if more than `n` results were selected, any score is at or below
/// the threshold, or scores are out of order.
#[inline]
pub fn check_selection(ranked: &[Ranked], n: usize) {
    debug_assert!(
        ranked.len() <= n,
        "Contract violation: Selection.Bounded - {} results for n = {}",
        ranked.len(),
        n
    );
    debug_assert!(
        ranked.iter().all(|r| r.score > SELECTION_THRESHOLD),
        "Contract violation: Selection.Positive - selected a score <= {}",
        SELECTION_THRESHOLD
    );
    debug_assert!(
        ranked.windows(2).all(|w| w[0].score >= w[1].score),
        "Contract violation: Selection.Sorted - scores not in descending order"
    );
}
