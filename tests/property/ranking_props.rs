//! Ranker properties.
//!
//! - Never more than `n` results, never a score <= 0
//! - Identical output for identical input
//! - Agreement with the greedy-scan oracles, tie-breaks included

use proptest::prelude::*;
use quire::{compute_idfs, rank_files, rank_sentences, UnknownTermPolicy};

use crate::common::ids;
use crate::oracles::{build, members_strategy, oracle_top_files, oracle_top_sentences, query_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: results are bounded by `n` and all positive.
    #[test]
    fn prop_files_bounded_and_positive(
        members in members_strategy(0),
        query in query_strategy(),
        n in 0usize..8,
    ) {
        let docs = build(&members);
        let idfs = compute_idfs(&docs);
        let ranked = rank_files(&query, &docs, &idfs, n, UnknownTermPolicy::Ignore).unwrap();

        prop_assert!(ranked.len() <= n);
        prop_assert!(ranked.iter().all(|r| r.score > 0.0));
    }

    /// Property: no positive-scoring document is left out while slots remain.
    #[test]
    fn prop_files_fill_slots_with_positive_scores(
        members in members_strategy(0),
        query in query_strategy(),
        n in 1usize..8,
    ) {
        let docs = build(&members);
        let idfs = compute_idfs(&docs);
        let ranked = rank_files(&query, &docs, &idfs, n, UnknownTermPolicy::Ignore).unwrap();
        let everything = rank_files(&query, &docs, &idfs, usize::MAX, UnknownTermPolicy::Ignore).unwrap();

        prop_assert_eq!(ranked.len(), everything.len().min(n));
    }

    /// Property: sort-based document ranking equals the greedy scan.
    #[test]
    fn prop_files_match_greedy_oracle(
        members in members_strategy(0),
        query in query_strategy(),
        n in 1usize..8,
    ) {
        let docs = build(&members);
        let idfs = compute_idfs(&docs);
        let ranked = rank_files(&query, &docs, &idfs, n, UnknownTermPolicy::Ignore).unwrap();

        prop_assert_eq!(ids(&ranked), oracle_top_files(&query, &docs, &idfs, n));
    }

    /// Property: sort-based sentence ranking equals the greedy scan with
    /// density challenges.
    #[test]
    fn prop_sentences_match_greedy_oracle(
        members in members_strategy(1),
        query in query_strategy(),
        n in 1usize..8,
    ) {
        let sentences = build(&members);
        let idfs = compute_idfs(&sentences);
        let ranked = rank_sentences(&query, &sentences, &idfs, n, UnknownTermPolicy::Ignore).unwrap();

        prop_assert!(ranked.len() <= n);
        prop_assert!(ranked.iter().all(|r| r.score > 0.0));
        prop_assert_eq!(ids(&ranked), oracle_top_sentences(&query, &sentences, &idfs, n));
    }

    /// Property: ranking twice gives the same answer.
    #[test]
    fn prop_rankers_idempotent(
        members in members_strategy(1),
        query in query_strategy(),
        n in 1usize..8,
    ) {
        let collection = build(&members);
        let idfs = compute_idfs(&collection);

        let files = rank_files(&query, &collection, &idfs, n, UnknownTermPolicy::Ignore).unwrap();
        let files_again = rank_files(&query, &collection, &idfs, n, UnknownTermPolicy::Ignore).unwrap();
        prop_assert_eq!(files, files_again);

        let sentences = rank_sentences(&query, &collection, &idfs, n, UnknownTermPolicy::Ignore).unwrap();
        let sentences_again = rank_sentences(&query, &collection, &idfs, n, UnknownTermPolicy::Ignore).unwrap();
        prop_assert_eq!(sentences, sentences_again);
    }

    /// Property: the document ranker under `Reject` fails exactly when a query
    /// term is missing from the table, and otherwise agrees with `Ignore`.
    #[test]
    fn prop_files_reject_iff_term_unknown(
        members in members_strategy(0),
        query in query_strategy(),
        n in 1usize..8,
    ) {
        let docs = build(&members);
        let idfs = compute_idfs(&docs);
        let all_known = query.iter().all(|w| idfs.contains(w));

        let rejected = rank_files(&query, &docs, &idfs, n, UnknownTermPolicy::Reject);
        prop_assert_eq!(rejected.is_ok(), all_known);
        if let Ok(ranked) = rejected {
            let ignored = rank_files(&query, &docs, &idfs, n, UnknownTermPolicy::Ignore).unwrap();
            prop_assert_eq!(ranked, ignored);
        }
    }

    /// Property: with IDFs computed over the sentences themselves, `Reject`
    /// never fails the sentence ranker, whatever the query holds.
    #[test]
    fn prop_sentences_reject_never_fails_on_own_table(
        members in members_strategy(1),
        query in query_strategy(),
        n in 1usize..8,
    ) {
        let sentences = build(&members);
        let idfs = compute_idfs(&sentences);

        let rejected = rank_sentences(&query, &sentences, &idfs, n, UnknownTermPolicy::Reject);
        let ignored = rank_sentences(&query, &sentences, &idfs, n, UnknownTermPolicy::Ignore).unwrap();
        prop_assert_eq!(rejected, Ok(ignored));
    }
}
