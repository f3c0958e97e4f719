//! IDF calculator behavior.

use crate::common::{assert_close, collection};
use quire::{compute_idfs, Collection};

#[test]
fn test_every_token_gets_an_entry() {
    let docs = collection(&[
        ("a", &["alpha", "beta"]),
        ("b", &["beta", "gamma", "gamma"]),
        ("c", &["delta"]),
    ]);
    let idfs = compute_idfs(&docs);

    assert_eq!(idfs.len(), 4);
    for token in ["alpha", "beta", "gamma", "delta"] {
        assert!(idfs.contains(token), "missing {token}");
    }
}

#[test]
fn test_values_follow_log_ratio() {
    let docs = collection(&[
        ("a", &["alpha", "beta"]),
        ("b", &["beta", "gamma", "gamma"]),
        ("c", &["delta"]),
    ]);
    let idfs = compute_idfs(&docs);

    assert_close(idfs.get("alpha").unwrap(), (3.0f64).ln());
    assert_close(idfs.get("beta").unwrap(), (1.5f64).ln());
    assert_close(idfs.get("gamma").unwrap(), (3.0f64).ln());
}

#[test]
fn test_token_in_every_member_is_zero() {
    let docs = collection(&[("a", &["dog", "ran"]), ("b", &["dog", "dog", "ran", "fast"])]);
    let idfs = compute_idfs(&docs);

    assert_eq!(idfs.get("dog"), Some(0.0));
    assert_eq!(idfs.get("ran"), Some(0.0));
    assert_close(idfs.get("fast").unwrap(), (2.0f64).ln());
}

#[test]
fn test_empty_collection() {
    assert!(compute_idfs(&Collection::new()).is_empty());
}

#[test]
fn test_single_member_is_all_zero() {
    let docs = collection(&[("only", &["one", "two", "two"])]);
    let idfs = compute_idfs(&docs);
    assert!(idfs.iter().all(|(_, idf)| idf == 0.0));
}
