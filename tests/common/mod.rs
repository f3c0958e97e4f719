//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use quire::{Collection, Ranked};

// Re-export canonical test utilities from quire::testing
pub use quire::testing::{animal_corpus, collection, idf_table, query};

// ============================================================================
// CORPUS FIXTURES
// ============================================================================

/// Write `(filename, text)` pairs into a fresh temporary directory.
pub fn corpus_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (name, text) in files {
        write_file(dir.path(), name, text);
    }
    dir
}

pub fn write_file(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).expect("write corpus file");
}

/// The animal corpus on disk.
pub fn animal_corpus_dir() -> TempDir {
    corpus_dir(&animal_corpus())
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn ids(ranked: &[Ranked]) -> Vec<&str> {
    ranked.iter().map(|r| r.id.as_str()).collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Reference IDF: a direct count over the collection, no shortcuts.
pub fn oracle_idf(collection: &Collection, token: &str) -> f64 {
    let members = collection.len() as f64;
    let df = collection.iter().filter(|e| e.contains(token)).count() as f64;
    (members / df).ln()
}
