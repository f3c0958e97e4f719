// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for ranking, corpus loading, and configuration.
//!
//! Every failure is local to the query that triggered it. Nothing here is
//! retried; the caller re-issues the query.

use std::path::PathBuf;

use thiserror::Error;

/// Ranking failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A query token has no IDF entry and the policy is `Reject`.
    #[error("unknown query term '{term}': it does not occur anywhere in the collection")]
    UnknownTerm { term: String },
}

/// Corpus loading failures.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus path {} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", .path.display())]
    InvalidUtf8 { path: PathBuf },
}

/// Configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Anything the question-answering pipeline can fail with.
#[derive(Debug, Error)]
pub enum QuireError {
    #[error(transparent)]
    Rank(#[from] RankError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
