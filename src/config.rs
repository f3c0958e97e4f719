// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Answer configuration: how many files and sentences to return, and what to
//! do with query words the corpus has never seen.
//!
//! Loaded from a JSON file; every field is optional.
//!
//! ```json
//! { "fileMatches": 2, "sentenceMatches": 3, "unknownTerms": "reject" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::UnknownTermPolicy;

/// Top files to pull sentences from.
pub const DEFAULT_FILE_MATCHES: usize = 1;

/// Sentences to print.
pub const DEFAULT_SENTENCE_MATCHES: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AnswerConfig {
    pub file_matches: usize,
    pub sentence_matches: usize,
    /// Defaults to `Ignore`, unlike the library rankers.
    pub unknown_terms: UnknownTermPolicy,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            file_matches: DEFAULT_FILE_MATCHES,
            sentence_matches: DEFAULT_SENTENCE_MATCHES,
            unknown_terms: UnknownTermPolicy::Ignore,
        }
    }
}

impl AnswerConfig {
    /// Read and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AnswerConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Both result counts must be at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_matches == 0 {
            return Err(ConfigError::Invalid(
                "fileMatches must be at least 1".to_string(),
            ));
        }
        if self.sentence_matches == 0 {
            return Err(ConfigError::Invalid(
                "sentenceMatches must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
