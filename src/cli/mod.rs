// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quire command-line interface.
//!
//! One positional argument names the corpus directory. Without `--query` the
//! program prompts for a question on stdin. Flags override values from
//! `--config`, which in turn override the built-in defaults.

pub mod display;

use std::path::PathBuf;

use clap::Parser;

use quire::{AnswerConfig, ConfigError, UnknownTermPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "quire",
    about = "Answer a question from a directory of .txt files using TF-IDF",
    version
)]
pub struct Cli {
    /// Directory containing the corpus .txt files
    pub corpus: PathBuf,

    /// Question to answer (prompts on stdin when omitted)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Number of top files to draw sentences from
    #[arg(short, long)]
    pub files: Option<usize>,

    /// Number of sentences to print
    #[arg(short, long)]
    pub sentences: Option<usize>,

    /// What to do with query words that appear nowhere in the ranked collection
    #[arg(long, value_enum)]
    pub unknown_terms: Option<UnknownTermPolicy>,

    /// JSON config file (fileMatches, sentenceMatches, unknownTerms)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the answer as JSON, including ranked files and scores
    #[arg(long)]
    pub json: bool,

    /// Show ranked files and scores, and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge defaults, the config file, and flags, in that order.
    pub fn answer_config(&self) -> Result<AnswerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AnswerConfig::from_file(path)?,
            None => AnswerConfig::default(),
        };

        if let Some(files) = self.files {
            config.file_matches = files;
        }
        if let Some(sentences) = self.sentences {
            config.sentence_matches = sentences;
        }
        if let Some(policy) = self.unknown_terms {
            config.unknown_terms = policy;
        }

        config.validate()?;
        Ok(config)
    }
}
