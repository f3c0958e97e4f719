// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The question-answering pipeline.
//!
//! ```text
//! corpus ──tokenize──▶ documents ──compute_idfs──▶ rank_files ──▶ top files
//!                                                                   │
//!        ┌──────────────── split_sentences + tokenize ◀──────────────┘
//!        ▼
//!    sentences ──compute_idfs──▶ rank_sentences ──▶ answer
//! ```
//!
//! Documents are tokenized once, when the answerer is built. IDF tables are
//! recomputed for every question; nothing computed for one question is
//! reused for the next.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::AnswerConfig;
use crate::corpus::Corpus;
use crate::error::QuireError;
use crate::scoring::documents::rank_files;
use crate::scoring::idf::compute_idfs;
use crate::scoring::sentences::rank_sentences;
use crate::text::{sentence_collection, tokenize};
use crate::types::{Collection, Query, Ranked};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The outcome of one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    /// Files the sentences were drawn from, best first.
    pub files: Vec<Ranked>,
    /// Best sentences, best first.
    pub sentences: Vec<Ranked>,
}

impl Answer {
    /// The best sentence, if any sentence matched at all.
    pub fn best(&self) -> Option<&str> {
        self.sentences.first().map(|r| r.id.as_str())
    }
}

/// Turn a free-text question into a query.
pub fn parse_query(question: &str) -> Query {
    tokenize(question).into_iter().collect()
}

/// Tokenize every document of the corpus, in corpus order.
pub fn document_collection(corpus: &Corpus) -> Collection {
    #[cfg(feature = "parallel")]
    let tokenized: Vec<(&str, Vec<String>)> = corpus
        .documents()
        .par_iter()
        .map(|d| (d.name.as_str(), tokenize(&d.text)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let tokenized: Vec<(&str, Vec<String>)> = corpus
        .documents()
        .iter()
        .map(|d| (d.name.as_str(), tokenize(&d.text)))
        .collect();

    tokenized.into_iter().collect()
}

/// Answers questions against one corpus.
pub struct QuestionAnswerer<'a> {
    corpus: &'a Corpus,
    documents: Collection,
    config: AnswerConfig,
}

impl<'a> QuestionAnswerer<'a> {
    pub fn new(corpus: &'a Corpus, config: AnswerConfig) -> Self {
        let documents = document_collection(corpus);
        debug!(documents = documents.len(), "tokenized corpus");
        Self {
            corpus,
            documents,
            config,
        }
    }

    pub fn config(&self) -> &AnswerConfig {
        &self.config
    }

    /// Tokenized documents, in corpus order.
    pub fn documents(&self) -> &Collection {
        &self.documents
    }

    /// Answer a free-text question.
    pub fn answer(&self, question: &str) -> Result<Answer, QuireError> {
        self.answer_query(&parse_query(question))
    }

    /// Answer an already tokenized query.
    ///
    /// Sentences are gathered from every top file in rank order, then ranked
    /// against IDF values computed over just those sentences.
    ///
    /// Under `Reject`, unknown terms are caught by the document pass against
    /// the corpus vocabulary. A corpus word that appears in none of the
    /// gathered sentences simply adds nothing to any sentence score.
    pub fn answer_query(&self, query: &Query) -> Result<Answer, QuireError> {
        let policy = self.config.unknown_terms;

        let document_idfs = compute_idfs(&self.documents);
        let files = rank_files(
            query,
            &self.documents,
            &document_idfs,
            self.config.file_matches,
            policy,
        )?;
        info!(
            terms = query.len(),
            files = ?files.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
            "ranked files"
        );

        let sentences = sentence_collection(
            files
                .iter()
                .filter_map(|file| self.corpus.text(&file.id)),
        );
        let sentence_idfs = compute_idfs(&sentences);
        debug!(
            sentences = sentences.len(),
            vocabulary = sentence_idfs.len(),
            "built sentence collection"
        );

        let sentences = rank_sentences(
            query,
            &sentences,
            &sentence_idfs,
            self.config.sentence_matches,
            policy,
        )?;

        Ok(Answer { files, sentences })
    }
}
