// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Question answering over a small text corpus with TF-IDF.
//!
//! Given a directory of `.txt` files and a question, find the documents that
//! best match the question, then the sentence within them that best answers it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────────┐
//! │  corpus/    │────▶│   text/      │────▶│  scoring/          │
//! │ (load .txt) │     │ (tokenize,   │     │  idf → documents   │
//! │             │     │  sentences)  │     │      → sentences   │
//! └─────────────┘     └──────────────┘     └────────────────────┘
//!        │                   │                       │
//!        ▼                   ▼                       ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        pipeline.rs                          │
//! │           (QuestionAnswerer: files, then sentences)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ranking engine in `scoring` is pure: it takes token collections and a
//! query and returns ranked identifiers. It never reads files or tokenizes.
//!
//! # Usage
//!
//! ```
//! use quire::{compute_idfs, top_files, Collection, Query};
//!
//! let docs: Collection = [
//!     ("a.txt", vec!["neural", "network"]),
//!     ("b.txt", vec!["decision", "tree"]),
//! ]
//! .into_iter()
//! .collect();
//! let query: Query = ["network"].into_iter().collect();
//!
//! let idfs = compute_idfs(&docs);
//! assert_eq!(top_files(&query, &docs, &idfs, 1).unwrap(), vec!["a.txt"]);
//! ```

pub mod config;
pub mod contracts;
pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod testing;
pub mod text;
mod types;
mod util;

// Re-exports for public API
pub use config::{AnswerConfig, DEFAULT_FILE_MATCHES, DEFAULT_SENTENCE_MATCHES};
pub use corpus::{load_corpus, Corpus, Document};
#[cfg(feature = "parallel")]
pub use corpus::load_corpus_with_progress;
pub use error::{ConfigError, CorpusError, QuireError, RankError};
pub use pipeline::{parse_query, Answer, QuestionAnswerer};
pub use scoring::documents::{rank_files, top_files};
pub use scoring::idf::compute_idfs;
pub use scoring::sentences::{rank_sentences, top_sentences};
pub use text::{sentence_collection, split_sentences, tokenize};
pub use types::{Collection, Entry, IdfTable, Query, Ranked, Token, UnknownTermPolicy};
pub use util::normalize_word;
