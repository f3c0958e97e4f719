// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus: a directory of plain-text documents, held in memory.
//!
//! Documents are identified by filename and kept sorted by it, which makes
//! "first-encountered order" in the rankers independent of how the operating
//! system happens to list the directory.

mod loader;

pub use loader::*;

/// A loaded document: its filename and raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

/// Every document of a corpus, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Build a corpus from `(name, text)` pairs. Sorts by name; a repeated
    /// name keeps the last text given for it.
    pub fn from_documents<N, T>(documents: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        let mut documents: Vec<Document> = documents
            .into_iter()
            .map(|(name, text)| Document {
                name: name.into(),
                text: text.into(),
            })
            .collect();
        // Stable sort, then keep the last of each run of equal names
        documents.sort_by(|a, b| a.name.cmp(&b.name));
        documents.reverse();
        documents.dedup_by(|later, earlier| later.name == earlier.name);
        documents.reverse();
        Corpus { documents }
    }

    /// Raw text of the named document.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.documents
            .binary_search_by(|d| d.name.as_str().cmp(name))
            .ok()
            .map(|i| self.documents[i].text.as_str())
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
