// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a ranking pass.
//!
//! These types define how token collections, queries, and IDF tables fit together.
//! Everything the rankers touch is read-only; scores only exist for the duration
//! of one call.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Collection**: identifiers are unique and keep their first insertion
//!   position. That position is the "first-encountered order" every tie-break
//!   falls back to, so a `HashMap` would not do here.
//!
//! - **IdfTable**: built from a collection, it has an entry for every token of
//!   every member, and every value is `>= 0`.
//!
//! - **Query**: a set. Duplicates collapse, and iteration is in sorted order so
//!   score sums are always accumulated in the same sequence.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// A normalized word: lower-cased, punctuation and stopwords already removed.
pub type Token = String;

// =============================================================================
// COLLECTION
// =============================================================================

/// One member of a collection: a document (id = filename) or a sentence
/// (id = the sentence text itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub tokens: Vec<Token>,
}

impl Entry {
    /// How many times `token` occurs in this member.
    pub fn count(&self, token: &str) -> usize {
        self.tokens.iter().filter(|t| t.as_str() == token).count()
    }

    /// Does `token` occur at least once?
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t.as_str() == token)
    }
}

/// Ordered mapping from identifier to token sequence.
///
/// Behaves like an insertion-ordered map: re-inserting an existing id replaces
/// its tokens but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    entries: Vec<Entry>,
    positions: HashMap<String, usize>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a member. Returns the previous tokens if `id` was present.
    pub fn insert(&mut self, id: impl Into<String>, tokens: Vec<Token>) -> Option<Vec<Token>> {
        let id = id.into();
        if let Some(&position) = self.positions.get(&id) {
            return Some(std::mem::replace(&mut self.entries[position].tokens, tokens));
        }
        self.positions.insert(id.clone(), self.entries.len());
        self.entries.push(Entry { id, tokens });
        None
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.positions.get(id).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Members in first-encountered order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<I, T, S> FromIterator<(I, T)> for Collection
where
    I: Into<String>,
    T: IntoIterator<Item = S>,
    S: Into<Token>,
{
    fn from_iter<It: IntoIterator<Item = (I, T)>>(iter: It) -> Self {
        let mut collection = Collection::new();
        for (id, tokens) in iter {
            collection.insert(id, tokens.into_iter().map(Into::into).collect());
        }
        collection
    }
}

// =============================================================================
// QUERY
// =============================================================================

/// A deduplicated set of query tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(BTreeSet<Token>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Tokens in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<Token>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Query(iter.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// IDF TABLE
// =============================================================================

/// Token → inverse document frequency over one collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    values: HashMap<Token, f64>,
}

impl IdfTable {
    pub fn get(&self, token: &str) -> Option<f64> {
        self.values.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.values.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(token, &idf)| (token.as_str(), idf))
    }
}

impl<S: Into<Token>> FromIterator<(S, f64)> for IdfTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        IdfTable {
            values: iter.into_iter().map(|(t, v)| (t.into(), v)).collect(),
        }
    }
}

// =============================================================================
// RANKING OUTPUT
// =============================================================================

/// An identifier with the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    pub id: String,
    pub score: f64,
}

/// What to do with a query token that has no IDF entry.
///
/// The token occurs in no member of the collection, so there is no sensible
/// IDF for it. `Reject` fails the ranking before any scoring happens; `Ignore`
/// lets the token contribute nothing. Whichever is chosen applies to both the
/// document and the sentence pass.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTermPolicy {
    #[default]
    Reject,
    Ignore,
}
