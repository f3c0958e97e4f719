// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading from a directory of `.txt` files.
//!
//! With the `parallel` feature, files are read on the rayon pool and sorted by
//! name afterwards, so the corpus looks the same however the reads finished.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::CorpusError;

use super::{Corpus, Document};

/// Extension a file must have to be part of the corpus.
pub const TEXT_EXTENSION: &str = "txt";

/// List the `.txt` files directly inside `dir`, sorted by path.
///
/// Subdirectories and other extensions are skipped.
pub fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let read_dir = fs::read_dir(dir).map_err(|source| CorpusError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| CorpusError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_text = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(TEXT_EXTENSION));
        if path.is_file() && is_text {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-text corpus entry");
        }
    }
    files.sort();
    if files.is_empty() {
        warn!(dir = %dir.display(), "corpus directory contains no .txt files");
    }
    Ok(files)
}

/// Read one document. The identifier is the bare filename.
pub fn read_document(path: &Path) -> Result<Document, CorpusError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::InvalidData {
            CorpusError::InvalidUtf8 {
                path: path.to_path_buf(),
            }
        } else {
            CorpusError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Document { name, text })
}

/// Load every `.txt` file in `dir`.
///
/// Any unreadable file fails the whole load.
pub fn load_corpus(dir: &Path) -> Result<Corpus, CorpusError> {
    let files = list_text_files(dir)?;

    #[cfg(feature = "parallel")]
    let documents = files
        .par_iter()
        .map(|path| read_document(path))
        .collect::<Result<Vec<Document>, CorpusError>>()?;

    #[cfg(not(feature = "parallel"))]
    let documents = files
        .iter()
        .map(|path| read_document(path))
        .collect::<Result<Vec<Document>, CorpusError>>()?;

    info!(dir = %dir.display(), documents = documents.len(), "loaded corpus");
    Ok(Corpus::from_documents(
        documents.into_iter().map(|d| (d.name, d.text)),
    ))
}

/// Load every `.txt` file in `dir` in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_corpus_with_progress(dir: &Path, progress: &ProgressBar) -> Result<Corpus, CorpusError> {
    let files = list_text_files(dir)?;
    progress.set_length(files.len() as u64);

    let documents = files
        .par_iter()
        .map(|path| {
            let document = read_document(path)?;
            progress.inc(1);
            Ok(document)
        })
        .collect::<Result<Vec<Document>, CorpusError>>()?;

    info!(dir = %dir.display(), documents = documents.len(), "loaded corpus");
    Ok(Corpus::from_documents(
        documents.into_iter().map(|d| (d.name, d.text)),
    ))
}
