// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Startup: corpus file -> immutable, fully indexed corpus.
//!
//! Load (parse + validate every line), analyze every document, then build the
//! document-frequency table. Any failure along the way aborts the whole build.

pub mod document;
pub mod parallel;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::StartupError;
use crate::index::DocFrequencyTable;
use crate::types::{Document, IndexedDocument};

pub use document::*;
pub use parallel::*;

/// The indexed corpus plus its corpus-wide statistics. Read-only once built.
#[derive(Debug, Clone)]
pub struct Corpus {
    docs: Vec<IndexedDocument>,
    by_id: HashMap<String, usize>,
    doc_freq: DocFrequencyTable,
}

impl Corpus {
    /// Index in-memory documents. Ids must be unique.
    pub fn from_documents(documents: Vec<Document>) -> Result<Self, StartupError> {
        let mut by_id = HashMap::with_capacity(documents.len());
        for (idx, doc) in documents.iter().enumerate() {
            if by_id.insert(doc.id.clone(), idx).is_some() {
                return Err(StartupError::DuplicateId {
                    path: PathBuf::from("<memory>"),
                    line: idx + 1,
                    id: doc.id.clone(),
                });
            }
        }

        let docs = index_documents(documents);
        let doc_freq = DocFrequencyTable::build(&docs);

        Ok(Self {
            docs,
            by_id,
            doc_freq,
        })
    }

    /// Load and index a JSON Lines corpus file.
    pub fn load(path: &Path) -> Result<Self, StartupError> {
        let started = Instant::now();
        let documents = load_corpus(path)?;
        let corpus = Self::from_documents(documents)?;
        tracing::info!(
            "indexed {} documents ({} unique terms) from {} in {:.1?}",
            corpus.len(),
            corpus.doc_freq.unique_terms(),
            path.display(),
            started.elapsed()
        );
        Ok(corpus)
    }

    pub fn docs(&self) -> &[IndexedDocument] {
        &self.docs
    }

    pub fn get(&self, id: &str) -> Option<&IndexedDocument> {
        self.by_id.get(id).map(|&idx| &self.docs[idx])
    }

    pub fn doc_freq(&self) -> &DocFrequencyTable {
        &self.doc_freq
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
