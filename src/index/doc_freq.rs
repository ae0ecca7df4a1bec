// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus-wide document frequencies.
//!
//! Counts how many documents have each token in their body at least once.
//! Built once after indexing, read-only afterwards. Unknown tokens report a
//! frequency of 1 so `ln(N / df)` stays finite and non-negative.

use std::collections::{HashMap, HashSet};

use crate::types::IndexedDocument;
use crate::util::tokenize::tokenize;

#[derive(Debug, Clone, Default)]
pub struct DocFrequencyTable {
    counts: HashMap<String, usize>,
    total_docs: usize,
}

impl DocFrequencyTable {
    /// Count distinct body tokens per document across the corpus.
    pub fn build(docs: &[IndexedDocument]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for doc in docs {
            let unique: HashSet<String> = tokenize(&doc.doc.body).into_iter().collect();
            for token in unique {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        Self {
            counts,
            total_docs: docs.len(),
        }
    }

    /// Documents containing `token`, or 1 if it was never seen.
    #[inline]
    pub fn df(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(1)
    }

    /// Inverse document frequency: `ln(N / df)`.
    ///
    /// Clamped at zero so an empty corpus never yields a negative weight.
    pub fn idf(&self, token: &str) -> f64 {
        if self.total_docs == 0 {
            return 0.0;
        }
        (self.total_docs as f64 / self.df(token) as f64).ln().max(0.0)
    }

    /// Number of distinct tokens seen across all bodies.
    pub fn unique_terms(&self) -> usize {
        self.counts.len()
    }

    pub fn total_docs(&self) -> usize {
        self.total_docs
    }
}
