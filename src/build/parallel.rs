// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus-wide indexing.
//!
//! Every document is analyzed independently, so this is embarrassingly
//! parallel: with the `parallel` feature it is a rayon `into_par_iter()`.
//! Output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::index::analyze;
use crate::types::{Document, IndexedDocument};

/// Analyze every document, preserving corpus order.
#[cfg(feature = "parallel")]
pub fn index_documents(docs: Vec<Document>) -> Vec<IndexedDocument> {
    docs.into_par_iter().map(analyze).collect()
}

/// Analyze every document, preserving corpus order.
#[cfg(not(feature = "parallel"))]
pub fn index_documents(docs: Vec<Document>) -> Vec<IndexedDocument> {
    docs.into_iter().map(analyze).collect()
}
