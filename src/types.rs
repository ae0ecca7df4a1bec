// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the engine.
//!
//! A `Document` is what the corpus file hands us. An `IndexedDocument` is the
//! same document plus everything the indexer derives from it once at load.
//! The response types are the presentation shapes the three operations return;
//! they serialize as camelCase JSON.
//!
//! # Invariants
//!
//! - **Document**: `id` is unique across the corpus.
//! - **IndexedDocument**: derived fields are computed once and never mutated.
//!   `term_frequency` values sum to 1, or the map is empty.
//! - **SearchResponse**: `count == results.len()` and results are ordered by
//!   non-increasing score.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// One indexed unit of content (a heading-sized chunk of a manual page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub heading: String,
    pub url: String,
    /// Markdown body of the chunk.
    pub body: String,
}

/// A document with its derived lookup structures.
#[derive(Debug, Clone)]
pub struct IndexedDocument {
    pub doc: Document,
    /// Up to 20 most frequent non-stopword tokens, most frequent first.
    pub keywords: Vec<String>,
    /// Stems of every qualifying token (stopwords included).
    pub stems: HashSet<String>,
    /// Token -> share of the document's non-stopword tokens.
    pub term_frequency: HashMap<String, f64>,
    // Lowercased copies for case-insensitive substring signals.
    pub(crate) title_lower: String,
    pub(crate) heading_lower: String,
    pub(crate) body_lower: String,
    // Distinct qualifying tokens per field, for the fuzzy fallback.
    pub(crate) title_tokens: HashSet<String>,
    pub(crate) heading_tokens: HashSet<String>,
    pub(crate) body_tokens: HashSet<String>,
}

impl IndexedDocument {
    #[inline]
    pub fn id(&self) -> &str {
        &self.doc.id
    }

    /// Normalized frequency of `token` in this document, 0 when absent.
    #[inline]
    pub fn tf(&self, token: &str) -> f64 {
        self.term_frequency.get(token).copied().unwrap_or(0.0)
    }
}

/// One ranked search hit, projected for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub id: String,
    pub title: String,
    pub heading: String,
    pub url: String,
    pub score: f64,
    /// First 500 characters of the body, "..." appended when cut.
    pub preview: String,
    /// Full body, only for short documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Top 5 keywords.
    pub keywords: Vec<String>,
}

/// Result of `search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<RankedEntry>,
    pub query: String,
    pub count: usize,
    pub search_time_ms: f64,
    /// Sample of the expansion terms used for scoring.
    pub expanded_terms: Vec<String>,
}

/// Result of `fetch_by_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    pub id: String,
    pub title: String,
    pub heading: String,
    pub url: String,
    pub markdown: String,
    /// Top 10 keywords.
    pub keywords: Vec<String>,
}

/// Result of `stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStats {
    pub cache_size: usize,
    pub cache_capacity: usize,
    pub total_documents: usize,
    pub total_unique_terms: usize,
    pub cache_hits: u64,
    pub cache_misses: u64,
}
