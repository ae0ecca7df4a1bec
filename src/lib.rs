// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked keyword search over a scraped documentation corpus.
//!
//! The corpus is loaded once from a JSON Lines file and never changes. Every
//! document is analyzed up front (tokens, keywords, stems, term frequencies),
//! and queries are answered by expanding the query with synonyms and stems,
//! scoring every document on several independent signals, falling back to a
//! typo-tolerant match when results are sparse, and caching the final response.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   build/     │────▶│   index/     │────▶│   search/    │
//! │ (load JSONL, │     │ (analyze,    │     │ (SearchEngine│
//! │  Corpus)     │     │  doc freq)   │     │  + cache)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!        ┌──────────────────┬──────────────────────┤
//!        ▼                  ▼                      ▼
//! ┌──────────────┐   ┌──────────────┐       ┌──────────────┐
//! │   query/     │   │  scoring/    │       │   fuzzy/     │
//! │ (synonyms,   │   │ (signals,    │       │ (levenshtein,│
//! │  expansion)  │   │  ranking)    │       │  fallback)   │
//! └──────────────┘   └──────────────┘       └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use ferret::{EngineConfig, SearchEngine};
//!
//! let engine = SearchEngine::load(EngineConfig::default())?;
//! let response = engine.search("keyboard shortcuts", Some(5))?;
//! for entry in &response.results {
//!     println!("{:>6.1}  {}", entry.score, entry.title);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod query;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;

pub use build::Corpus;
pub use config::EngineConfig;
pub use error::{EngineError, Result, StartupError};
pub use query::{QueryExpander, SynonymTable};
pub use search::SearchEngine;
pub use types::{
    Document, EngineStats, FetchResponse, IndexedDocument, RankedEntry, SearchResponse,
};
