//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use ferret::{Document, EngineConfig, SearchResponse};
use tempfile::NamedTempFile;

// Re-export canonical test utilities from ferret::testing
pub use ferret::testing::{engine_with, make_doc, sample_docs, sample_engine, to_jsonl};

// ============================================================================
// SAMPLE CORPUS IDS
// ============================================================================

pub const HOTKEYS_ID: &str = "a1f0c3d2e5b49786";
pub const THEME_ID: &str = "b2e1d4c3f6a58697";
pub const THEME_SETTINGS_ID: &str = "c3d2e5f4a7b69708";
pub const WIFI_ID: &str = "d4c3f6a5b8c7a819";
pub const BLUETOOTH_ID: &str = "e5b4a7b6c9d8b92a";
pub const FONTS_ID: &str = "f6a5b8c7d0e9ca3b";

// ============================================================================
// CORPUS FILES
// ============================================================================

/// Write raw JSONL content to a temp file. Keep the handle alive for the test.
pub fn write_corpus_raw(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp corpus");
    file.write_all(content.as_bytes()).expect("write temp corpus");
    file.flush().expect("flush temp corpus");
    file
}

/// Write documents as a JSONL corpus file.
pub fn write_corpus(docs: &[Document]) -> NamedTempFile {
    write_corpus_raw(&to_jsonl(docs))
}

/// Default config pointing at `path`.
pub fn config_for(path: impl Into<PathBuf>) -> EngineConfig {
    EngineConfig {
        corpus_path: path.into(),
        ..EngineConfig::default()
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Scores non-increasing; equal scores ordered by id ascending.
pub fn assert_ranked(response: &SearchResponse) {
    for pair in response.results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.id < b.id),
            "results out of order: ({}, {}) before ({}, {})",
            a.id,
            a.score,
            b.id,
            b.score
        );
    }
    assert_eq!(response.count, response.results.len());
}

/// Ids of a response, in rank order.
pub fn ids(response: &SearchResponse) -> Vec<&str> {
    response.results.iter().map(|r| r.id.as_str()).collect()
}
