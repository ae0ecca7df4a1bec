// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary strings at the engine to verify it never panics, never
//! returns more than the clamped limit, and always ranks by score then id.
//! If your search engine crashes on emoji or null bytes, you have a bad day.

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use ferret::scoring::ranking::clamp_limit;
use ferret::testing::{engine_with, sample_docs};
use ferret::{EngineConfig, EngineError, SearchEngine};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    limit: Option<u8>,
}

fuzz_target!(|input: SearchInput| {
    static ENGINE: std::sync::OnceLock<SearchEngine> = std::sync::OnceLock::new();
    let engine = ENGINE.get_or_init(|| engine_with(sample_docs(), EngineConfig::default()));

    // Cap query length to avoid timeout
    let query: String = input.query.chars().take(200).collect();
    let limit = input.limit.map(usize::from);

    let response = match engine.search(&query, limit) {
        Ok(response) => response,
        Err(EngineError::Validation(_)) => {
            // INVARIANT 1: Only blank queries are rejected
            assert!(query.trim().is_empty(), "rejected non-blank query {:?}", query);
            return;
        }
        Err(e) => panic!("unexpected error for {:?}: {}", query, e),
    };

    // INVARIANT 2: Results bounded by the clamped limit
    let max = clamp_limit(limit.unwrap_or(10));
    assert!(response.results.len() <= max);
    assert_eq!(response.count, response.results.len());

    // INVARIANT 3: Sorted by score descending, then id ascending
    for pair in response.results.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].id < pair[1].id),
            "out of order: {:?} before {:?}",
            (&pair[0].id, pair[0].score),
            (&pair[1].id, pair[1].score)
        );
    }

    // INVARIANT 4: No duplicates, every id fetchable
    let mut seen = HashSet::new();
    for entry in &response.results {
        assert!(seen.insert(entry.id.as_str()), "duplicate {}", entry.id);
        assert!(entry.score.is_finite() && entry.score > 0.0);
        assert!(engine.fetch_by_id(&entry.id).is_ok());
    }
});
