//! Ranking and response invariants over random corpora.

use std::collections::HashSet;

use crate::common::*;
use ferret::scoring::ranking::clamp_limit;
use ferret::{Document, EngineConfig};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Words drawn from a small vocabulary so queries actually hit documents.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "terminal", "theme", "wifi", "bluetooth", "fonts", "hotkeys", "network",
        "wallpaper", "setup", "password", "super", "window", "workspace", "bluetoth",
        "screen", "audio", "the", "and",
    ])
    .prop_map(str::to_string)
}

fn text_strategy(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..max_words).prop_map(|w| w.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec((text_strategy(3), text_strategy(2), text_strategy(30)), 0..30)
        .prop_map(|fields| {
            fields
                .into_iter()
                .enumerate()
                .map(|(i, (title, heading, body))| {
                    make_doc(&format!("{:016x}", i * 7919), &title, &heading, &body)
                })
                .collect()
        })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..4).prop_map(|w| w.join(" "))
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Never more results than the clamped limit; count matches.
    #[test]
    fn prop_limit_respected(docs in corpus_strategy(), query in query_strategy(), limit in 0usize..40) {
        let engine = engine_with(docs, EngineConfig::default());
        let response = engine.search(&query, Some(limit)).unwrap();
        prop_assert!(response.results.len() <= clamp_limit(limit));
        prop_assert_eq!(response.count, response.results.len());
    }

    /// Scores descend; ties are ordered by id.
    #[test]
    fn prop_results_ranked(docs in corpus_strategy(), query in query_strategy()) {
        let engine = engine_with(docs, EngineConfig::default());
        let response = engine.search(&query, Some(25)).unwrap();
        for pair in response.results.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].id < pair[1].id)
            );
        }
    }

    /// Every result has a positive score and appears once.
    #[test]
    fn prop_results_positive_and_unique(docs in corpus_strategy(), query in query_strategy()) {
        let engine = engine_with(docs, EngineConfig::default());
        let response = engine.search(&query, Some(25)).unwrap();
        let mut seen = HashSet::new();
        for entry in &response.results {
            prop_assert!(entry.score > 0.0);
            prop_assert!(seen.insert(entry.id.clone()));
        }
    }

    /// Same engine, same request: identical response.
    #[test]
    fn prop_search_idempotent(docs in corpus_strategy(), query in query_strategy()) {
        let engine = engine_with(docs, EngineConfig::default());
        let first = engine.search(&query, None).unwrap();
        let second = engine.search(&query, None).unwrap();
        prop_assert_eq!(&*first, &*second);
        prop_assert_eq!(engine.computations(), 1);
    }

    /// The cache never changes results, only whether they are recomputed.
    #[test]
    fn prop_cache_transparent(docs in corpus_strategy(), queries in prop::collection::vec(query_strategy(), 1..8)) {
        let cached = engine_with(docs.clone(), EngineConfig { cache_capacity: 2, ..EngineConfig::default() });
        for query in &queries {
            let fresh = engine_with(docs.clone(), EngineConfig::default());
            let a = cached.search(query, None).unwrap();
            let b = fresh.search(query, None).unwrap();
            prop_assert_eq!(ids(&a), ids(&b));
        }
        prop_assert!(cached.stats().cache_size <= 2);
    }

    /// Every returned id can be fetched.
    #[test]
    fn prop_results_fetchable(docs in corpus_strategy(), query in query_strategy()) {
        let engine = engine_with(docs, EngineConfig::default());
        let response = engine.search(&query, None).unwrap();
        for entry in &response.results {
            prop_assert!(engine.fetch_by_id(&entry.id).is_ok());
        }
    }
}
