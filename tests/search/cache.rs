//! Query cache behavior observed through the engine.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::common::*;
use ferret::EngineConfig;

fn engine_with_cache(capacity: usize, ttl: Duration) -> ferret::SearchEngine {
    engine_with(
        sample_docs(),
        EngineConfig {
            cache_capacity: capacity,
            cache_ttl: ttl,
            ..EngineConfig::default()
        },
    )
}

#[test]
fn test_repeated_query_served_from_cache() {
    let engine = sample_engine();
    let first = engine.search("dark mode", Some(5)).unwrap();
    let second = engine.search("dark mode", Some(5)).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(engine.computations(), 1);

    let stats = engine.stats();
    assert_eq!(stats.cache_hits, 1);
    assert_eq!(stats.cache_misses, 1);
    assert_eq!(stats.cache_size, 1);
}

#[test]
fn test_cached_response_keeps_original_timing() {
    let engine = sample_engine();
    let first = engine.search("hotkeys", None).unwrap();
    let second = engine.search("hotkeys", None).unwrap();
    assert_eq!(first.search_time_ms, second.search_time_ms);
}

#[test]
fn test_key_is_raw_query_and_limit() {
    let engine = sample_engine();
    engine.search("theme", Some(5)).unwrap();
    engine.search("theme", Some(6)).unwrap();
    engine.search("Theme", Some(5)).unwrap();
    engine.search(" theme", Some(5)).unwrap();
    assert_eq!(engine.computations(), 4);

    // Default limit is 10, so these two share an entry
    engine.search("theme", None).unwrap();
    engine.search("theme", Some(10)).unwrap();
    assert_eq!(engine.computations(), 5);
}

#[test]
fn test_least_recently_used_entry_evicted() {
    let engine = engine_with_cache(2, Duration::from_secs(300));
    engine.search("wifi", None).unwrap();
    engine.search("fonts", None).unwrap();
    engine.search("wifi", None).unwrap(); // hit, "fonts" is now oldest
    engine.search("theme", None).unwrap(); // evicts "fonts"
    assert_eq!(engine.computations(), 3);

    engine.search("wifi", None).unwrap();
    assert_eq!(engine.computations(), 3, "wifi should still be cached");

    engine.search("fonts", None).unwrap();
    assert_eq!(engine.computations(), 4, "fonts should have been evicted");
    assert_eq!(engine.stats().cache_size, 2);
}

#[test]
fn test_entries_expire_after_ttl() {
    let engine = engine_with_cache(10, Duration::from_millis(250));
    engine.search("bluetooth", None).unwrap();
    engine.search("bluetooth", None).unwrap();
    assert_eq!(engine.computations(), 1);

    thread::sleep(Duration::from_millis(400));
    engine.search("bluetooth", None).unwrap();
    assert_eq!(engine.computations(), 2);
}

#[test]
fn test_stats_omit_expired_entries() {
    let engine = engine_with_cache(10, Duration::from_millis(250));
    engine.search("fonts", None).unwrap();
    assert_eq!(engine.stats().cache_size, 1);

    thread::sleep(Duration::from_millis(400));
    assert_eq!(engine.stats().cache_size, 0);
}

#[test]
fn test_concurrent_identical_queries_compute_once() {
    let engine = sample_engine();
    let responses: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| engine.search("terminal", None).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(engine.computations(), 1);
    for response in &responses[1..] {
        assert!(Arc::ptr_eq(&responses[0], response));
    }
}
