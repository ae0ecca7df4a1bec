//! Request validation and lookup errors.

use crate::common::*;
use ferret::search::FETCH_KEYWORDS;
use ferret::EngineError;

#[test]
fn test_empty_query_rejected() {
    let engine = sample_engine();
    for query in ["", " ", "\t\n  "] {
        let err = engine.search(query, None).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)), "{:?}", query);
    }
}

#[test]
fn test_rejected_query_not_cached() {
    let engine = sample_engine();
    let _ = engine.search("", None);
    let stats = engine.stats();
    assert_eq!(stats.cache_size, 0);
    assert_eq!(stats.cache_misses, 0);
}

#[test]
fn test_stopword_only_query_is_valid() {
    let engine = sample_engine();
    let response = engine.search("the and", None).unwrap();
    assert_ranked(&response);
}

#[test]
fn test_fetch_unknown_id() {
    let engine = sample_engine();
    match engine.fetch_by_id("0000000000000000") {
        Err(EngineError::NotFound(id)) => assert_eq!(id, "0000000000000000"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_fetch_known_id() {
    let engine = sample_engine();
    let doc = engine.fetch_by_id(WIFI_ID).unwrap();
    assert_eq!(doc.id, WIFI_ID);
    assert_eq!(doc.title, "Wi-Fi");
    assert_eq!(doc.heading, "Setup");
    assert!(doc.markdown.starts_with("Use impala"));
    assert!(!doc.keywords.is_empty());
    assert!(doc.keywords.len() <= FETCH_KEYWORDS);
}

#[test]
fn test_fetch_ids_from_search_results() {
    let engine = sample_engine();
    let response = engine.search("terminal", None).unwrap();
    assert!(!response.results.is_empty());
    for entry in &response.results {
        let doc = engine.fetch_by_id(&entry.id).unwrap();
        assert_eq!(doc.url, entry.url);
    }
}

#[test]
fn test_json_shape_is_camel_case() {
    let engine = sample_engine();
    let response = engine.search("theme", Some(2)).unwrap();
    let value = serde_json::to_value(&*response).unwrap();
    assert!(value.get("searchTimeMs").is_some());
    assert!(value.get("expandedTerms").is_some());
    assert_eq!(value["count"], 2);

    let stats = serde_json::to_value(engine.stats()).unwrap();
    assert_eq!(stats["totalDocuments"], 6);
    assert_eq!(stats["cacheSize"], 1);
}
