//! Tests for loading a JSONL corpus from disk.

use std::path::Path;

use crate::common::*;
use ferret::build::load_corpus;
use ferret::{SearchEngine, StartupError};

#[test]
fn test_load_sample_corpus() {
    let file = write_corpus(&sample_docs());
    let engine = SearchEngine::load(config_for(file.path())).unwrap();

    let stats = engine.stats();
    assert_eq!(stats.total_documents, 6);
    assert!(stats.total_unique_terms > 0);
    assert_eq!(stats.cache_size, 0);

    let doc = engine.fetch_by_id(THEME_ID).unwrap();
    assert_eq!(doc.title, "Theme");
}

#[test]
fn test_loaded_corpus_matches_in_memory_engine() {
    let file = write_corpus(&sample_docs());
    let from_disk = SearchEngine::load(config_for(file.path())).unwrap();
    let in_memory = sample_engine();

    for query in ["wifi", "theme", "super enter"] {
        let a = from_disk.search(query, None).unwrap();
        let b = in_memory.search(query, None).unwrap();
        assert_eq!(ids(&a), ids(&b));
    }
}

#[test]
fn test_missing_file() {
    let err = SearchEngine::load(config_for("/nonexistent/ferret/index.jsonl")).unwrap_err();
    assert!(matches!(err, StartupError::Io { .. }), "{}", err);
}

#[test]
fn test_malformed_line_aborts_load() {
    let mut content = to_jsonl(&sample_docs()[..2]);
    content.push_str("{\"id\": \"broken\", \"url\": \n");
    let file = write_corpus_raw(&content);

    let err = SearchEngine::load(config_for(file.path())).unwrap_err();
    match err {
        StartupError::Malformed { line, .. } => assert_eq!(line, 3),
        other => panic!("expected Malformed, got {}", other),
    }
}

#[test]
fn test_duplicate_id_aborts_load() {
    let docs = vec![
        make_doc("same", "First", "", "one"),
        make_doc("same", "Second", "", "two"),
    ];
    let file = write_corpus(&docs);
    let err = SearchEngine::load(config_for(file.path())).unwrap_err();
    assert!(matches!(err, StartupError::DuplicateId { line: 2, ref id, .. } if id == "same"));
}

#[test]
fn test_optional_fields_and_blank_lines() {
    let content = concat!(
        "{\"id\": \"a\", \"title\": \"Audio\", \"url\": \"/audio\", \"markdown\": \"Volume keys\"}\n",
        "\n",
        "{\"id\": \"b\", \"title\": null, \"heading\": null, \"url\": \"/b\"}\n",
    );
    let file = write_corpus_raw(content);
    let docs = load_corpus(file.path()).unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].heading, "");
    assert_eq!(docs[1].title, "");
    assert_eq!(docs[1].body, "");
}

#[test]
fn test_empty_corpus_is_searchable() {
    let file = write_corpus_raw("");
    let engine = SearchEngine::load(config_for(file.path())).unwrap();
    assert_eq!(engine.stats().total_documents, 0);
    assert!(engine.search("anything", None).unwrap().results.is_empty());
}

#[test]
fn test_error_mentions_path() {
    let file = write_corpus_raw("not json\n");
    let err = load_corpus(file.path()).unwrap_err();
    let message = err.to_string();
    let name = Path::new(file.path()).file_name().unwrap().to_string_lossy();
    assert!(message.contains(name.as_ref()), "{}", message);
    assert!(message.contains(":1"), "{}", message);
}
