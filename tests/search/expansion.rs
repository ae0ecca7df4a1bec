//! Query expansion as seen in search responses.

use crate::common::*;
use ferret::search::EXPANDED_TERMS_SAMPLE;
use ferret::{EngineConfig, QueryExpander, SynonymTable};

#[test]
fn test_response_reports_expansion_sample() {
    let engine = sample_engine();
    let response = engine.search("Keyboard Shortcuts", None).unwrap();

    assert_eq!(response.query, "Keyboard Shortcuts");
    assert_eq!(response.expanded_terms[0], "keyboard shortcuts");
    assert!(response.expanded_terms.len() <= EXPANDED_TERMS_SAMPLE);
    assert_eq!(
        response.expanded_terms,
        engine.expand("Keyboard Shortcuts")
            .into_iter()
            .take(EXPANDED_TERMS_SAMPLE)
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_synonym_reaches_document_without_query_term() {
    let engine = sample_engine();
    // No document says "shortcuts"; Hotkeys is found through synonyms
    let response = engine.search("shortcuts", None).unwrap();
    assert_eq!(response.results[0].id, HOTKEYS_ID);
}

#[test]
fn test_phrase_substitution() {
    let expander = QueryExpander::default();
    let terms = expander.expand("wifi password");
    assert!(terms.contains(&"wireless password".to_string()));
    assert!(terms.contains(&"wifi passphrase".to_string()));
}

#[test]
fn test_expansion_has_no_duplicates() {
    let expander = QueryExpander::default();
    for query in ["shortcuts shortcuts", "theme themes", "dark mode", "network wifi"] {
        let terms = expander.expand(query);
        let mut sorted = terms.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), terms.len(), "{:?}", terms);
    }
}

#[test]
fn test_custom_synonyms_replace_builtin() {
    let synonyms = SynonymTable::from_pairs([("typeface".to_string(), vec!["fonts".to_string()])]);
    let corpus = ferret::Corpus::from_documents(sample_docs()).unwrap();
    let engine = ferret::SearchEngine::with_corpus(corpus, synonyms, EngineConfig::default()).unwrap();

    let terms = engine.expand("typeface");
    assert!(terms.contains(&"fonts".to_string()));
    assert_eq!(engine.search("typeface", None).unwrap().results[0].id, FONTS_ID);

    // Built-in entries are gone
    assert!(!engine.expand("shortcuts").contains(&"hotkeys".to_string()));
}
