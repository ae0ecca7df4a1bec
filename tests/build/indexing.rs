//! Tests for per-document analysis and corpus statistics.

use crate::common::*;
use ferret::index::{analyze, DocFrequencyTable, MAX_KEYWORDS};
use ferret::Corpus;

#[test]
fn test_keywords_skip_stopwords_and_short_tokens() {
    let doc = analyze(make_doc("k", "The Terminal", "", "it is an alacritty terminal of mine"));
    assert_eq!(doc.keywords[0], "terminal");
    for stop in ["the", "it", "is", "an", "of"] {
        assert!(!doc.keywords.iter().any(|k| k == stop), "{}", stop);
    }
}

#[test]
fn test_keywords_capped() {
    let body: String = (0..50).map(|i| format!("word{:02} ", i)).collect();
    let doc = analyze(make_doc("k", "", "", &body));
    assert_eq!(doc.keywords.len(), MAX_KEYWORDS);
    assert_eq!(doc.keywords[0], "word00");
}

#[test]
fn test_term_frequencies_sum_to_one() {
    let doc = analyze(make_doc("tf", "Fonts", "Monospace", "monospace fonts for the terminal"));
    let total: f64 = doc.term_frequency.values().sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert!(doc.tf("monospace") > doc.tf("terminal"));
}

#[test]
fn test_doc_frequency_counts_bodies_only() {
    let docs: Vec<_> = vec![
        make_doc("a", "Wallpaper", "", "change the background"),
        make_doc("b", "Themes", "", "every theme has a wallpaper"),
    ]
    .into_iter()
    .map(analyze)
    .collect();
    let table = DocFrequencyTable::build(&docs);

    assert_eq!(table.df("wallpaper"), 1);
    assert_eq!(table.df("background"), 1);
    // Unseen tokens count as appearing once
    assert_eq!(table.df("bluetooth"), 1);
    assert_eq!(table.idf("bluetooth"), (2.0f64).ln());
}

#[test]
fn test_corpus_lookup() {
    let corpus = Corpus::from_documents(sample_docs()).unwrap();
    assert_eq!(corpus.len(), 6);
    assert_eq!(corpus.get(FONTS_ID).unwrap().doc.title, "Fonts");
    assert!(corpus.get("nope").is_none());
    assert_eq!(corpus.doc_freq().total_docs(), 6);
}
