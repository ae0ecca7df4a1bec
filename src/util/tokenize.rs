// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization shared by the indexer, the frequency table and the scorer.
//!
//! One rule everywhere: lowercase, turn every non-word character into a
//! separator, keep tokens longer than two characters. If the indexer and the
//! scorer ever tokenized differently, keyword and TF-IDF lookups would quietly
//! miss, so there is exactly one implementation.

use std::sync::LazyLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

/// Tokens must be strictly longer than this (in chars) to qualify.
pub const MIN_TOKEN_CHARS: usize = 2;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("non-word pattern is valid"));

/// Fixed English stopword list. Kept sorted for `binary_search`.
const STOPWORDS: &[&str] = &[
    "about", "after", "all", "also", "and", "any", "are", "because", "been", "before",
    "being", "between", "both", "but", "can", "could", "did", "does", "doing", "down",
    "during", "each", "few", "for", "from", "further", "had", "has", "have", "having",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "into", "its",
    "itself", "just", "more", "most", "not", "now", "off", "once", "only", "other",
    "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should", "some",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "too", "under", "until", "use",
    "very", "was", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Does this token carry enough characters to be indexed?
#[inline]
pub fn is_qualifying(token: &str) -> bool {
    token.chars().count() > MIN_TOKEN_CHARS
}

/// Is this (lowercased) token in the fixed stopword set?
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

/// Split text into qualifying lowercase tokens, in order of appearance.
///
/// ```ignore
/// assert_eq!(tokenize("Set up Wi-Fi!"), vec!["set"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|t| is_qualifying(t))
        .map(str::to_string)
        .collect()
}

/// The text the indexer sees for a document: title, heading and body joined.
pub fn document_text(title: &str, heading: &str, body: &str) -> String {
    format!("{} {} {}", title, heading, body)
}

/// Reduce a word to its Snowball English stem.
///
/// "configuring" and "configuration" both become "configur".
pub fn stem(word: &str) -> String {
    Stemmer::create(Algorithm::English).stem(word).into_owned()
}
