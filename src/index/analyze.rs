// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document analysis: keywords, stems, term frequencies.
//!
//! All three derive from the same token stream (title + heading + body,
//! lowercased, qualifying tokens only). Keywords and term frequencies skip
//! stopwords; stems keep them. An empty document yields three empty
//! structures and is still indexed.

use std::collections::{HashMap, HashSet};

use crate::types::{Document, IndexedDocument};
use crate::util::tokenize::{document_text, is_stopword, stem, tokenize};

/// How many keywords a document keeps.
pub const MAX_KEYWORDS: usize = 20;

/// Derive the lookup structures for one document.
pub fn analyze(doc: Document) -> IndexedDocument {
    let tokens = tokenize(&document_text(&doc.title, &doc.heading, &doc.body));

    let counts = count_in_order(tokens.iter().filter(|t| !is_stopword(t)));
    let keywords = top_keywords(&counts, MAX_KEYWORDS);
    let term_frequency = normalize_counts(&counts);
    let stems: HashSet<String> = tokens.iter().map(|t| stem(t)).collect();

    IndexedDocument {
        title_lower: doc.title.to_lowercase(),
        heading_lower: doc.heading.to_lowercase(),
        body_lower: doc.body.to_lowercase(),
        title_tokens: distinct_tokens(&doc.title),
        heading_tokens: distinct_tokens(&doc.heading),
        body_tokens: distinct_tokens(&doc.body),
        doc,
        keywords,
        stems,
        term_frequency,
    }
}

fn distinct_tokens(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Count tokens, remembering the order each was first seen.
fn count_in_order<'a>(tokens: impl Iterator<Item = &'a String>) -> Vec<(&'a str, usize)> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for token in tokens {
        match position.get(token.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(token.as_str(), counts.len());
                counts.push((token.as_str(), 1));
            }
        }
    }
    counts
}

/// Highest counts first; equal counts keep first-occurrence order.
fn top_keywords(counts: &[(&str, usize)], n: usize) -> Vec<String> {
    let mut ranked: Vec<&(&str, usize)> = counts.iter().collect();
    // Stable sort: ties stay in first-occurrence order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(n).map(|(t, _)| t.to_string()).collect()
}

fn normalize_counts(counts: &[(&str, usize)]) -> HashMap<String, f64> {
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return HashMap::new();
    }
    counts
        .iter()
        .map(|(t, c)| (t.to_string(), *c as f64 / total as f64))
        .collect()
}
