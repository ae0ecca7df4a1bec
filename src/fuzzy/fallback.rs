// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant fallback for sparse result sets.
//!
//! Only runs when the exact signals found fewer than the configured floor of
//! candidates. Each query token is compared against the distinct tokens of a
//! field. A field matches when at least one query token lands within the
//! threshold, and its distance is the mean over the tokens that did. A stray
//! word in the query therefore does not hide a typo match. Matched fields
//! combine as a weighted geometric product (title 3, heading 2, body 1,
//! normalized to sum to 1), so a close title match lands near 0 while a
//! body-only match stays closer to 1.

use std::collections::{HashMap, HashSet};

use super::levenshtein::normalized_distance;
use crate::query::normalize_query;
use crate::scoring::DocScore;
use crate::types::IndexedDocument;
use crate::util::tokenize::{is_stopword, tokenize};

pub const TITLE_WEIGHT: f64 = 3.0;
pub const HEADING_WEIGHT: f64 = 2.0;
pub const BODY_WEIGHT: f64 = 1.0;

/// Added to a document the scorer already found.
pub const FUZZY_BOOST: f64 = 20.0;

/// A fresh fuzzy-only candidate scores `(1 - distance) * FUZZY_BASE_SCORE`.
pub const FUZZY_BASE_SCORE: f64 = 30.0;

const TOTAL_WEIGHT: f64 = TITLE_WEIGHT + HEADING_WEIGHT + BODY_WEIGHT;

/// A fuzzy candidate. `distance` is in `[0, 1]`, 0 being a perfect match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    pub doc_idx: usize,
    pub distance: f64,
}

impl FuzzyMatch {
    /// Similarity in `[0, 1]`.
    pub fn similarity(&self) -> f64 {
        1.0 - self.distance
    }
}

/// Find up to `max_results` approximate matches for `query`, best first.
pub fn fuzzy_search(
    docs: &[IndexedDocument],
    query: &str,
    threshold: f64,
    max_results: usize,
) -> Vec<FuzzyMatch> {
    let tokens = query_tokens(query);
    if tokens.is_empty() || max_results == 0 {
        return Vec::new();
    }

    let mut matches: Vec<FuzzyMatch> = docs
        .iter()
        .enumerate()
        .filter_map(|(doc_idx, doc)| {
            document_distance(doc, &tokens, threshold).map(|distance| FuzzyMatch {
                doc_idx,
                distance,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| docs[a.doc_idx].id().cmp(docs[b.doc_idx].id()))
    });
    matches.truncate(max_results);
    matches
}

/// Fold fuzzy matches into the scorer's candidates.
///
/// Known documents get `FUZZY_BOOST`; new ones enter with a score derived
/// from their similarity.
pub fn merge_fuzzy(scores: &mut Vec<DocScore>, matches: &[FuzzyMatch]) {
    let mut position: HashMap<usize, usize> = scores
        .iter()
        .enumerate()
        .map(|(i, s)| (s.doc_idx, i))
        .collect();

    for m in matches {
        match position.get(&m.doc_idx) {
            Some(&i) => scores[i].score += FUZZY_BOOST,
            None => {
                position.insert(m.doc_idx, scores.len());
                scores.push(DocScore {
                    doc_idx: m.doc_idx,
                    score: m.similarity() * FUZZY_BASE_SCORE,
                });
            }
        }
    }
}

/// Qualifying non-stopword tokens, falling back to stopwords and then to
/// every word when the query has nothing better.
fn query_tokens(query: &str) -> Vec<String> {
    let tokens = tokenize(query);
    let content: Vec<String> = tokens.iter().filter(|t| !is_stopword(t)).cloned().collect();
    if !content.is_empty() {
        return content;
    }
    if !tokens.is_empty() {
        return tokens;
    }
    normalize_query(query)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn document_distance(doc: &IndexedDocument, tokens: &[String], threshold: f64) -> Option<f64> {
    let fields = [
        (&doc.title_tokens, TITLE_WEIGHT),
        (&doc.heading_tokens, HEADING_WEIGHT),
        (&doc.body_tokens, BODY_WEIGHT),
    ];

    let mut combined = 1.0;
    let mut matched = false;
    for (field_tokens, weight) in fields {
        let Some(distance) = field_distance(field_tokens, tokens, threshold) else {
            continue;
        };
        matched = true;
        let base = if distance == 0.0 { f64::EPSILON } else { distance };
        combined *= base.powf(weight / TOTAL_WEIGHT);
    }

    matched.then_some(combined.clamp(0.0, 1.0))
}

/// Mean best-token distance over the query tokens that matched this field.
///
/// `None` when no query token is within the threshold of any field token.
fn field_distance(field_tokens: &HashSet<String>, tokens: &[String], threshold: f64) -> Option<f64> {
    let best: Vec<f64> = tokens
        .iter()
        .filter_map(|q| {
            field_tokens
                .iter()
                .filter_map(|t| normalized_distance(q, t, threshold))
                .min_by(f64::total_cmp)
        })
        .collect();
    if best.is_empty() {
        return None;
    }
    Some(best.iter().sum::<f64>() / best.len() as f64)
}
