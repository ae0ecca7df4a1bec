// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Five independent signals, summed:
//!
//! | Signal    | Input                 | Contribution                                  |
//! |-----------|-----------------------|-----------------------------------------------|
//! | exact     | every expansion term  | title 50 (+100 equal), heading 25 (+50 equal), body 5 + repetition |
//! | keyword   | raw query tokens      | 15 per token among the document's keywords    |
//! | stem      | raw query tokens      | 10 per token whose stem the document has      |
//! | frequency | raw query tokens      | `tf * ln(N / df) * weight`                    |
//! | coverage  | raw query tokens      | 30 when a multi-token query is fully present  |
//!
//! Field placement dominates: an exact title (150) outweighs any realistic body
//! score, and a title that merely contains the term (50) still beats a body hit
//! with the maximum repetition bonus (5 + 20).
//!
//! Documents whose total is not strictly positive are not candidates.

use crate::index::DocFrequencyTable;
use crate::types::IndexedDocument;
use crate::util::tokenize::{stem, tokenize};

// =============================================================================
// SIGNAL WEIGHTS
// =============================================================================

/// Title contains the term.
pub const TITLE_CONTAINS_SCORE: f64 = 50.0;
/// Title is exactly the term (on top of contains).
pub const TITLE_EXACT_BONUS: f64 = 100.0;
/// Heading contains the term.
pub const HEADING_CONTAINS_SCORE: f64 = 25.0;
/// Heading is exactly the term (on top of contains).
pub const HEADING_EXACT_BONUS: f64 = 50.0;
/// Body contains the term.
pub const BODY_CONTAINS_SCORE: f64 = 5.0;
/// Per extra body occurrence.
pub const BODY_REPEAT_SCORE: f64 = 2.0;
/// Extra occurrences beyond this are not rewarded.
pub const MAX_BODY_REPEATS: usize = 10;
/// Raw query token is one of the document's keywords.
pub const KEYWORD_SCORE: f64 = 15.0;
/// Raw query token's stem is in the document's stem set.
pub const STEM_SCORE: f64 = 10.0;
/// Every token of a multi-token query appears somewhere in the document.
pub const COVERAGE_BONUS: f64 = 30.0;

/// Per-signal contributions for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Signals {
    pub exact: f64,
    pub keyword: f64,
    pub stem: f64,
    pub frequency: f64,
    pub coverage: f64,
}

impl Signals {
    pub fn total(&self) -> f64 {
        self.exact + self.keyword + self.stem + self.frequency + self.coverage
    }
}

/// A scored candidate, by position in the corpus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocScore {
    pub doc_idx: usize,
    pub score: f64,
}

/// Query-side data computed once per request and shared across documents.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    /// Expansion terms (lowercase).
    pub terms: Vec<String>,
    /// Qualifying tokens of the raw query.
    pub tokens: Vec<String>,
    /// Stems of `tokens`, index-aligned.
    pub token_stems: Vec<String>,
    /// `ln(N / df)` of `tokens`, index-aligned.
    pub token_idf: Vec<f64>,
}

impl PreparedQuery {
    pub fn new(raw_query: &str, terms: &[String], doc_freq: &DocFrequencyTable) -> Self {
        let tokens = tokenize(raw_query);
        let token_stems = tokens.iter().map(|t| stem(t)).collect();
        let token_idf = tokens.iter().map(|t| doc_freq.idf(t)).collect();
        Self {
            terms: terms.iter().filter(|t| !t.is_empty()).cloned().collect(),
            tokens,
            token_stems,
            token_idf,
        }
    }
}

/// Count non-overlapping literal occurrences of `needle` in `haystack`.
///
/// Plain substring scan: punctuation in the needle has no special meaning.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Exact-match signal for a single expansion term.
pub fn exact_term_score(doc: &IndexedDocument, term: &str) -> f64 {
    let mut score = 0.0;

    if doc.title_lower.contains(term) {
        score += TITLE_CONTAINS_SCORE;
        if doc.title_lower == term {
            score += TITLE_EXACT_BONUS;
        }
    }

    if doc.heading_lower.contains(term) {
        score += HEADING_CONTAINS_SCORE;
        if doc.heading_lower == term {
            score += HEADING_EXACT_BONUS;
        }
    }

    let occurrences = count_occurrences(&doc.body_lower, term);
    if occurrences > 0 {
        let extra = (occurrences - 1).min(MAX_BODY_REPEATS);
        score += BODY_CONTAINS_SCORE + extra as f64 * BODY_REPEAT_SCORE;
    }

    score
}

/// All five signals for one document.
pub fn score_signals(
    doc: &IndexedDocument,
    query: &PreparedQuery,
    frequency_weight: f64,
) -> Signals {
    let mut signals = Signals::default();

    for term in &query.terms {
        signals.exact += exact_term_score(doc, term);
    }

    for (i, token) in query.tokens.iter().enumerate() {
        if doc.keywords.iter().any(|k| k == token) {
            signals.keyword += KEYWORD_SCORE;
        }
        if doc.stems.contains(&query.token_stems[i]) {
            signals.stem += STEM_SCORE;
        }
        signals.frequency += doc.tf(token) * query.token_idf[i] * frequency_weight;
    }

    if query.tokens.len() > 1 && query.tokens.iter().all(|t| mentions(doc, t)) {
        signals.coverage = COVERAGE_BONUS;
    }

    signals
}

fn mentions(doc: &IndexedDocument, token: &str) -> bool {
    doc.title_lower.contains(token)
        || doc.heading_lower.contains(token)
        || doc.body_lower.contains(token)
}

/// Score every document, keeping those with a strictly positive total.
pub fn score_documents(
    docs: &[IndexedDocument],
    query: &PreparedQuery,
    frequency_weight: f64,
) -> Vec<DocScore> {
    docs.iter()
        .enumerate()
        .filter_map(|(doc_idx, doc)| {
            let score = score_signals(doc, query, frequency_weight).total();
            (score > 0.0).then_some(DocScore { doc_idx, score })
        })
        .collect()
}
