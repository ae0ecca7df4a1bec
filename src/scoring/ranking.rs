// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: sort, truncate, project.
//!
//! Sort order is score descending, then document id ascending. The id
//! tiebreak is explicit so two runs (or two implementations) agree on the
//! order of equally scored documents.

use std::cmp::Ordering;

use super::core::DocScore;
use crate::types::{IndexedDocument, RankedEntry};

/// Smallest and largest accepted result limits.
pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 25;

/// Limit used when the caller does not give one.
pub const DEFAULT_LIMIT: usize = 10;

/// Characters of body shown in a preview.
pub const PREVIEW_CHARS: usize = 500;

/// Bodies up to this many characters are returned in full.
pub const FULL_BODY_MAX_CHARS: usize = 1000;

/// Keywords attached to each ranked entry.
pub const ENTRY_KEYWORDS: usize = 5;

const ELLIPSIS: &str = "...";

/// Clamp a requested limit into `[MIN_LIMIT, MAX_LIMIT]`.
pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(MIN_LIMIT, MAX_LIMIT)
}

/// Compare two candidates for ranking.
///
/// 1. **Score** - descending
/// 2. **Doc id** - ascending, for determinism
pub fn compare_scores(a: &DocScore, b: &DocScore, docs: &[IndexedDocument]) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => docs[a.doc_idx].id().cmp(docs[b.doc_idx].id()),
        ord => ord,
    }
}

/// Sort candidates and keep the top `clamp_limit(limit)`.
pub fn rank(mut scores: Vec<DocScore>, docs: &[IndexedDocument], limit: usize) -> Vec<DocScore> {
    scores.sort_by(|a, b| compare_scores(a, b, docs));
    scores.truncate(clamp_limit(limit));
    scores
}

/// First `PREVIEW_CHARS` characters of the body, with an ellipsis if cut.
pub fn preview(body: &str) -> String {
    match body.char_indices().nth(PREVIEW_CHARS) {
        Some((byte_idx, _)) => format!("{}{}", &body[..byte_idx], ELLIPSIS),
        None => body.to_string(),
    }
}

/// Project a scored document into its presentation form.
pub fn project(doc: &IndexedDocument, score: f64) -> RankedEntry {
    let body = &doc.doc.body;
    let full_body = (body.chars().count() <= FULL_BODY_MAX_CHARS).then(|| body.clone());
    RankedEntry {
        id: doc.doc.id.clone(),
        title: doc.doc.title.clone(),
        heading: doc.doc.heading.clone(),
        url: doc.doc.url.clone(),
        score,
        preview: preview(body),
        body: full_body,
        keywords: doc.keywords.iter().take(ENTRY_KEYWORDS).cloned().collect(),
    }
}
