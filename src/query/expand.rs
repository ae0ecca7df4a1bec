// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query expansion: one query in, a deduplicated set of terms out.
//!
//! Four sources, applied in order:
//! 1. The normalized query itself.
//! 2. Synonyms of the whole query.
//! 3. Per-token synonyms, both standalone and substituted back into the phrase
//!    ("wifi setup" -> "wireless setup").
//! 4. Stems of every token longer than two characters.
//!
//! Order is first-seen and only matters for display; scoring treats the
//! result as a set.

use std::collections::HashSet;

use super::synonyms::SynonymTable;
use crate::util::tokenize::{is_qualifying, stem};

/// Lowercase and trim. Empty output means the query is blank.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct QueryExpander {
    synonyms: SynonymTable,
}

impl QueryExpander {
    pub fn new(synonyms: SynonymTable) -> Self {
        Self { synonyms }
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Expand a raw query into its ordered, deduplicated term list.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let normalized = normalize_query(query);
        let mut terms = TermSet::default();
        if normalized.is_empty() {
            return terms.into_vec();
        }
        terms.push(normalized.clone());

        if let Some(synonyms) = self.synonyms.get(&normalized) {
            terms.extend(synonyms.iter().cloned());
        }

        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        for (i, token) in tokens.iter().enumerate() {
            let Some(synonyms) = self.synonyms.get(token) else {
                continue;
            };
            for synonym in synonyms {
                terms.push(synonym.clone());
                terms.push(substitute(&tokens, i, synonym));
            }
        }

        for token in &tokens {
            if is_qualifying(token) {
                terms.push(stem(token));
            }
        }

        terms.into_vec()
    }
}

/// Rebuild the phrase with the token at `index` swapped for `replacement`.
fn substitute(tokens: &[&str], index: usize, replacement: &str) -> String {
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| if i == index { replacement } else { *t })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insertion-ordered set of strings.
#[derive(Default)]
struct TermSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl TermSet {
    fn push(&mut self, term: String) {
        if !term.is_empty() && self.seen.insert(term.clone()) {
            self.ordered.push(term);
        }
    }

    fn extend(&mut self, terms: impl IntoIterator<Item = String>) {
        for term in terms {
            self.push(term);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
