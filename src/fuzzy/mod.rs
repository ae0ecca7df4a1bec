// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! A bounded Levenshtein for pairwise comparisons, and the fallback matcher
//! that runs it over title, heading and body when exact signals come up short.

mod fallback;
mod levenshtein;

pub use fallback::*;
pub use levenshtein::*;
