// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query handling: normalization, synonyms, expansion.

mod expand;
pub mod synonyms;

pub use expand::*;
pub use synonyms::SynonymTable;
