// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Indexing: what gets computed once at load.
//!
//! Each document is analyzed on its own (keywords, stems, term frequencies),
//! then a single pass over the analyzed corpus builds the document-frequency
//! table. Nothing here is touched again after startup.

mod analyze;
mod doc_freq;

pub use analyze::*;
pub use doc_freq::*;
