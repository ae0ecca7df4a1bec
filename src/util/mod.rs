// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by indexing, query expansion and the fuzzy fallback.

pub mod tokenize;
