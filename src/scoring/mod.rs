// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `core` turns a prepared query into a score per document from five
//! independent signals. `ranking` orders the survivors, cuts them to the
//! requested limit and projects them for presentation.

mod core;
pub mod ranking;

pub use self::core::*;
