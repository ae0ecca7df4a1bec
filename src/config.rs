// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Everything here is fixed at startup. The CLI fills an `EngineConfig` from
//! flags and environment variables; library users build one directly or start
//! from `EngineConfig::default()`.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::StartupError;

/// Default location of the corpus produced by the scraper.
pub const DEFAULT_CORPUS_PATH: &str = "corpus/index.jsonl";

/// Default number of (query, limit) pairs kept in the query cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Default absolute lifetime of a cache entry, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Default fuzzy-match threshold. Candidates with a normalized distance above
/// this are rejected. 0.0 = exact only, 1.0 = anything goes.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.4;

/// Default candidate floor: below this many scored documents the fuzzy
/// fallback runs.
pub const DEFAULT_MIN_CANDIDATES: usize = 3;

/// Default scale applied to the TF-IDF signal.
pub const DEFAULT_FREQUENCY_WEIGHT: f64 = 100.0;

/// Startup configuration for a [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// JSON Lines corpus file.
    pub corpus_path: PathBuf,
    /// Maximum number of cached responses.
    pub cache_capacity: usize,
    /// Absolute per-entry expiry.
    #[serde(with = "duration_secs")]
    pub cache_ttl: Duration,
    pub fuzzy_threshold: f64,
    pub min_candidates: usize,
    /// Multiplier on `tf * idf` in the frequency-weighted signal.
    pub frequency_weight: f64,
    /// Optional JSON synonym dictionary replacing the built-in one.
    pub synonyms_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            min_candidates: DEFAULT_MIN_CANDIDATES,
            frequency_weight: DEFAULT_FREQUENCY_WEIGHT,
            synonyms_path: None,
        }
    }
}

impl EngineConfig {
    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), StartupError> {
        if self.cache_capacity == 0 {
            return Err(StartupError::InvalidConfig(
                "cache capacity must be at least 1".to_string(),
            ));
        }
        if self.cache_ttl.is_zero() {
            return Err(StartupError::InvalidConfig(
                "cache ttl must be greater than zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(StartupError::InvalidConfig(format!(
                "fuzzy threshold must be within [0, 1], got {}",
                self.fuzzy_threshold
            )));
        }
        if !self.frequency_weight.is_finite() || self.frequency_weight < 0.0 {
            return Err(StartupError::InvalidConfig(format!(
                "frequency weight must be a finite non-negative number, got {}",
                self.frequency_weight
            )));
        }
        Ok(())
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
