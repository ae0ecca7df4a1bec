// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the engine.
//!
//! Two layers. `StartupError` covers everything that can go wrong before the
//! first request: unreadable corpus, malformed records, bad configuration.
//! Any of these is fatal, the engine is never handed out half-built.
//! `EngineError` is what callers of `search` / `fetch_by_id` see.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the corpus or validating configuration.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed corpus record at {path}:{line}: {source}")]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("corpus record at {path}:{line} has an empty `{field}`")]
    MissingField {
        path: PathBuf,
        line: usize,
        field: &'static str,
    },

    #[error("duplicate document id '{id}' at {path}:{line}")]
    DuplicateId {
        path: PathBuf,
        line: usize,
        id: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load synonyms from {path}: {reason}")]
    Synonyms { path: PathBuf, reason: String },
}

/// Errors surfaced to callers of the engine's operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request itself is unusable (blank query).
    #[error("validation error: {0}")]
    Validation(String),

    /// No document carries the requested id.
    #[error("document not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Startup(#[from] StartupError),
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
