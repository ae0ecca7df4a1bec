// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus records and the JSON Lines loader.
//!
//! One record per line: `{id, title, heading?, url, markdown}`. `id` and `url`
//! are required; `title`, `heading` and `markdown` may be missing or `null`
//! and become empty strings. A field of the wrong JSON type, a blank `id`, or
//! an `id` seen twice aborts the load. There is no partial corpus.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::StartupError;
use crate::types::Document;

/// Wire schema of one corpus line.
#[derive(Deserialize, Clone, Debug)]
pub struct CorpusRecord {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub heading: Option<String>,
    pub url: String,
    #[serde(default)]
    pub markdown: Option<String>,
}

impl From<CorpusRecord> for Document {
    fn from(record: CorpusRecord) -> Self {
        Document {
            id: record.id,
            title: record.title.unwrap_or_default(),
            heading: record.heading.unwrap_or_default(),
            url: record.url,
            body: record.markdown.unwrap_or_default(),
        }
    }
}

/// Parse and validate one line. `line_no` is 1-based, for error messages.
pub fn parse_record(line: &str, path: &Path, line_no: usize) -> Result<Document, StartupError> {
    let record: CorpusRecord =
        serde_json::from_str(line).map_err(|source| StartupError::Malformed {
            path: path.to_path_buf(),
            line: line_no,
            source,
        })?;

    if record.id.trim().is_empty() {
        return Err(StartupError::MissingField {
            path: path.to_path_buf(),
            line: line_no,
            field: "id",
        });
    }

    Ok(record.into())
}

/// Parse a whole JSON Lines document. Blank lines are skipped.
pub fn parse_corpus(content: &str, path: &Path) -> Result<Vec<Document>, StartupError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut docs = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            tracing::warn!("skipping blank line {} in {}", line_no, path.display());
            continue;
        }

        let doc = parse_record(line, path, line_no)?;
        if !seen.insert(doc.id.clone()) {
            return Err(StartupError::DuplicateId {
                path: path.to_path_buf(),
                line: line_no,
                id: doc.id,
            });
        }
        docs.push(doc);
    }

    Ok(docs)
}

/// Read and parse the corpus file.
pub fn load_corpus(path: &Path) -> Result<Vec<Document>, StartupError> {
    let content = fs::read_to_string(path).map_err(|source| StartupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_corpus(&content, path)
}
