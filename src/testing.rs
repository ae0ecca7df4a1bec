// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::config::EngineConfig;
use crate::search::SearchEngine;
use crate::types::Document;

/// Create a test document. The url is derived from the id.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: &str, title: &str, heading: &str, body: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        heading: heading.to_string(),
        url: format!("https://docs.example.com/{}", id),
        body: body.to_string(),
    }
}

/// Serialize documents as a JSON Lines corpus, one record per line.
pub fn to_jsonl(docs: &[Document]) -> String {
    docs.iter()
        .map(|doc| {
            serde_json::json!({
                "id": doc.id,
                "title": doc.title,
                "heading": doc.heading,
                "url": doc.url,
                "markdown": doc.body,
            })
            .to_string()
                + "\n"
        })
        .collect()
}

/// A small desktop-manual corpus with a mix of overlapping topics.
pub fn sample_docs() -> Vec<Document> {
    vec![
        make_doc(
            "a1f0c3d2e5b49786",
            "Hotkeys",
            "Navigation",
            "Super + Enter opens a terminal. Super + W closes the focused window. \
             All keybindings live in the hyprland config.",
        ),
        make_doc(
            "b2e1d4c3f6a58697",
            "Theme",
            "",
            "Switch themes with Super + Ctrl + Shift + Space. Each theme ships a \
             matching wallpaper, terminal palette and editor colors.",
        ),
        make_doc(
            "c3d2e5f4a7b69708",
            "Theme Settings",
            "Custom themes",
            "Create your own theme by copying an existing theme directory.",
        ),
        make_doc(
            "d4c3f6a5b8c7a819",
            "Wi-Fi",
            "Setup",
            "Use impala to connect to a wifi network. Wireless setup needs the \
             network password.",
        ),
        make_doc(
            "e5b4a7b6c9d8b92a",
            "Bluetooth",
            "Pairing",
            "Pair headphones and keyboards with bluetui.",
        ),
        make_doc(
            "f6a5b8c7d0e9ca3b",
            "Fonts",
            "",
            "Change the system font from the menu. Monospace fonts apply to the terminal.",
        ),
    ]
}

/// Engine over [`sample_docs`] with default configuration.
pub fn sample_engine() -> SearchEngine {
    engine_with(sample_docs(), EngineConfig::default())
}

/// Engine over arbitrary documents. Panics on invalid input; tests only.
pub fn engine_with(docs: Vec<Document>, config: EngineConfig) -> SearchEngine {
    SearchEngine::from_documents(docs, config).expect("test corpus must be valid")
}
