// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonym dictionary for query expansion.
//!
//! The built-in table targets a desktop Linux manual: keybindings, networking,
//! theming, package management. A JSON file of the same shape
//! (`{"key": ["synonym", ...]}`) can replace it at startup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::StartupError;

const BUILTIN: &[(&str, &[&str])] = &[
    ("app", &["application", "program"]),
    ("apps", &["applications", "programs"]),
    ("audio", &["sound", "volume", "speakers"]),
    ("background", &["wallpaper"]),
    ("bluetooth", &["wireless", "pairing", "bluez"]),
    ("browser", &["chromium", "web"]),
    ("config", &["configuration", "settings", "dotfiles"]),
    ("dark mode", &["dark theme", "theme"]),
    ("display", &["monitor", "screen"]),
    ("editor", &["neovim", "nvim"]),
    ("font", &["fonts", "typeface"]),
    ("hotkeys", &["shortcuts", "keybinds", "keybindings"]),
    ("install", &["setup", "add"]),
    ("key bindings", &["keybindings", "shortcuts", "hotkeys"]),
    ("keybinds", &["shortcuts", "hotkeys", "keybindings"]),
    ("keyboard", &["layout", "input"]),
    ("launcher", &["menu", "walker"]),
    ("lock", &["hyprlock", "screensaver"]),
    ("lock screen", &["hyprlock", "screen lock"]),
    ("monitor", &["display", "screen"]),
    ("network", &["wifi", "internet"]),
    ("package", &["packages", "pacman", "yay"]),
    ("password", &["passphrase", "credentials"]),
    ("remove", &["uninstall", "delete"]),
    ("screenshot", &["screen capture", "capture"]),
    ("settings", &["config", "preferences"]),
    ("setup", &["install", "configure"]),
    ("shortcut", &["hotkey", "keybind", "keybinding"]),
    ("shortcuts", &["hotkeys", "keybinds", "keybindings"]),
    ("sound", &["audio", "volume"]),
    ("terminal", &["console", "shell", "alacritty"]),
    ("theme", &["themes", "colors", "appearance"]),
    ("uninstall", &["remove"]),
    ("update", &["upgrade", "updates"]),
    ("wallpaper", &["background"]),
    ("wifi", &["wireless", "network", "wlan"]),
    ("window", &["windows", "tiling"]),
    ("workspace", &["workspaces", "desktop"]),
];

/// Lowercased key -> synonyms, in dictionary order.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::from_pairs(
            BUILTIN
                .iter()
                .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect())),
        )
    }
}

impl SynonymTable {
    /// Build from (key, synonyms) pairs. Keys and synonyms are lowercased.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(k, vs)| {
                let synonyms = vs
                    .into_iter()
                    .map(|v| v.trim().to_lowercase())
                    .filter(|v| !v.is_empty())
                    .collect();
                (k.trim().to_lowercase(), synonyms)
            })
            .collect();
        Self { entries }
    }

    /// Load a JSON object of `key -> [synonyms]` from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, StartupError> {
        let content = fs::read_to_string(path).map_err(|e| StartupError::Synonyms {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let map: HashMap<String, Vec<String>> =
            serde_json::from_str(&content).map_err(|e| StartupError::Synonyms {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Self::from_pairs(map))
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
