// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the ferret CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `FERRET_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals),
//! then defaults to dark because most developers live there.
//!
//! Respects `NO_COLOR` and non-TTY detection for pipelines. `--json` bypasses
//! all of this and prints the response structs as-is.

use std::sync::OnceLock;

use ferret::{EngineStats, FetchResponse, SearchResponse};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Preview lines shown per result in the table view.
const PREVIEW_LINES: usize = 2;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FERRET_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const WHITE: (u8, u8, u8) = (171, 178, 191);   // #abb2bf
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const WHITE: (u8, u8, u8) = (56, 58, 66);      // #383a42
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(WHITE);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off
fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` characters, marking the cut with `…`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Greedy word wrap of plain text to `width` characters per line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section divider: ├──────────────────┤
pub fn section_mid() {
    println!("{}├{}┤{}", border(), "─".repeat(BOX_WIDTH), reset());
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded timing value in ms
pub fn timing_ms(value: f64) -> String {
    if !use_colors() {
        return format!("{:.3}", value);
    }
    let color = if value < 5.0 {
        GREEN()
    } else if value < 20.0 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{:.3}{}", color, value, RESET)
}

/// Color-coded score value
pub fn score_value(score: f64) -> String {
    if !use_colors() {
        return format!("{:>7.1}", score);
    }
    let color = if score >= 100.0 {
        BRIGHT_GREEN()
    } else if score >= 50.0 {
        GREEN()
    } else if score >= 20.0 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{:>7.1}{}", color, score, RESET)
}

/// "Title › Heading", or just the title when there is no heading
fn breadcrumb(title: &str, heading: &str) -> String {
    if heading.is_empty() || heading == title {
        title.to_string()
    } else {
        format!("{} › {}", title, heading)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_search(response: &SearchResponse) {
    section_top(&format!("SEARCH \"{}\"", truncate(&response.query, 50)));
    row(&format!(
        " {} results in {} ms",
        response.count,
        timing_ms(response.search_time_ms)
    ));
    if !response.expanded_terms.is_empty() {
        let terms = truncate(&response.expanded_terms.join(", "), BOX_WIDTH - 12);
        row(&format!(" {} {}", themed(GRAY, &[], "expanded:"), terms));
    }

    for entry in &response.results {
        section_mid();
        let crumb = truncate(&breadcrumb(&entry.title, &entry.heading), BOX_WIDTH - 10);
        row(&format!("{} {}", score_value(entry.score), themed(WHITE, &[BOLD], &crumb)));
        row(&format!("        {}", themed(BLUE, &[], &truncate(&entry.url, BOX_WIDTH - 9))));
        row(&format!("        {}", themed(GRAY, &[DIM], &truncate(&entry.id, BOX_WIDTH - 9))));
        for line in wrap(&entry.preview, BOX_WIDTH - 9).into_iter().take(PREVIEW_LINES) {
            row(&format!("        {}", line));
        }
        if !entry.keywords.is_empty() {
            let keywords = truncate(&entry.keywords.join(" · "), BOX_WIDTH - 9);
            row(&format!("        {}", themed(CYAN, &[], &keywords)));
        }
    }
    section_bot();
}

pub fn print_fetch(doc: &FetchResponse) {
    section_top(&truncate(&breadcrumb(&doc.title, &doc.heading), BOX_WIDTH - 6));
    row(&format!(" {} {}", themed(GRAY, &[], "id: "), doc.id));
    row(&format!(" {} {}", themed(GRAY, &[], "url:"), themed(BLUE, &[], &truncate(&doc.url, BOX_WIDTH - 7))));
    if !doc.keywords.is_empty() {
        let keywords = truncate(&doc.keywords.join(", "), BOX_WIDTH - 7);
        row(&format!(" {} {}", themed(GRAY, &[], "kw: "), themed(CYAN, &[], &keywords)));
    }
    section_bot();
    println!();
    println!("{}", doc.markdown);
}

pub fn print_stats(stats: &EngineStats) {
    let line = |label: &str, value: String| {
        row(&format!(" {:<20}{}", themed(GRAY, &[], label), value));
    };
    section_top("STATS");
    line("documents", stats.total_documents.to_string());
    line("unique terms", stats.total_unique_terms.to_string());
    line(
        "cache",
        format!("{} / {}", stats.cache_size, stats.cache_capacity),
    );
    line("cache hits", themed(GREEN, &[], &stats.cache_hits.to_string()));
    line("cache misses", themed(YELLOW, &[], &stats.cache_misses.to_string()));
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
