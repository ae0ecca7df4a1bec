// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ferret::{EngineConfig, EngineError, SearchEngine};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = EngineConfig::from(cli.engine);
    let corpus_path = config.corpus_path.clone();
    let engine = SearchEngine::load(config)
        .with_context(|| format!("failed to start engine from {}", corpus_path.display()))?;
    let json = cli.json;

    match cli.command {
        Commands::Search { query, limit } => {
            let response = engine.search(&query, limit)?;
            emit(json, &*response, display::print_search)
        }
        Commands::Fetch { id } => {
            let doc = engine.fetch_by_id(&id)?;
            emit(json, &doc, display::print_fetch)
        }
        Commands::Stats => emit(json, &engine.stats(), display::print_stats),
        Commands::Shell => run_shell(&engine, json),
    }
}

fn emit<T: Serialize>(json: bool, value: &T, pretty: fn(&T)) -> Result<()> {
    if json {
        let mut out = io::stdout().lock();
        serde_json::to_writer(&mut out, value).context("failed to write JSON")?;
        writeln!(out)?;
        out.flush()?;
    } else {
        pretty(value);
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SHELL
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, PartialEq, Eq)]
enum Request<'a> {
    Search(&'a str),
    Fetch(&'a str),
    Stats,
    Quit,
}

/// One shell line -> request. `None` for blank lines.
fn parse_request(line: &str) -> Option<Request<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    Some(match command {
        "search" => Request::Search(rest),
        "fetch" => Request::Fetch(rest),
        "stats" if rest.is_empty() => Request::Stats,
        "quit" | "exit" if rest.is_empty() => Request::Quit,
        _ => Request::Search(line),
    })
}

/// Answer stdin requests one at a time until EOF or `quit`.
///
/// Request-level failures (blank query, unknown id) are reported and the loop
/// keeps going. Only I/O failures end it.
fn run_shell(engine: &SearchEngine, json: bool) -> Result<()> {
    tracing::info!(documents = engine.corpus().len(), "shell ready");
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let Some(request) = parse_request(&line) else {
            continue;
        };

        let outcome = match request {
            Request::Quit => break,
            Request::Search(query) => engine
                .search(query, None)
                .map(|response| emit(json, &*response, display::print_search)),
            Request::Fetch(id) => engine
                .fetch_by_id(id)
                .map(|doc| emit(json, &doc, display::print_fetch)),
            Request::Stats => Ok(emit(json, &engine.stats(), display::print_stats)),
        };

        match outcome {
            Ok(written) => written?,
            Err(e) => report(json, &e)?,
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

fn report(json: bool, e: &EngineError) -> Result<()> {
    let kind = match e {
        EngineError::Validation(_) => "validation",
        EngineError::NotFound(_) => "not_found",
        EngineError::Startup(_) => "startup",
    };
    if json {
        emit(
            true,
            &ErrorBody {
                error: kind,
                message: e.to_string(),
            },
            |_| {},
        )
    } else {
        eprintln!("❌ {}", e);
        Ok(())
    }
}
