// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ferret command-line interface.
//!
//! Four subcommands: `search` to run one query, `fetch` to print a document,
//! `stats` to report corpus and cache statistics, and `shell` to keep one
//! engine alive and answer requests read from stdin. The shell is the only
//! mode where the query cache earns its keep across requests.
//!
//! Engine settings are global flags, each with a `FERRET_*` environment
//! variable fallback.

pub mod display;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use ferret::config::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS, DEFAULT_CORPUS_PATH,
    DEFAULT_FREQUENCY_WEIGHT, DEFAULT_FUZZY_THRESHOLD, DEFAULT_MIN_CANDIDATES,
};
use ferret::EngineConfig;

#[derive(Parser)]
#[command(
    name = "ferret",
    about = "Ranked keyword search over a documentation corpus",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print responses as JSON instead of formatted tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// JSON Lines corpus file
    #[arg(long = "corpus", env = "FERRET_CORPUS", default_value = DEFAULT_CORPUS_PATH, global = true)]
    pub corpus_path: PathBuf,

    /// Maximum number of cached search responses
    #[arg(long, env = "FERRET_CACHE_CAPACITY", default_value_t = DEFAULT_CACHE_CAPACITY, global = true)]
    pub cache_capacity: usize,

    /// Lifetime of a cached response in seconds
    #[arg(long, env = "FERRET_CACHE_TTL", default_value_t = DEFAULT_CACHE_TTL_SECS, global = true)]
    pub cache_ttl: u64,

    /// Maximum normalized edit distance accepted by the fuzzy fallback (0.0 - 1.0)
    #[arg(long, env = "FERRET_FUZZY_THRESHOLD", default_value_t = DEFAULT_FUZZY_THRESHOLD, global = true)]
    pub fuzzy_threshold: f64,

    /// Run the fuzzy fallback when fewer documents than this score
    #[arg(long, env = "FERRET_MIN_CANDIDATES", default_value_t = DEFAULT_MIN_CANDIDATES, global = true)]
    pub min_candidates: usize,

    /// Scale applied to the tf-idf signal
    #[arg(long, env = "FERRET_FREQUENCY_WEIGHT", default_value_t = DEFAULT_FREQUENCY_WEIGHT, global = true)]
    pub frequency_weight: f64,

    /// JSON synonym dictionary replacing the built-in one
    #[arg(long = "synonyms", env = "FERRET_SYNONYMS", global = true)]
    pub synonyms_path: Option<PathBuf>,
}

impl From<EngineArgs> for EngineConfig {
    fn from(args: EngineArgs) -> Self {
        EngineConfig {
            corpus_path: args.corpus_path,
            cache_capacity: args.cache_capacity,
            cache_ttl: Duration::from_secs(args.cache_ttl),
            fuzzy_threshold: args.fuzzy_threshold,
            min_candidates: args.min_candidates,
            frequency_weight: args.frequency_weight,
            synonyms_path: args.synonyms_path,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus and display ranked results
    Search {
        /// Search query
        query: String,

        /// Maximum number of results to return (clamped to 1-25)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print one document by id
    Fetch {
        /// Document id as shown in search results
        id: String,
    },

    /// Show corpus and cache statistics
    Stats,

    /// Answer requests from stdin with a single long-lived engine
    ///
    /// Each line is `search <query>`, `fetch <id>`, `stats`, or a bare query.
    /// Blank lines are ignored; `quit` or EOF exits.
    Shell,
}
