// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine: where the rubber meets the road.
//!
//! `SearchEngine` owns everything built at startup (corpus, frequency table,
//! synonym dictionary) plus the query cache, and exposes the three operations
//! callers use: `search`, `fetch_by_id` and `stats`.
//!
//! Per request: expand -> score -> fuzzy fallback (only when fewer than
//! `min_candidates` documents scored) -> rank -> project -> cache.

pub mod cache;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::build::Corpus;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result, StartupError};
use crate::fuzzy::{fuzzy_search, merge_fuzzy};
use crate::query::{QueryExpander, SynonymTable};
use crate::scoring::ranking::{clamp_limit, project, rank, DEFAULT_LIMIT};
use crate::scoring::{score_documents, PreparedQuery};
use crate::types::{Document, EngineStats, FetchResponse, RankedEntry, SearchResponse};

use cache::{CacheKey, QueryCache};

/// How many expansion terms a response reports.
pub const EXPANDED_TERMS_SAMPLE: usize = 10;

/// How many keywords `fetch_by_id` returns.
pub const FETCH_KEYWORDS: usize = 10;

/// Fuzzy fallback returns up to this many candidates per result slot.
const FUZZY_RESULTS_PER_SLOT: usize = 2;

#[derive(Debug)]
pub struct SearchEngine {
    config: EngineConfig,
    corpus: Corpus,
    expander: QueryExpander,
    cache: QueryCache,
    computations: AtomicU64,
}

impl SearchEngine {
    /// Validate the config, load synonyms and the corpus file, index everything.
    pub fn load(config: EngineConfig) -> Result<Self, StartupError> {
        config.validate()?;
        let synonyms = load_synonyms(&config)?;
        let corpus = Corpus::load(&config.corpus_path)?;
        Ok(Self::assemble(config, corpus, synonyms))
    }

    /// Build an engine over in-memory documents. `config.corpus_path` is ignored.
    pub fn from_documents(documents: Vec<Document>, config: EngineConfig) -> Result<Self, StartupError> {
        config.validate()?;
        let synonyms = load_synonyms(&config)?;
        let corpus = Corpus::from_documents(documents)?;
        Ok(Self::assemble(config, corpus, synonyms))
    }

    /// Build an engine from an already indexed corpus and an explicit synonym table.
    pub fn with_corpus(
        corpus: Corpus,
        synonyms: SynonymTable,
        config: EngineConfig,
    ) -> Result<Self, StartupError> {
        config.validate()?;
        Ok(Self::assemble(config, corpus, synonyms))
    }

    fn assemble(config: EngineConfig, corpus: Corpus, synonyms: SynonymTable) -> Self {
        let cache = QueryCache::new(config.cache_capacity, config.cache_ttl);
        Self {
            config,
            corpus,
            expander: QueryExpander::new(synonyms),
            cache,
            computations: AtomicU64::new(0),
        }
    }

    /// Ranked results for `query`, served from the cache when possible.
    ///
    /// `limit` defaults to 10 and is clamped to `[1, 25]`. The cache is keyed by
    /// the raw query string and the limit as requested.
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<Arc<SearchResponse>> {
        if query.trim().is_empty() {
            return Err(EngineError::Validation("query must not be empty".to_string()));
        }
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        self.cache
            .get_or_try_insert_with(CacheKey::new(query, limit), || {
                Ok::<_, EngineError>(self.compute(query, limit))
            })
    }

    /// The full document behind a search hit.
    pub fn fetch_by_id(&self, id: &str) -> Result<FetchResponse> {
        let doc = self
            .corpus
            .get(id)
            .ok_or_else(|| EngineError::NotFound(id.to_string()))?;

        Ok(FetchResponse {
            id: doc.doc.id.clone(),
            title: doc.doc.title.clone(),
            heading: doc.doc.heading.clone(),
            url: doc.doc.url.clone(),
            markdown: doc.doc.body.clone(),
            keywords: doc.keywords.iter().take(FETCH_KEYWORDS).cloned().collect(),
        })
    }

    pub fn stats(&self) -> EngineStats {
        let (cache_hits, cache_misses) = self.cache.counters();
        EngineStats {
            cache_size: self.cache.len(),
            cache_capacity: self.cache.capacity(),
            total_documents: self.corpus.len(),
            total_unique_terms: self.corpus.doc_freq().unique_terms(),
            cache_hits,
            cache_misses,
        }
    }

    /// Expansion terms for `query`, without scoring anything.
    pub fn expand(&self, query: &str) -> Vec<String> {
        self.expander.expand(query)
    }

    /// Number of searches computed from scratch (cache misses that scored).
    pub fn computations(&self) -> u64 {
        self.computations.load(Ordering::Relaxed)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn compute(&self, query: &str, limit: usize) -> SearchResponse {
        let started = Instant::now();
        self.computations.fetch_add(1, Ordering::Relaxed);

        let docs = self.corpus.docs();
        let terms = self.expander.expand(query);
        let prepared = PreparedQuery::new(query, &terms, self.corpus.doc_freq());
        let mut scores = score_documents(docs, &prepared, self.config.frequency_weight);

        if scores.len() < self.config.min_candidates {
            let matches = fuzzy_search(
                docs,
                query,
                self.config.fuzzy_threshold,
                FUZZY_RESULTS_PER_SLOT * clamp_limit(limit),
            );
            tracing::debug!(
                candidates = scores.len(),
                fuzzy = matches.len(),
                "sparse results, fuzzy fallback"
            );
            merge_fuzzy(&mut scores, &matches);
        }

        let results: Vec<RankedEntry> = rank(scores, docs, limit)
            .iter()
            .map(|s| project(&docs[s.doc_idx], s.score))
            .collect();

        SearchResponse {
            count: results.len(),
            results,
            query: query.to_string(),
            search_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            expanded_terms: terms.into_iter().take(EXPANDED_TERMS_SAMPLE).collect(),
        }
    }
}

fn load_synonyms(config: &EngineConfig) -> Result<SynonymTable, StartupError> {
    match &config.synonyms_path {
        Some(path) => SynonymTable::from_json_file(path),
        None => Ok(SynonymTable::default()),
    }
}
