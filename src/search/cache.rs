// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query cache: (query, limit) -> finished response.
//!
//! Bounded LRU with an absolute per-entry expiry. Entries are never
//! invalidated for any other reason since the corpus cannot change.
//!
//! This is the only mutable state the engine shares between requests. Lookup,
//! compute and insert happen under one lock, so concurrent callers see the
//! same sequence of hits and misses a single-threaded server would.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;

use crate::types::SearchResponse;

/// Cache key: the raw query string exactly as received, plus the limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: String,
    pub limit: usize,
}

impl CacheKey {
    pub fn new(query: &str, limit: usize) -> Self {
        Self {
            query: query.to_string(),
            limit,
        }
    }
}

struct CacheEntry {
    response: Arc<SearchResponse>,
    expires_at: Instant,
}

struct CacheState {
    entries: LruCache<CacheKey, CacheEntry>,
    hits: u64,
    misses: u64,
}

pub struct QueryCache {
    state: Mutex<CacheState>,
    ttl: Duration,
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("QueryCache")
            .field("len", &state.entries.len())
            .field("capacity", &state.entries.cap())
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl QueryCache {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            state: Mutex::new(CacheState {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
            }),
            ttl,
        }
    }

    /// Return the live entry for `key`, or compute, store and return a new one.
    ///
    /// Errors from `compute` are passed through and nothing is cached.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: CacheKey,
        compute: impl FnOnce() -> Result<SearchResponse, E>,
    ) -> Result<Arc<SearchResponse>, E> {
        self.get_or_try_insert_with_at(key, Instant::now(), compute)
    }

    pub(crate) fn get_or_try_insert_with_at<E>(
        &self,
        key: CacheKey,
        now: Instant,
        compute: impl FnOnce() -> Result<SearchResponse, E>,
    ) -> Result<Arc<SearchResponse>, E> {
        let mut state = self.state.lock();

        if let Some(response) = Self::lookup(&mut state, &key, now) {
            state.hits += 1;
            tracing::debug!(query = %key.query, limit = key.limit, "cache hit");
            return Ok(response);
        }
        state.misses += 1;
        tracing::debug!(query = %key.query, limit = key.limit, "cache miss");

        let response = Arc::new(compute()?);
        let entry = CacheEntry {
            response: Arc::clone(&response),
            expires_at: now + self.ttl,
        };
        if let Some((evicted, _)) = state.entries.push(key.clone(), entry) {
            if evicted != key {
                tracing::debug!(query = %evicted.query, limit = evicted.limit, "cache evict");
            }
        }
        Ok(response)
    }

    /// Live entry for `key`, dropping it if it has expired.
    fn lookup(state: &mut CacheState, key: &CacheKey, now: Instant) -> Option<Arc<SearchResponse>> {
        let expired = match state.entries.get(key) {
            Some(entry) if now < entry.expires_at => return Some(Arc::clone(&entry.response)),
            Some(_) => true,
            None => false,
        };
        if expired {
            state.entries.pop(key);
            tracing::debug!(query = %key.query, limit = key.limit, "cache expired");
        }
        None
    }

    /// Is a live entry present? Does not touch recency or counters.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.contains_at(key, Instant::now())
    }

    pub(crate) fn contains_at(&self, key: &CacheKey, now: Instant) -> bool {
        let state = self.state.lock();
        state
            .entries
            .peek(key)
            .is_some_and(|entry| now < entry.expires_at)
    }

    /// Number of live entries. Expired ones are dropped first.
    pub fn len(&self) -> usize {
        self.len_at(Instant::now())
    }

    pub(crate) fn len_at(&self, now: Instant) -> usize {
        let mut state = self.state.lock();
        let expired: Vec<CacheKey> = state
            .entries
            .iter()
            .filter(|(_, entry)| now >= entry.expires_at)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            state.entries.pop(key);
        }
        state.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.state.lock().entries.cap().get()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// (hits, misses) since creation.
    pub fn counters(&self) -> (u64, u64) {
        let state = self.state.lock();
        (state.hits, state.misses)
    }
}
