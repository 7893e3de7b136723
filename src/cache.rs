//! In-memory manifest cache with a time-to-live.
//!
//! Fetching a registry manifest can mean a network round trip or parsing a
//! multi-megabyte document. The explorer asks for the same manifest over and
//! over while the user clicks around, so parsed registries are kept for a
//! while and handed back until they expire.
//!
//! ## Cache keys
//!
//! Entries are keyed by the SHA-256 of the manifest location, so a URL with a
//! query string or a long file path makes as good a key as a short name.
//!
//! ## Expiry
//!
//! An entry is fresh while `now - stored_at < ttl`. A lookup that finds an
//! expired entry drops it and reports a miss; [`ManifestCache::put`] also
//! sweeps every expired entry before storing.
//!
//! Failed fetches are never stored: only a [`Registry`] goes in.

use crate::manifest::Registry;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

struct CacheEntry {
    registry: Registry,
    stored_at: Instant,
}

/// Parsed registries by location, each valid for `ttl`.
pub struct ManifestCache {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

impl ManifestCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of entries currently held, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// The cached registry for `location`, if present and not yet expired.
    pub fn get(&mut self, location: &str) -> Option<Registry> {
        self.get_at(location, Instant::now())
    }

    /// Store a freshly fetched registry for `location`.
    pub fn put(&mut self, location: &str, registry: Registry) {
        self.put_at(location, registry, Instant::now());
    }

    /// Drop the entry for `location`, if any.
    pub fn invalidate(&mut self, location: &str) {
        self.entries.remove(&cache_key(location));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn get_at(&mut self, location: &str, now: Instant) -> Option<Registry> {
        let key = cache_key(location);
        let Some(entry) = self.entries.get(&key) else {
            self.stats.miss();
            return None;
        };
        if now.duration_since(entry.stored_at) < self.ttl {
            self.stats.hit();
            tracing::debug!(location, "manifest cache hit");
            return Some(entry.registry.clone());
        }
        self.entries.remove(&key);
        self.stats.expire();
        tracing::debug!(location, "manifest cache entry expired");
        None
    }

    pub(crate) fn put_at(&mut self, location: &str, registry: Registry, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.duration_since(entry.stored_at) < ttl);
        self.entries.insert(
            cache_key(location),
            CacheEntry {
                registry,
                stored_at: now,
            },
        );
    }
}

/// SHA-256 of a manifest location, hex encoded.
pub fn cache_key(location: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(location.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Lookup counters for a cache's lifetime.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u32,
    pub misses: u32,
    pub expired: u32,
}

impl CacheStats {
    pub fn hit(&mut self) {
        self.hits += 1;
    }

    pub fn miss(&mut self) {
        self.misses += 1;
    }

    pub fn expire(&mut self) {
        self.expired += 1;
    }

    pub fn total(&self) -> u32 {
        self.hits + self.misses + self.expired
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expired > 0 {
            write!(
                f,
                "{} cached, {} fetched, {} expired ({} total)",
                self.hits,
                self.misses,
                self.expired,
                self.total()
            )
        } else if self.hits > 0 {
            write!(
                f,
                "{} cached, {} fetched ({} total)",
                self.hits,
                self.misses,
                self.total()
            )
        } else {
            write!(f, "{} fetched", self.misses)
        }
    }
}
