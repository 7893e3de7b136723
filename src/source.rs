//! Where manifests come from.
//!
//! The projection functions only ever see a [`Registry`]; how it was obtained
//! sits behind [`ManifestSource`]. The CLI reads files from disk via
//! [`FileSource`]; a long-running host wraps its source in a [`CachedSource`]
//! so repeated navigation does not refetch.
//!
//! ```text
//! CachedSource::fetch(location)
//!   ├── cache hit ──────────────► Registry
//!   └── miss ──► inner.fetch ──┬─► Ok: store, return
//!                              ├─► invalid manifest: NotFound
//!                              └─► other error: passed through
//! ```

use crate::cache::{CacheStats, ManifestCache};
use crate::manifest::{ManifestError, Registry};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("no registry manifest at {0}")]
    NotFound(String),
}

/// Anything that can produce a registry for a location string.
pub trait ManifestSource {
    fn fetch(&mut self, location: &str) -> Result<Registry, SourceError>;
}

/// Reads manifests from the filesystem, relative to `base` when given.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    base: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative locations against `base`.
    pub fn rooted(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn resolve(&self, location: &str) -> PathBuf {
        match &self.base {
            Some(base) => base.join(location),
            None => PathBuf::from(location),
        }
    }
}

impl ManifestSource for FileSource {
    fn fetch(&mut self, location: &str) -> Result<Registry, SourceError> {
        let path = self.resolve(location);
        if !path.is_file() {
            return Err(SourceError::NotFound(path.display().to_string()));
        }
        let registry = Registry::load(&path)?;
        tracing::info!(path = %path.display(), items = registry.items.len(), "loaded manifest");
        Ok(registry)
    }
}

/// A source with a TTL cache in front of it.
pub struct CachedSource<S> {
    inner: S,
    cache: ManifestCache,
}

impl<S: ManifestSource> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            cache: ManifestCache::new(ttl),
        }
    }

    pub fn stats(&self) -> &CacheStats {
        self.cache.stats()
    }

    /// Forget the cached copy of `location` so the next fetch goes through.
    pub fn refresh(&mut self, location: &str) {
        self.cache.invalidate(location);
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ManifestSource> ManifestSource for CachedSource<S> {
    fn fetch(&mut self, location: &str) -> Result<Registry, SourceError> {
        if let Some(registry) = self.cache.get(location) {
            return Ok(registry);
        }
        match self.inner.fetch(location) {
            Ok(registry) => {
                self.cache.put(location, registry.clone());
                Ok(registry)
            }
            Err(SourceError::Manifest(ManifestError::Invalid(reason))) => {
                tracing::warn!(location, %reason, "invalid manifest treated as not found");
                Err(SourceError::NotFound(location.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}
