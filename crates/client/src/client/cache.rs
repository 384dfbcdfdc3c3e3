//! Time-bounded cache for the form choice list.
//!
//! Purpose: Avoid a remote call every time an editor opens a page form.
//! Responsibilities: Hold one choice list under a fixed key, expire it after a TTL, expose hit/miss metrics.
//! Non-scope: Reacting to settings changes, single-flight loading, persistence.
//!
//! # Invariants
//! - An empty list is a cached value; only an absent or expired entry is a miss
//! - TTL is enforced per-entry relative to when it was inserted
//! - Concurrent misses may each insert; the last write wins

use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use jotform_config::constants::{CHOICES_CACHE_KEY, DEFAULT_CHOICES_TTL_SECS};
use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::metrics::MetricsCollector;
use crate::models::FormChoice;

/// A cached choice list.
#[derive(Clone, Debug)]
pub struct CachedChoices {
    pub choices: Arc<Vec<FormChoice>>,
    /// When this entry was cached.
    pub cached_at: Instant,
    /// Time-to-live for this entry.
    pub ttl: Duration,
}

impl CachedChoices {
    /// Check if this entry has expired relative to a given reference time.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.cached_at) >= self.ttl
    }
}

/// Process-wide store for the form choice list.
///
/// Clones share the same storage.
#[derive(Clone, Debug)]
pub struct ChoiceCache {
    inner: MokaCache<&'static str, CachedChoices>,
    ttl: Duration,
    metrics: Option<MetricsCollector>,
}

impl ChoiceCache {
    /// Create a cache with the default five minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(DEFAULT_CHOICES_TTL_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: MokaCache::builder().max_capacity(16).build(),
            ttl,
            metrics: None,
        }
    }

    /// The cache shared by every client in the process that does not bring its own.
    pub fn shared() -> &'static ChoiceCache {
        static SHARED: OnceLock<ChoiceCache> = OnceLock::new();
        SHARED.get_or_init(ChoiceCache::new)
    }

    /// Set the metrics collector.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the cached list if present and fresh.
    pub async fn get(&self) -> Option<Vec<FormChoice>> {
        self.get_at(Instant::now()).await
    }

    /// Get the cached list, checking expiration relative to a given time.
    pub async fn get_at(&self, now: Instant) -> Option<Vec<FormChoice>> {
        match self.inner.get(&CHOICES_CACHE_KEY).await {
            Some(entry) if entry.is_expired_at(now) => {
                trace!(key = CHOICES_CACHE_KEY, "Choice cache entry expired");
                self.inner.invalidate(&CHOICES_CACHE_KEY).await;
                self.record_miss();
                None
            }
            Some(entry) => {
                trace!(key = CHOICES_CACHE_KEY, count = entry.choices.len(), "Choice cache hit");
                self.record_hit();
                Some(entry.choices.as_ref().clone())
            }
            None => {
                trace!(key = CHOICES_CACHE_KEY, "Choice cache miss");
                self.record_miss();
                None
            }
        }
    }

    /// Store a choice list, replacing any previous one.
    pub async fn insert(&self, choices: Vec<FormChoice>) {
        let entry = CachedChoices {
            choices: Arc::new(choices),
            cached_at: Instant::now(),
            ttl: self.ttl,
        };
        self.inner.insert(CHOICES_CACHE_KEY, entry).await;
    }

    /// Drop the cached list so the next read refetches.
    pub async fn invalidate(&self) {
        self.inner.invalidate(&CHOICES_CACHE_KEY).await;
    }

    fn record_hit(&self) {
        if let Some(m) = &self.metrics {
            m.record_cache_hit();
        }
    }

    fn record_miss(&self) {
        if let Some(m) = &self.metrics {
            m.record_cache_miss();
        }
    }
}

impl Default for ChoiceCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl() {
        assert_eq!(ChoiceCache::new().ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CachedChoices {
            choices: Arc::new(vec![]),
            cached_at: Instant::now(),
            ttl: Duration::from_secs(300),
        };

        assert!(!entry.is_expired_at(entry.cached_at + Duration::from_secs(299)));
        assert!(entry.is_expired_at(entry.cached_at + Duration::from_secs(300)));
    }

    #[tokio::test]
    async fn test_empty_list_is_a_hit() {
        let cache = ChoiceCache::new();
        assert_eq!(cache.get().await, None);

        cache.insert(vec![]).await;
        assert_eq!(cache.get().await, Some(vec![]));
    }

    #[tokio::test]
    async fn test_insert_replaces() {
        let cache = ChoiceCache::new();
        cache.insert(vec![FormChoice::new("1", "Old")]).await;
        cache.insert(vec![FormChoice::new("2", "New")]).await;

        assert_eq!(cache.get().await, Some(vec![FormChoice::new("2", "New")]));
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss() {
        let cache = ChoiceCache::new();
        cache.insert(vec![FormChoice::new("1", "Form 1")]).await;

        let later = Instant::now() + Duration::from_secs(301);
        assert_eq!(cache.get_at(later).await, None);
        // The expired entry was evicted.
        assert_eq!(cache.get().await, None);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = ChoiceCache::new();
        cache.insert(vec![]).await;
        cache.invalidate().await;
        assert_eq!(cache.get().await, None);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let cache = ChoiceCache::new();
        let other = cache.clone();
        cache.insert(vec![FormChoice::new("1", "Form 1")]).await;
        assert!(other.get().await.is_some());
    }
}
