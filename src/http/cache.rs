//! Response memoization
//!
//! Re-rendering the same folder view must not multiply remote calls, so
//! JSON responses are cached for a short window keyed by the exact
//! `(url, credential)` pair. Entries are immutable once cached and expire
//! after a fixed time-to-live.
//!
//! The cache is an injectable component owned by the client instance, not
//! process-wide state; tests substitute [`NoopCache`] for determinism.

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

/// Default time-to-live for cached responses
pub const DEFAULT_TTL: Duration = Duration::from_secs(120);

/// Exact lookup key: same URL with a different credential is a miss
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Absolute request URL
    pub url: String,
    /// Bearer credential the response was fetched with
    pub credential: String,
}

impl CacheKey {
    /// Build a key from a URL/credential pair
    pub fn new(url: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credential: credential.into(),
        }
    }
}

/// A cached response body with its expiry instant
#[derive(Debug, Clone)]
struct CachedResponse {
    body: Value,
    expires_at: DateTime<Utc>,
}

impl CachedResponse {
    fn new(body: Value, ttl: Duration) -> Self {
        Self {
            body,
            expires_at: Utc::now() + ChronoDuration::milliseconds(ttl.as_millis() as i64),
        }
    }

    fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Injectable response cache seam
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Look up a non-expired cached body
    async fn get(&self, key: &CacheKey) -> Option<Value>;

    /// Store a body under the key
    async fn put(&self, key: CacheKey, body: Value);
}

/// In-memory cache with a fixed time-to-live
#[derive(Debug)]
pub struct TtlCache {
    ttl: Duration,
    entries: RwLock<HashMap<CacheKey, CachedResponse>>,
}

impl TtlCache {
    /// Create a cache with the given time-to-live
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[async_trait]
impl ResponseCache for TtlCache {
    async fn get(&self, key: &CacheKey) -> Option<Value> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.body.clone())
    }

    async fn put(&self, key: CacheKey, body: Value) {
        let mut entries = self.entries.write().await;
        // Drop expired entries while we hold the write lock anyway
        entries.retain(|_, entry| !entry.is_expired());
        entries.insert(key, CachedResponse::new(body, self.ttl));
    }
}

/// Cache that never stores anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

#[async_trait]
impl ResponseCache for NoopCache {
    async fn get(&self, _key: &CacheKey) -> Option<Value> {
        None
    }

    async fn put(&self, _key: CacheKey, _body: Value) {}
}
