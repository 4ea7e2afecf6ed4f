//! Authenticated Remote Client
//!
//! Performs bearer-authenticated GETs against the remote service and
//! returns parsed JSON or a streamable response. Any transport error or
//! non-200 status is converted into the single generic
//! [`Error::FetchFailed`] kind; the original error is logged here and never
//! propagated to the caller.

use super::cache::{CacheKey, ResponseCache, TtlCache};
use crate::error::{Error, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP caller shared by the navigator and the fetcher.
///
/// Stateless apart from the injected response cache; no retries, no
/// connector-enforced timeout beyond the transport's.
#[derive(Clone)]
pub struct RemoteClient {
    client: Client,
    api_key: String,
    cache: Arc<dyn ResponseCache>,
}

impl RemoteClient {
    /// Create a client with the default short-lived cache
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_cache(api_key, Arc::new(TtlCache::default()))
    }

    /// Create a client with an explicit cache implementation
    pub fn with_cache(api_key: impl Into<String>, cache: Arc<dyn ResponseCache>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("grist-connector/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            cache,
        }
    }

    /// GET a JSON body, consulting the cache first.
    ///
    /// Identical `(url, credential)` calls within the cache TTL are served
    /// from memory.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let key = CacheKey::new(url, self.api_key.as_str());
        if let Some(body) = self.cache.get(&key).await {
            debug!("cache hit: GET {url}");
            return Ok(body);
        }

        let response = self.send(url).await?;
        let body: Value = response.json().await.map_err(|e| {
            warn!("GET {url}: failed to read JSON body: {e}");
            Error::FetchFailed
        })?;

        self.cache.put(key, body.clone()).await;
        Ok(body)
    }

    /// GET a JSON body and deserialize it into a payload type
    pub async fn get_typed<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_json(url).await?;
        serde_json::from_value(body).map_err(|e| {
            warn!("GET {url}: unexpected payload shape: {e}");
            Error::FetchFailed
        })
    }

    /// GET a response for streaming. Never cached.
    pub async fn get_stream(&self, url: &str) -> Result<Response> {
        self.send(url).await
    }

    async fn send(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                warn!("GET {url} failed: {e}");
                Error::FetchFailed
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("GET {url} returned {status}: {body}");
            return Err(Error::FetchFailed);
        }

        debug!("GET {url} succeeded");
        Ok(response)
    }
}

impl std::fmt::Debug for RemoteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteClient")
            .field("has_credential", &!self.api_key.is_empty())
            .finish_non_exhaustive()
    }
}
