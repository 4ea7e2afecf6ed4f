//! Host-facing connector surface
//!
//! Three entry points, matching what the catalog host invokes:
//! `prepare(config, secrets)` validates the credential and probes
//! connectivity, `list_resources` walks one level of the tree, and
//! `get_resource` downloads a table into the host's scratch directory.
//!
//! All three are pure with respect to their inputs: `prepare` returns a
//! fresh redacted config instead of rewriting the shared one.

use crate::api::Routes;
use crate::config::{SourceConfig, SpecConfig};
use crate::error::{Error, Result};
use crate::fetcher;
use crate::http::{RemoteClient, ResponseCache, TtlCache};
use crate::navigator;
use crate::progress::{LogProgress, ProgressSink};
use crate::types::{Listing, ResourceDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

// ============================================================================
// Connector Spec (for the host UI)
// ============================================================================

/// Capability advertised to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Resources can be imported into the catalog
    Import,
    /// The host may render a thumbnail for this source
    Thumbnail,
}

/// Connector specification returned by `spec()`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorSpec {
    /// Connector name
    pub name: String,

    /// Human-readable title
    pub title: String,

    /// Description
    pub description: Option<String>,

    /// Capabilities advertised to the host
    pub capabilities: Vec<Capability>,

    /// Configuration specification
    pub spec: SpecConfig,
}

// ============================================================================
// Prepare Result
// ============================================================================

/// Result of a successful `prepare` call: fresh values, inputs untouched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prepared {
    /// Config with the credential masked
    pub config: Value,

    /// Secrets, passed through unchanged
    pub secrets: Value,
}

/// Result of a connection check, for CLI/host display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the check succeeded
    pub success: bool,

    /// Error message if failed
    pub message: Option<String>,
}

impl CheckResult {
    /// Create a successful check result
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Create a failed check result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

// ============================================================================
// Connector
// ============================================================================

/// The Grist catalog connector.
///
/// Holds the response cache so that re-rendering the same folder view
/// across calls does not multiply remote requests. Everything else is
/// rebuilt per call from the host-supplied `(config, secrets)` pair.
pub struct GristConnector {
    cache: Arc<dyn ResponseCache>,
}

impl GristConnector {
    /// Create a connector with the default short-lived cache
    pub fn new() -> Self {
        Self::with_cache(Arc::new(TtlCache::default()))
    }

    /// Create a connector with an explicit cache (tests use `NoopCache`)
    pub fn with_cache(cache: Arc<dyn ResponseCache>) -> Self {
        Self { cache }
    }

    /// The connector specification
    pub fn spec(&self) -> ConnectorSpec {
        ConnectorSpec {
            name: "grist".to_string(),
            title: "Grist".to_string(),
            description: Some(
                "Browse Grist organizations, workspaces and documents, and import tables as CSV"
                    .to_string(),
            ),
            capabilities: vec![Capability::Import, Capability::Thumbnail],
            spec: SourceConfig::property_spec(),
        }
    }

    fn session(&self, config: &Value, secrets: &Value) -> Result<(SourceConfig, RemoteClient, Routes)> {
        let cfg = SourceConfig::from_host(config, secrets)?;
        let routes = Routes::new(&cfg.url)?;
        let client = RemoteClient::with_cache(cfg.api_key.clone(), Arc::clone(&self.cache));
        Ok((cfg, client, routes))
    }

    /// Validate the configuration, probe connectivity and return a fresh
    /// redacted config. The inputs are never mutated.
    pub async fn prepare(&self, config: &Value, secrets: &Value) -> Result<Prepared> {
        let (cfg, client, routes) = self.session(config, secrets)?;

        client.get_json(&routes.orgs()).await.map_err(|_| {
            Error::connection_check("could not reach the service with the supplied URL and key")
        })?;

        Ok(Prepared {
            config: cfg.redacted(),
            secrets: secrets.clone(),
        })
    }

    /// List the next level of the tree under `current_folder_id`
    /// (the organization listing when `None`).
    pub async fn list_resources(
        &self,
        config: &Value,
        secrets: &Value,
        current_folder_id: Option<&str>,
    ) -> Result<Listing> {
        let (_, client, routes) = self.session(config, secrets)?;
        navigator::list_level(&client, &routes, current_folder_id).await
    }

    /// Download a table as CSV into `scratch_dir` and describe it.
    pub async fn get_resource(
        &self,
        config: &Value,
        secrets: &Value,
        resource_id: &str,
        scratch_dir: &Path,
    ) -> Result<ResourceDescriptor> {
        self.get_resource_with_progress(config, secrets, resource_id, scratch_dir, &LogProgress)
            .await
    }

    /// Same as [`get_resource`](Self::get_resource) with a custom
    /// progress sink.
    pub async fn get_resource_with_progress(
        &self,
        config: &Value,
        secrets: &Value,
        resource_id: &str,
        scratch_dir: &Path,
        progress: &dyn ProgressSink,
    ) -> Result<ResourceDescriptor> {
        let (_, client, routes) = self.session(config, secrets)?;
        fetcher::fetch_resource(&client, &routes, resource_id, scratch_dir, progress).await
    }
}

impl Default for GristConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spec_capabilities() {
        let spec = GristConnector::new().spec();
        assert_eq!(spec.name, "grist");
        assert_eq!(
            spec.capabilities,
            vec![Capability::Import, Capability::Thumbnail]
        );
        assert!(spec.spec.properties.contains_key("url"));
        assert!(spec.spec.properties.contains_key("apiKey"));
    }

    #[test]
    fn test_capability_serialization() {
        assert_eq!(
            serde_json::to_value(Capability::Import).unwrap(),
            json!("import")
        );
        assert_eq!(
            serde_json::to_value(Capability::Thumbnail).unwrap(),
            json!("thumbnail")
        );
    }

    #[tokio::test]
    async fn test_missing_url_fails_without_remote_call() {
        let connector = GristConnector::new();
        let err = connector
            .prepare(&json!({}), &json!({"apiKey": "k"}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_check_result_success() {
        let result = CheckResult::success();
        assert!(result.success);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_check_result_failure() {
        let result = CheckResult::failure("Connection failed");
        assert!(!result.success);
        assert_eq!(result.message, Some("Connection failed".to_string()));
    }
}
