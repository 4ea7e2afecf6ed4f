//! Host configuration parsing and redaction
//!
//! The catalog host hands the connector a `(config, secrets)` pair of JSON
//! values. Recognized configuration: `{url: string (required), apiKey:
//! string (secret)}`. Parsing never mutates the input; redaction returns a
//! fresh value with the credential masked.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Mask written into redacted config values in place of the credential
pub const REDACTED: &str = "**********";

// ============================================================================
// Source Config
// ============================================================================

/// Parsed connector configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Base URL of the Grist deployment
    pub url: String,
    /// Opaque bearer credential. May be empty: public documents are
    /// readable without one.
    pub api_key: String,
}

impl SourceConfig {
    /// Parse the host-supplied `(config, secrets)` pair.
    ///
    /// A missing base URL is a configuration error raised before any
    /// remote call. The credential is looked up in `secrets` first, then
    /// in `config`.
    pub fn from_host(config: &Value, secrets: &Value) -> Result<Self> {
        let url = config
            .get("url")
            .and_then(Value::as_str)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::missing_field("url"))?;

        let api_key = secrets
            .get("apiKey")
            .or_else(|| config.get("apiKey"))
            .and_then(Value::as_str)
            .unwrap_or_default();

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Return a fresh config value with the credential masked.
    pub fn redacted(&self) -> Value {
        json!({
            "url": self.url,
            "apiKey": REDACTED,
        })
    }
}

// ============================================================================
// Property Spec (for the host UI)
// ============================================================================

/// Property type for the configuration schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    String,
    Integer,
    Boolean,
}

/// Configuration property definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyConfig {
    /// Property type
    #[serde(rename = "type", default)]
    pub property_type: PropertyType,

    /// Human-readable title
    #[serde(default)]
    pub title: Option<String>,

    /// Property description
    #[serde(default)]
    pub description: Option<String>,

    /// Whether this is a secret (should be masked)
    #[serde(default)]
    pub secret: bool,

    /// Whether this property is required
    #[serde(default)]
    pub required: bool,

    /// Format hint (e.g., "uri")
    #[serde(default)]
    pub format: Option<String>,
}

/// Configuration specification advertised to the host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecConfig {
    /// Configuration properties
    #[serde(default)]
    pub properties: HashMap<String, PropertyConfig>,
}

impl SourceConfig {
    /// The `{url, apiKey}` property schema advertised by `spec()`
    pub fn property_spec() -> SpecConfig {
        let mut properties = HashMap::new();
        properties.insert(
            "url".to_string(),
            PropertyConfig {
                property_type: PropertyType::String,
                title: Some("Base URL".to_string()),
                description: Some("Address of the Grist deployment".to_string()),
                secret: false,
                required: true,
                format: Some("uri".to_string()),
            },
        );
        properties.insert(
            "apiKey".to_string(),
            PropertyConfig {
                property_type: PropertyType::String,
                title: Some("API key".to_string()),
                description: Some("Bearer credential for the Grist API".to_string()),
                secret: true,
                required: false,
                format: None,
            },
        );
        SpecConfig { properties }
    }
}
