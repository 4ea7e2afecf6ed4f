// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Grist Connector
//!
//! A catalog connector that exposes a Grist deployment's hierarchical
//! resources (organizations → workspaces → documents → tables) to a data
//! catalog host, and retrieves a chosen table as a downloadable CSV file
//! with field-level metadata.
//!
//! ## Features
//!
//! - **Hierarchical browsing**: navigate the organization/workspace/document
//!   tree through opaque, round-trip-stable folder identifiers
//! - **CSV retrieval**: stream a table to disk with throttled progress
//!   reporting and an attached table schema
//! - **Domain-aware routing**: transparent handling of the SaaS root domain
//!   vs self-hosted `/o/{domain}/` API paths
//! - **Short-lived memoization**: identical `(url, credential)` lookups
//!   within the cache TTL are served without a remote call
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grist_connector::{GristConnector, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let connector = GristConnector::new();
//!
//!     let config = serde_json::json!({ "url": "https://grist.example.com" });
//!     let secrets = serde_json::json!({ "apiKey": "..." });
//!
//!     // Validate credentials and probe connectivity
//!     let prepared = connector.prepare(&config, &secrets).await?;
//!
//!     // Walk the tree from the root
//!     let listing = connector.list_resources(&config, &secrets, None).await?;
//!
//!     // Download a table as CSV
//!     let resource = connector
//!         .get_resource(&config, &secrets, "org-1|d1|Table1", "/tmp/scratch".as_ref())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Connector Surface                        │
//! │  spec()   prepare(config, secrets)                           │
//! │  list_resources(folder_id) → Listing                         │
//! │  get_resource(resource_id, scratch_dir) → ResourceDescriptor │
//! └──────────────────────────────────────────────────────────────┘
//!                │                              │
//! ┌──────────────┴──────────┐    ┌──────────────┴───────────────┐
//! │    Resource Navigator   │    │       Resource Fetcher       │
//! │  folder-id dispatch     │    │  CSV download + schema       │
//! │  breadcrumb rebuilding  │    │  origin/size metadata        │
//! └──────────────┬──────────┘    └──────────────┬───────────────┘
//!                └───────────────┬──────────────┘
//!                ┌───────────────┴──────────────┐
//!                │        Remote Client         │
//!                │  bearer auth · TTL cache     │
//!                │  generic failure collapsing  │
//!                └──────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the connector
pub mod error;

/// Listing and resource descriptor types
pub mod types;

/// Folder and resource identifier encoding
pub mod address;

/// Host configuration parsing and redaction
pub mod config;

/// Authenticated HTTP client with response memoization
pub mod http;

/// Remote service payloads and domain-aware routing
pub mod api;

/// Table schema derivation
pub mod schema;

/// Download progress reporting
pub mod progress;

/// Resource Navigator: hierarchical listing with breadcrumbs
pub mod navigator;

/// Resource Fetcher: CSV download with schema metadata
pub mod fetcher;

/// Host-facing connector surface
pub mod connector;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use address::{FolderId, ResourceId};
pub use connector::{Capability, CheckResult, ConnectorSpec, GristConnector, Prepared};
pub use http::{NoopCache, RemoteClient, ResponseCache, TtlCache};
pub use progress::{LogProgress, ProgressSink};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
