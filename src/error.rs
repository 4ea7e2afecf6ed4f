//! Error types for the Grist connector
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Remote failures are deliberately collapsed into the single generic
//! [`Error::FetchFailed`] kind: the upstream status/body is logged
//! server-side by the HTTP client and never surfaced to the caller.

use thiserror::Error;

/// The main error type for the Grist connector
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Connectivity Errors
    // ============================================================================
    #[error("Connection check failed: {message}")]
    ConnectionCheck { message: String },

    /// Generic translated failure for any non-200 or transport error during
    /// listing or download. The original error is logged, not propagated.
    #[error("failed to retrieve data from the remote service")]
    FetchFailed,

    // ============================================================================
    // Identifier Errors
    // ============================================================================
    #[error("Invalid resource identifier '{id}': expected domain|docId|tableId")]
    InvalidResourceId { id: String },

    #[error("Unrecognized folder identifier: '{id}'")]
    UnrecognizedFolderId { id: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a connection check error
    pub fn connection_check(message: impl Into<String>) -> Self {
        Self::ConnectionCheck {
            message: message.into(),
        }
    }

    /// Create an invalid resource id error
    pub fn invalid_resource_id(id: impl Into<String>) -> Self {
        Self::InvalidResourceId { id: id.into() }
    }

    /// Create an unrecognized folder id error
    pub fn unrecognized_folder(id: impl Into<String>) -> Self {
        Self::UnrecognizedFolderId { id: id.into() }
    }
}

/// Result type alias for the Grist connector
pub type Result<T> = std::result::Result<T, Error>;
