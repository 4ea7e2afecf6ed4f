//! Listing and resource descriptor types
//!
//! These are the shapes handed back to the catalog host: folder/resource
//! listings with breadcrumbs, and the descriptor of a downloaded table.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Entry Type
// ============================================================================

/// Kind of a listing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// A navigable node of the organization/workspace/document tree
    Folder,
    /// A downloadable table
    Resource,
}

// ============================================================================
// Breadcrumbs
// ============================================================================

/// One ancestor in the breadcrumb path, root first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    /// Folder identifier, accepted unmodified as a `currentFolderId`
    pub id: String,
    /// Display name
    pub title: String,
    /// Always [`EntryType::Folder`]
    #[serde(rename = "type")]
    pub kind: EntryType,
}

impl PathSegment {
    /// Create a breadcrumb segment
    pub fn folder(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: EntryType::Folder,
        }
    }
}

// ============================================================================
// Listing
// ============================================================================

/// A single child of the current folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Folder or resource identifier
    pub id: String,
    /// Display name
    pub title: String,
    /// Entry kind
    #[serde(rename = "type")]
    pub kind: EntryType,
    /// Download format, present on resources only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ListingEntry {
    /// Create a folder entry
    pub fn folder(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: EntryType::Folder,
            format: None,
        }
    }

    /// Create a CSV resource entry
    pub fn csv_resource(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: EntryType::Resource,
            format: Some("csv".to_string()),
        }
    }
}

/// One level of the tree: children of the current folder plus the
/// breadcrumb path from the root down to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Number of result entries. Never counts the path.
    pub count: usize,
    /// Folders and resources at this level
    pub results: Vec<ListingEntry>,
    /// Ancestors from root to the current folder
    pub path: Vec<PathSegment>,
}

impl Listing {
    /// Build a listing; `count` is derived from `results`
    pub fn new(results: Vec<ListingEntry>, path: Vec<PathSegment>) -> Self {
        Self {
            count: results.len(),
            results,
            path,
        }
    }
}

// ============================================================================
// Resource Descriptor
// ============================================================================

/// Field-level metadata attached to a downloaded table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Lowercase ASCII slug of the source column name
    pub key: String,
    /// Display title
    pub title: String,
    /// Pass-through description from the source schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value separator, populated only for array-typed columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

/// A downloaded table, ready for the host to import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Resource id derived from the table schema (falls back to the table id)
    pub id: String,
    /// Display title
    pub title: String,
    /// Human-followable link back to the source document
    pub origin: String,
    /// Byte length of the downloaded file on disk
    pub size: u64,
    /// Always `text/csv`
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Always `csv`
    pub format: String,
    /// Location of the downloaded file inside the scratch directory
    pub path: PathBuf,
    /// Field-level metadata
    pub schema: Vec<SchemaField>,
}
