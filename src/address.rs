//! Folder and resource identifier encoding
//!
//! Folder ids address a position in the organization/workspace/document tree
//! and must stay traversable: the id emitted at one level is fed back
//! unmodified to list the next. Resource ids address a single table and are
//! compact: exactly three pipe-separated fields.
//!
//! The two schemes are intentionally asymmetric: a document *folder* id
//! carries the full `/docs/{docId}` path segment, while a *resource* id
//! carries the bare document id.

use crate::error::{Error, Result};
use std::fmt;

/// Classified position in the resource tree.
///
/// An opaque folder id is parsed into one of these variants before any
/// dispatch happens; an id matching none of the recognized shapes is
/// rejected with [`Error::UnrecognizedFolderId`] instead of being routed
/// blindly to the table-listing branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderId {
    /// Empty id: list organizations
    Root,
    /// `/orgs/{orgId}`
    Organization(String),
    /// `/workspaces/{workspaceId}`
    Workspace(String),
    /// `{domain}|/docs/{docId}`. The domain rides along in the id because
    /// self-hosted deployments need it for org-scoped routing.
    Document {
        /// Tenant routing segment of the parent organization
        domain: String,
        /// Full `/docs/{docId}` path
        doc_path: String,
    },
}

impl FolderId {
    /// Classify an opaque folder id by its shape
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self::Root);
        }
        if let Some(org_id) = raw.strip_prefix("/orgs/") {
            return Ok(Self::Organization(org_id.to_string()));
        }
        if let Some(ws_id) = raw.strip_prefix("/workspaces/") {
            return Ok(Self::Workspace(ws_id.to_string()));
        }
        if let Some((domain, doc_path)) = raw.split_once('|') {
            return Ok(Self::Document {
                domain: domain.to_string(),
                doc_path: doc_path.to_string(),
            });
        }
        Err(Error::unrecognized_folder(raw))
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => Ok(()),
            Self::Organization(id) => write!(f, "/orgs/{id}"),
            Self::Workspace(id) => write!(f, "/workspaces/{id}"),
            Self::Document { domain, doc_path } => write!(f, "{domain}|{doc_path}"),
        }
    }
}

/// Fully qualified table address: `{domain}|{docId}|{tableId}`.
///
/// `doc_id` carries no `/docs/` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    /// Tenant routing segment
    pub domain: String,
    /// Bare document id
    pub doc_id: String,
    /// Table id, also used as the download file stem
    pub table_id: String,
}

impl ResourceId {
    /// Create a resource id from its parts
    pub fn new(
        domain: impl Into<String>,
        doc_id: impl Into<String>,
        table_id: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            doc_id: doc_id.into(),
            table_id: table_id.into(),
        }
    }

    /// Parse a pipe-separated resource id. Anything other than exactly
    /// three components is a contract violation.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split('|').collect();
        match parts.as_slice() {
            [domain, doc_id, table_id] => Ok(Self::new(*domain, *doc_id, *table_id)),
            _ => Err(Error::invalid_resource_id(raw)),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.domain, self.doc_id, self.table_id)
    }
}
