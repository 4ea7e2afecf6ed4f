//! Payload shapes returned by the remote service
//!
//! Only the fields the connector reads are modeled; everything else in the
//! responses is ignored.

use serde::Deserialize;

// ============================================================================
// Tree payloads
// ============================================================================

/// Owner of a personal organization
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    /// Display name used to disambiguate "Personal" organizations
    pub name: String,
}

/// An organization, as returned by `/api/orgs` and `/api/orgs/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    /// Tenant routing segment; carried into document folder ids
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
}

/// A workspace as listed under an organization
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceSummary {
    pub id: i64,
    pub name: String,
}

/// A workspace lookup (`/api/workspaces/{id}`), including its documents
/// and parent organization
#[derive(Debug, Clone, Deserialize)]
pub struct Workspace {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub docs: Vec<Document>,
    pub org: Organization,
}

/// A document inside a workspace
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
}

/// Document metadata lookup (`/api/docs/{id}`), embedding the workspace
/// and that workspace's organization. Breadcrumbs are rebuilt from this.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentMeta {
    pub name: String,
    pub workspace: WorkspaceRef,
}

/// Parent workspace embedded in a document lookup
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceRef {
    pub id: i64,
    pub name: String,
    pub org: Organization,
}

// ============================================================================
// Table payloads
// ============================================================================

/// Response of `/api/docs/{id}/tables`
#[derive(Debug, Clone, Deserialize)]
pub struct TablesResponse {
    #[serde(default)]
    pub tables: Vec<Table>,
}

/// A single table of a document
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    pub id: String,
}

/// Response of `/api/docs/{id}/download/table-schema`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableSchemaPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub schema: FieldList,
    #[serde(default)]
    pub dialect: Option<SchemaDialect>,
}

/// Field list wrapper inside the table-schema payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldList {
    #[serde(default)]
    pub fields: Vec<RawField>,
}

/// CSV dialect description
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDialect {
    #[serde(default)]
    pub delimiter: Option<String>,
}

/// A single column description from the source schema
#[derive(Debug, Clone, Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
