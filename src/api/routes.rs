//! URL construction with domain-aware routing
//!
//! On the service's default SaaS domain the API lives under `{base}/api`.
//! Self-hosted and multi-tenant deployments route document-level calls
//! through an org-scoped path segment: `{base}/o/{domain}/api`. The domain
//! is carried end-to-end from the first organization listing through to
//! the final download URL.

use crate::address::ResourceId;
use crate::error::Result;
use url::Url;

/// Root domain of the SaaS deployment
pub const DEFAULT_SAAS_HOST: &str = "getgrist.com";

/// URL builder bound to one base URL
#[derive(Debug, Clone)]
pub struct Routes {
    base: String,
    saas: bool,
}

impl Routes {
    /// Parse and validate the base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)?;
        let saas = parsed.host_str().is_some_and(|host| {
            host == DEFAULT_SAAS_HOST || host.ends_with(&format!(".{DEFAULT_SAAS_HOST}"))
        });

        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            saas,
        })
    }

    /// The trimmed base URL
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Whether the base URL is on the default SaaS domain
    pub fn is_saas(&self) -> bool {
        self.saas
    }

    /// API root for document-level calls, org-scoped off the SaaS domain
    fn api_root(&self, domain: &str) -> String {
        if self.saas {
            format!("{}/api", self.base)
        } else {
            format!("{}/o/{domain}/api", self.base)
        }
    }

    // ------------------------------------------------------------------
    // Tree listing endpoints
    // ------------------------------------------------------------------

    /// `/api/orgs`
    pub fn orgs(&self) -> String {
        format!("{}/api/orgs", self.base)
    }

    /// `/api/orgs/{id}`
    pub fn org(&self, org_id: &str) -> String {
        format!("{}/api/orgs/{org_id}", self.base)
    }

    /// `/api/orgs/{id}/workspaces`
    pub fn org_workspaces(&self, org_id: &str) -> String {
        format!("{}/api/orgs/{org_id}/workspaces", self.base)
    }

    /// `/api/workspaces/{id}`
    pub fn workspace(&self, workspace_id: &str) -> String {
        format!("{}/api/workspaces/{workspace_id}", self.base)
    }

    /// `/api/docs/{id}/tables`, org-scoped off the SaaS domain.
    /// `doc_path` is the full `/docs/{docId}` segment from the folder id.
    pub fn doc_tables(&self, domain: &str, doc_path: &str) -> String {
        format!("{}{doc_path}/tables", self.api_root(domain))
    }

    /// `/api/docs/{id}`, org-scoped off the SaaS domain
    pub fn doc_meta(&self, domain: &str, doc_path: &str) -> String {
        format!("{}{doc_path}", self.api_root(domain))
    }

    // ------------------------------------------------------------------
    // Download endpoints
    // ------------------------------------------------------------------

    /// Streaming CSV download for one table
    pub fn download_csv(&self, id: &ResourceId) -> String {
        format!(
            "{}/docs/{}/download/csv?tableId={}",
            self.api_root(&id.domain),
            id.doc_id,
            id.table_id
        )
    }

    /// Table-schema metadata for one table
    pub fn table_schema(&self, id: &ResourceId) -> String {
        format!(
            "{}/docs/{}/download/table-schema?tableId={}",
            self.api_root(&id.domain),
            id.doc_id,
            id.table_id
        )
    }

    /// Stable human-followable link back to the source document
    pub fn origin(&self, id: &ResourceId) -> String {
        if self.saas {
            format!("{}/{}", self.base, id.doc_id)
        } else {
            format!("{}/o/{}/{}", self.base, id.domain, id.doc_id)
        }
    }
}
