//! Resource Navigator
//!
//! Given an opaque current-folder id (or none), returns the next level of
//! the organization/workspace/document/table tree plus the breadcrumb path
//! from the root down to the current folder. Dispatch happens on the
//! classified [`FolderId`], never on raw string probing.
//!
//! Any remote lookup failure aborts the whole call; partial results are
//! never returned.

use crate::address::{FolderId, ResourceId};
use crate::api::{DocumentMeta, Organization, Routes, TablesResponse, Workspace, WorkspaceSummary};
use crate::error::Result;
use crate::http::RemoteClient;
use crate::types::{Listing, ListingEntry, PathSegment};
use tracing::debug;

/// Organization name the service uses for personal workspaces
const PERSONAL_ORG_NAME: &str = "Personal";

/// Display title of an organization. Personal organizations all share the
/// same sentinel name, so the owner is appended to keep them apart.
fn org_title(org: &Organization) -> String {
    match &org.owner {
        Some(owner) if org.name == PERSONAL_ORG_NAME => {
            format!("{} (@{})", org.name, owner.name)
        }
        _ => org.name.clone(),
    }
}

fn org_segment(org: &Organization) -> PathSegment {
    PathSegment::folder(format!("/orgs/{}", org.id), org_title(org))
}

/// List the children of `current_folder_id` (the root when `None`),
/// with a freshly built breadcrumb path.
pub async fn list_level(
    client: &RemoteClient,
    routes: &Routes,
    current_folder_id: Option<&str>,
) -> Result<Listing> {
    let folder = FolderId::parse(current_folder_id.unwrap_or_default())?;
    debug!("listing level for {folder:?}");

    match folder {
        FolderId::Root => list_organizations(client, routes).await,
        FolderId::Organization(org_id) => list_workspaces(client, routes, &org_id).await,
        FolderId::Workspace(workspace_id) => list_documents(client, routes, &workspace_id).await,
        FolderId::Document { domain, doc_path } => {
            list_tables(client, routes, &domain, &doc_path).await
        }
    }
}

/// Root level: one folder per organization, empty path
async fn list_organizations(client: &RemoteClient, routes: &Routes) -> Result<Listing> {
    let orgs: Vec<Organization> = client.get_typed(&routes.orgs()).await?;

    let results = orgs
        .iter()
        .map(|org| ListingEntry::folder(format!("/orgs/{}", org.id), org_title(org)))
        .collect();

    Ok(Listing::new(results, Vec::new()))
}

/// Organization level: one folder per workspace, one-element path
async fn list_workspaces(client: &RemoteClient, routes: &Routes, org_id: &str) -> Result<Listing> {
    let workspaces: Vec<WorkspaceSummary> =
        client.get_typed(&routes.org_workspaces(org_id)).await?;
    // Separate lookup of the organization itself for the breadcrumb
    let org: Organization = client.get_typed(&routes.org(org_id)).await?;

    let results = workspaces
        .iter()
        .map(|ws| ListingEntry::folder(format!("/workspaces/{}", ws.id), ws.name.clone()))
        .collect();

    Ok(Listing::new(results, vec![org_segment(&org)]))
}

/// Workspace level: one folder per document, carrying the parent
/// organization's domain; two-element path
async fn list_documents(
    client: &RemoteClient,
    routes: &Routes,
    workspace_id: &str,
) -> Result<Listing> {
    let workspace: Workspace = client.get_typed(&routes.workspace(workspace_id)).await?;
    let domain = workspace.org.domain.clone().unwrap_or_default();

    let results = workspace
        .docs
        .iter()
        .map(|doc| ListingEntry::folder(format!("{domain}|/docs/{}", doc.id), doc.name.clone()))
        .collect();

    let path = vec![
        org_segment(&workspace.org),
        PathSegment::folder(format!("/workspaces/{}", workspace.id), workspace.name),
    ];

    Ok(Listing::new(results, path))
}

/// Document level: one resource per table; three-element path rebuilt
/// from the document-metadata lookup
async fn list_tables(
    client: &RemoteClient,
    routes: &Routes,
    domain: &str,
    doc_path: &str,
) -> Result<Listing> {
    let tables: TablesResponse = client
        .get_typed(&routes.doc_tables(domain, doc_path))
        .await?;

    // Resource ids carry the bare document id, without the /docs/ prefix
    let doc_id = doc_path.strip_prefix("/docs/").unwrap_or(doc_path);

    let results = tables
        .tables
        .iter()
        .map(|table| {
            let id = ResourceId::new(domain, doc_id, table.id.clone());
            ListingEntry::csv_resource(id.to_string(), table.id.clone())
        })
        .collect();

    let meta: DocumentMeta = client.get_typed(&routes.doc_meta(domain, doc_path)).await?;
    let path = vec![
        org_segment(&meta.workspace.org),
        PathSegment::folder(
            format!("/workspaces/{}", meta.workspace.id),
            meta.workspace.name,
        ),
        PathSegment::folder(format!("{domain}|{doc_path}"), meta.name),
    ];

    Ok(Listing::new(results, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Owner;

    fn org(name: &str, owner: Option<&str>) -> Organization {
        Organization {
            id: 1,
            name: name.to_string(),
            domain: Some("docs-1".to_string()),
            owner: owner.map(|n| Owner {
                name: n.to_string(),
            }),
        }
    }

    #[test]
    fn test_personal_org_title_carries_owner() {
        assert_eq!(
            org_title(&org("Personal", Some("UserTest"))),
            "Personal (@UserTest)"
        );
    }

    #[test]
    fn test_named_org_title_is_bare() {
        assert_eq!(org_title(&org("orgaTest", Some("UserTest"))), "orgaTest");
        assert_eq!(org_title(&org("orgaTest", None)), "orgaTest");
    }

    #[test]
    fn test_personal_org_without_owner_stays_bare() {
        assert_eq!(org_title(&org("Personal", None)), "Personal");
    }

    #[test]
    fn test_org_segment_shape() {
        let segment = org_segment(&org("orgaTest", None));
        assert_eq!(segment.id, "/orgs/1");
        assert_eq!(segment.title, "orgaTest");
    }
}
