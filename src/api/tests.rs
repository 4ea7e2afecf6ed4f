//! Tests for payload models and routing

use super::*;
use crate::address::ResourceId;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_saas_detection() {
    assert!(Routes::new("https://docs.getgrist.com").unwrap().is_saas());
    assert!(Routes::new("https://getgrist.com").unwrap().is_saas());
    assert!(!Routes::new("https://grist.example.com").unwrap().is_saas());
    // Look-alike host must not match
    assert!(!Routes::new("https://notgetgrist.com").unwrap().is_saas());
}

#[test]
fn test_listing_urls() {
    let routes = Routes::new("https://grist.example.com/").unwrap();
    assert_eq!(routes.orgs(), "https://grist.example.com/api/orgs");
    assert_eq!(routes.org("2"), "https://grist.example.com/api/orgs/2");
    assert_eq!(
        routes.org_workspaces("2"),
        "https://grist.example.com/api/orgs/2/workspaces"
    );
    assert_eq!(
        routes.workspace("7"),
        "https://grist.example.com/api/workspaces/7"
    );
}

#[test]
fn test_doc_urls_are_org_scoped_off_saas() {
    let saas = Routes::new("https://docs.getgrist.com").unwrap();
    assert_eq!(
        saas.doc_tables("acme", "/docs/d1"),
        "https://docs.getgrist.com/api/docs/d1/tables"
    );

    let hosted = Routes::new("https://grist.example.com").unwrap();
    assert_eq!(
        hosted.doc_tables("acme", "/docs/d1"),
        "https://grist.example.com/o/acme/api/docs/d1/tables"
    );
    assert_eq!(
        hosted.doc_meta("acme", "/docs/d1"),
        "https://grist.example.com/o/acme/api/docs/d1"
    );
}

#[test]
fn test_download_urls() {
    let id = ResourceId::new("org-1", "d1", "Table1");

    let saas = Routes::new("https://docs.getgrist.com").unwrap();
    assert_eq!(
        saas.download_csv(&id),
        "https://docs.getgrist.com/api/docs/d1/download/csv?tableId=Table1"
    );
    assert_eq!(
        saas.table_schema(&id),
        "https://docs.getgrist.com/api/docs/d1/download/table-schema?tableId=Table1"
    );

    let hosted = Routes::new("https://grist.example.com").unwrap();
    assert_eq!(
        hosted.download_csv(&id),
        "https://grist.example.com/o/org-1/api/docs/d1/download/csv?tableId=Table1"
    );
}

#[test]
fn test_origin_link() {
    let id = ResourceId::new("org-1", "d1", "Table1");

    let saas = Routes::new("https://docs.getgrist.com").unwrap();
    assert_eq!(saas.origin(&id), "https://docs.getgrist.com/d1");

    let hosted = Routes::new("https://grist.example.com").unwrap();
    assert_eq!(hosted.origin(&id), "https://grist.example.com/o/org-1/d1");
}

#[test]
fn test_invalid_base_url_rejected() {
    assert!(Routes::new("not a url").is_err());
}

#[test]
fn test_organization_deserialization() {
    let org: Organization = serde_json::from_value(json!({
        "id": 1,
        "name": "Personal",
        "domain": "docs-1",
        "owner": {"id": 10, "name": "UserTest"},
        "access": "owners"
    }))
    .unwrap();

    assert_eq!(org.id, 1);
    assert_eq!(org.name, "Personal");
    assert_eq!(org.domain.as_deref(), Some("docs-1"));
    assert_eq!(org.owner.unwrap().name, "UserTest");
}

#[test]
fn test_workspace_deserialization() {
    let ws: Workspace = serde_json::from_value(json!({
        "id": 7,
        "name": "Main",
        "docs": [{"id": "d1", "name": "Budget", "isPinned": false}],
        "org": {"id": 2, "name": "orgaTest", "domain": "org-2"}
    }))
    .unwrap();

    assert_eq!(ws.docs.len(), 1);
    assert_eq!(ws.docs[0].id, "d1");
    assert_eq!(ws.org.domain.as_deref(), Some("org-2"));
}

#[test]
fn test_table_schema_payload_defaults() {
    let payload: TableSchemaPayload = serde_json::from_value(json!({})).unwrap();
    assert!(payload.name.is_none());
    assert!(payload.title.is_none());
    assert!(payload.schema.fields.is_empty());
    assert!(payload.dialect.is_none());
}
