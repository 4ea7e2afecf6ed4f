//! Remote service payloads and domain-aware routing
//!
//! # Overview
//!
//! `models` mirrors the JSON the Grist API returns at each level of the
//! tree; unknown fields are ignored. `routes` builds every URL the
//! connector touches, applying the SaaS-vs-self-hosted routing rule in one
//! place.

mod models;
mod routes;

pub use models::{
    Document, DocumentMeta, FieldList, Organization, Owner, RawField, SchemaDialect, Table,
    TableSchemaPayload, TablesResponse, Workspace, WorkspaceRef, WorkspaceSummary,
};
pub use routes::{Routes, DEFAULT_SAAS_HOST};

#[cfg(test)]
mod tests;
