//! Resource Fetcher
//!
//! Given a fully qualified table identifier, streams the table to a CSV
//! file in the caller-provided scratch directory and attaches schema
//! metadata from the table-schema endpoint. CSV bytes pass through
//! unmodified.
//!
//! Any non-200 response, transport failure or write failure aborts the
//! whole operation with the generic translated error. Partial downloads
//! are left on disk; the scratch directory's lifecycle belongs to the
//! caller.

use crate::address::ResourceId;
use crate::api::{Routes, TableSchemaPayload};
use crate::error::{Error, Result};
use crate::http::RemoteClient;
use crate::progress::{ProgressSink, Throttle, REPORT_INTERVAL};
use crate::schema;
use crate::types::ResourceDescriptor;
use bytes::Bytes;
use futures::StreamExt;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Download `resource_id` as CSV into `scratch_dir` and build its
/// descriptor.
pub async fn fetch_resource(
    client: &RemoteClient,
    routes: &Routes,
    resource_id: &str,
    scratch_dir: &Path,
    progress: &dyn ProgressSink,
) -> Result<ResourceDescriptor> {
    let id = ResourceId::parse(resource_id)?;
    let file_path = scratch_dir.join(format!("{}.csv", id.table_id));

    download_csv(client, &routes.download_csv(&id), &file_path, progress).await?;

    // Size comes from the file on disk, not the transfer counter
    let size = fs::metadata(&file_path)
        .await
        .map_err(|e| write_failed(&file_path, &e))?
        .len();

    let payload: TableSchemaPayload = client.get_typed(&routes.table_schema(&id)).await?;

    Ok(ResourceDescriptor {
        id: payload.name.clone().unwrap_or_else(|| id.table_id.clone()),
        title: payload.title.clone().unwrap_or_else(|| id.table_id.clone()),
        origin: routes.origin(&id),
        size,
        mime_type: "text/csv".to_string(),
        format: "csv".to_string(),
        path: file_path,
        schema: schema::fields_from_payload(&payload),
    })
}

/// Stream the response body to `dest`, reporting accumulated bytes at
/// most every [`REPORT_INTERVAL`] and once on completion.
async fn download_csv(
    client: &RemoteClient,
    url: &str,
    dest: &Path,
    progress: &dyn ProgressSink,
) -> Result<u64> {
    let response = client.get_stream(url).await?;

    let mut file = fs::File::create(dest)
        .await
        .map_err(|e| write_failed(dest, &e))?;

    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;
    let mut throttle = Throttle::new(REPORT_INTERVAL);

    while let Some(chunk) = stream.next().await {
        let chunk: Bytes = chunk.map_err(|e| {
            warn!("GET {url}: body stream failed: {e}");
            Error::FetchFailed
        })?;
        file.write_all(&chunk)
            .await
            .map_err(|e| write_failed(dest, &e))?;
        written += chunk.len() as u64;

        if throttle.ready() {
            progress.on_progress(written);
        }
    }

    file.flush().await.map_err(|e| write_failed(dest, &e))?;
    progress.on_complete(written);
    debug!("wrote {written} bytes to {}", dest.display());

    Ok(written)
}

fn write_failed(dest: &Path, e: &std::io::Error) -> Error {
    warn!("writing {} failed: {e}", dest.display());
    Error::FetchFailed
}
