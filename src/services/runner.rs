use crate::error::RunError;
use crate::models::{ObjectListing, UploadRequest};
use crate::services::storage::StorageClient;
use crate::utils::output::{self, LISTING_MARKER, START_MARKER};
use std::io::Write;
use tracing::{error, info};

/// What to do when the upload fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log the upload failure and go on to list the bucket.
    #[default]
    BestEffort,
    /// Stop at the first failure.
    AbortOnFirstError,
}

/// Upload one file, then list and print the bucket.
///
/// A list failure always ends the run before anything else is written.
pub async fn run<W: Write>(
    client: &StorageClient,
    bucket: &str,
    upload: &UploadRequest,
    policy: ErrorPolicy,
    out: &mut W,
) -> Result<ObjectListing, RunError> {
    output::write_marker(out, START_MARKER)?;

    if let Err(e) = client.upload_object(upload).await {
        error!("❌ {}", e);
        if policy == ErrorPolicy::AbortOnFirstError {
            return Err(e.into());
        }
    }

    let listing = client.list_objects(bucket).await?;
    info!("📦 {} objects in '{}'", listing.len(), bucket);

    output::write_marker(out, LISTING_MARKER)?;
    output::render_listing(out, &listing)?;
    out.flush()?;

    Ok(listing)
}
