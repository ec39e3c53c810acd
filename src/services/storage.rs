use crate::error::{ListError, UploadError};
use crate::models::{ObjectListing, ObjectOwner, ObjectSummary, RestoreStatus, UploadRequest};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::Object;
use std::io;
use std::sync::Arc;
use tracing::{info, warn};

/// The two wire operations the client needs from an S3-compatible store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: ByteStream,
        content_type: &str,
    ) -> Result<()>;

    /// Single ListObjectsV2 request, no continuation.
    async fn list_objects(&self, bucket: &str) -> Result<ObjectListing>;
}

pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: ByteStream,
        content_type: &str,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await?;
        Ok(())
    }

    async fn list_objects(&self, bucket: &str) -> Result<ObjectListing> {
        let res = self.client.list_objects_v2().bucket(bucket).send().await?;

        Ok(ObjectListing {
            objects: res.contents().iter().map(summary_from_object).collect(),
            is_truncated: res.is_truncated().unwrap_or(false),
        })
    }
}

fn to_utc(d: &aws_sdk_s3::primitives::DateTime) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp(d.secs(), d.subsec_nanos())
}

fn summary_from_object(object: &Object) -> ObjectSummary {
    ObjectSummary {
        checksum_algorithm: object
            .checksum_algorithm()
            .iter()
            .map(|a| a.as_str().to_string())
            .collect(),
        e_tag: object.e_tag().map(str::to_string),
        key: object.key().map(str::to_string),
        last_modified: object.last_modified().and_then(to_utc),
        owner: object.owner().map(|o| ObjectOwner {
            display_name: o.display_name().map(str::to_string),
            id: o.id().map(str::to_string),
        }),
        restore_status: object.restore_status().map(|r| RestoreStatus {
            is_restore_in_progress: r.is_restore_in_progress(),
            restore_expiry_date: r.restore_expiry_date().and_then(to_utc),
        }),
        size: object.size(),
        storage_class: object.storage_class().map(|c| c.as_str().to_string()),
    }
}

/// Object operations against one resolved endpoint.
pub struct StorageClient {
    endpoint: String,
    store: Arc<dyn ObjectStore>,
}

impl StorageClient {
    pub fn new(endpoint: String, store: Arc<dyn ObjectStore>) -> Self {
        Self { endpoint, store }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Streams `source_path` to the store under `object_key`.
    ///
    /// The file is opened before any request is made, so a bad path never
    /// reaches the network. The handle lives inside the request body and is
    /// closed when the call returns, whatever the outcome.
    pub async fn upload_object(&self, request: &UploadRequest) -> Result<(), UploadError> {
        let path = &request.source_path;

        let file = tokio::fs::File::open(path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                UploadError::FileNotFound { path: path.clone() }
            } else {
                UploadError::FileUnreadable {
                    path: path.clone(),
                    source: e,
                }
            }
        })?;

        let unreadable = |source: io::Error| UploadError::FileUnreadable {
            path: path.clone(),
            source,
        };

        let metadata = file.metadata().await.map_err(unreadable)?;
        if metadata.is_dir() {
            return Err(unreadable(io::Error::other("is a directory")));
        }

        let body = ByteStream::read_from()
            .file(file)
            .build()
            .await
            .map_err(|e| unreadable(io::Error::other(e)))?;

        info!(
            "⬆️  Uploading {} ({} bytes) to {}/{}",
            path.display(),
            metadata.len(),
            request.bucket_name,
            request.object_key
        );

        self.store
            .put_object(
                &request.bucket_name,
                &request.object_key,
                body,
                &request.content_type,
            )
            .await
            .map_err(UploadError::RemoteRejected)?;

        info!("✅ Uploaded {}/{}", request.bucket_name, request.object_key);
        Ok(())
    }

    pub async fn list_objects(&self, bucket: &str) -> Result<ObjectListing, ListError> {
        let listing = self
            .store
            .list_objects(bucket)
            .await
            .map_err(ListError::RemoteRejected)?;

        let keyless = listing.objects.iter().filter(|o| o.key.is_none()).count();
        if keyless > 0 {
            warn!("⚠️  {} objects in '{}' came back without a key", keyless, bucket);
        }

        if listing.is_truncated {
            warn!(
                "⚠️  Bucket '{}' has more objects than one page; only the first {} are listed",
                bucket,
                listing.len()
            );
        }

        Ok(listing)
    }
}
