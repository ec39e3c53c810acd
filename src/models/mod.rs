use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// A single PutObject call.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub bucket_name: String,
    pub object_key: String,
    pub source_path: PathBuf,
    pub content_type: String,
}

/// One entry of a ListObjectsV2 `Contents` list.
///
/// Every field is rendered, absent ones as `null`, so the printed summary
/// carries everything the endpoint sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectSummary {
    pub checksum_algorithm: Vec<String>,
    #[serde(rename = "ETag")]
    pub e_tag: Option<String>,
    pub key: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub owner: Option<ObjectOwner>,
    pub restore_status: Option<RestoreStatus>,
    pub size: Option<i64>,
    pub storage_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectOwner {
    pub display_name: Option<String>,
    #[serde(rename = "ID")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreStatus {
    pub is_restore_in_progress: Option<bool>,
    pub restore_expiry_date: Option<DateTime<Utc>>,
}

/// First page of a bucket listing, in the order the endpoint returned it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectListing {
    pub objects: Vec<ObjectSummary>,
    /// Set when the endpoint had more keys than fit in one response.
    pub is_truncated: bool,
}

impl ObjectListing {
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
