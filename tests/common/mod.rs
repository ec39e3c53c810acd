#![allow(dead_code)]

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use rust_r2_client::ObjectStore;
use rust_r2_client::models::{ObjectListing, ObjectSummary};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct StoredObject {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// In-memory store that records every call made against it.
pub struct MockObjectStore {
    pub files: Mutex<HashMap<String, StoredObject>>,
    pub put_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub put_error: Option<String>,
    pub list_error: Option<String>,
    pub listing: Vec<ObjectSummary>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            put_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            put_error: None,
            list_error: None,
            listing: Vec::new(),
        }
    }

    pub fn with_listing(mut self, listing: Vec<ObjectSummary>) -> Self {
        self.listing = listing;
        self
    }

    pub fn failing_put(mut self, message: &str) -> Self {
        self.put_error = Some(message.to_string());
        self
    }

    pub fn failing_list(mut self, message: &str) -> Self {
        self.list_error = Some(message.to_string());
        self
    }

    pub fn put_count(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: ByteStream,
        content_type: &str,
    ) -> anyhow::Result<()> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.put_error {
            return Err(anyhow::anyhow!("{}", message));
        }

        let data = body.collect().await?.into_bytes().to_vec();
        self.files.lock().unwrap().insert(
            format!("{}/{}", bucket, key),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn list_objects(&self, _bucket: &str) -> anyhow::Result<ObjectListing> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.list_error {
            return Err(anyhow::anyhow!("{}", message));
        }

        Ok(ObjectListing {
            objects: self.listing.clone(),
            is_truncated: false,
        })
    }
}

pub fn summary(key: &str, size: i64) -> ObjectSummary {
    ObjectSummary {
        key: Some(key.to_string()),
        size: Some(size),
        last_modified: chrono::DateTime::from_timestamp(1_700_000_000, 0),
        storage_class: Some("STANDARD".to_string()),
        ..ObjectSummary::default()
    }
}
