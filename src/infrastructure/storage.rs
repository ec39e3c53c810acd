use crate::config::StorageConfig;
use crate::services::endpoint::EndpointResolver;
use crate::services::storage::{S3ObjectStore, StorageClient};
use aws_config::retry::RetryConfig;
use aws_sdk_s3::config::{Credentials, Region};
use std::sync::Arc;
use tracing::info;

/// R2 ignores the region but the signer still needs one.
pub const REGION_SENTINEL: &str = "auto";

pub async fn setup_storage(
    config: &StorageConfig,
    resolver: &dyn EndpointResolver,
) -> StorageClient {
    let endpoint_url = resolver.resolve(&config.account_id);

    info!(
        "☁️  S3 Storage: {} (Bucket: {})",
        endpoint_url, config.bucket_name
    );

    let aws_config = aws_config::from_env()
        .endpoint_url(&endpoint_url)
        .region(Region::new(REGION_SENTINEL))
        // failures surface to the caller on the first attempt
        .retry_config(RetryConfig::disabled())
        .credentials_provider(Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "static",
        ))
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(true)
        .build();

    let s3_client = aws_sdk_s3::Client::from_conf(s3_config);
    StorageClient::new(endpoint_url, Arc::new(S3ObjectStore::new(s3_client)))
}
