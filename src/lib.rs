pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

pub use crate::config::StorageConfig;
pub use crate::error::{ConfigError, ListError, RunError, UploadError};
pub use crate::services::endpoint::{EndpointResolver, R2Endpoint};
pub use crate::services::runner::{ErrorPolicy, run};
pub use crate::services::storage::{ObjectStore, StorageClient};
