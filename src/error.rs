use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load env: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Missing environment variable: {name}")]
    MissingVar { name: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadErrorKind {
    FileNotFound,
    FileUnreadable,
    RemoteRejected,
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Couldn't open file: {} not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Couldn't open file: {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Couldn't upload file to S3: {0}")]
    RemoteRejected(#[source] anyhow::Error),
}

impl UploadError {
    pub fn kind(&self) -> UploadErrorKind {
        match self {
            UploadError::FileNotFound { .. } => UploadErrorKind::FileNotFound,
            UploadError::FileUnreadable { .. } => UploadErrorKind::FileUnreadable,
            UploadError::RemoteRejected(_) => UploadErrorKind::RemoteRejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListErrorKind {
    RemoteRejected,
}

#[derive(Error, Debug)]
pub enum ListError {
    #[error("Failed to retrieve objects: {0}")]
    RemoteRejected(#[source] anyhow::Error),
}

impl ListError {
    pub fn kind(&self) -> ListErrorKind {
        match self {
            ListError::RemoteRejected(_) => ListErrorKind::RemoteRejected,
        }
    }
}

/// Failure of the upload-then-list sequence as a whole.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    List(#[from] ListError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
