use crate::error::ConfigError;
use std::env;
use std::fmt;
use std::path::Path;

pub const DEFAULT_ENV_FILE: &str = ".env";

pub const BUCKET_VAR: &str = "BUCKET";
pub const ACCOUNT_ID_VAR: &str = "ACCOUNT_ID";
pub const ACCESS_KEY_VAR: &str = "KEY";
pub const SECRET_KEY_VAR: &str = "SECRET";

/// Connection settings for a single R2 bucket.
///
/// Values are taken verbatim from the environment. Nothing here checks that
/// the credentials are valid or that the account exists.
#[derive(Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Target bucket
    pub bucket_name: String,

    /// Cloudflare account identifier, used to derive the endpoint host
    pub account_id: String,

    /// R2 access key id
    pub access_key: String,

    /// R2 secret access key
    pub secret_key: String,
}

impl StorageConfig {
    /// Load the settings file into the process environment, then read the
    /// four required variables from it.
    pub fn load(env_file: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::from_filename(env_file.as_ref())?;
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the record from an arbitrary variable lookup.
    ///
    /// A variable that is not set fails the load. An empty value is kept as is.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| lookup(name).ok_or(ConfigError::MissingVar { name });

        Ok(Self {
            bucket_name: require(BUCKET_VAR)?,
            account_id: require(ACCOUNT_ID_VAR)?,
            access_key: require(ACCESS_KEY_VAR)?,
            secret_key: require(SECRET_KEY_VAR)?,
        })
    }
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("bucket_name", &self.bucket_name)
            .field("account_id", &self.account_id)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
