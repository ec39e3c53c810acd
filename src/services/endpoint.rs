pub const R2_DOMAIN: &str = "r2.cloudflarestorage.com";

/// Maps an account identifier to the base URL of its S3 endpoint.
pub trait EndpointResolver: Send + Sync {
    fn resolve(&self, account_id: &str) -> String;
}

impl<F> EndpointResolver for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn resolve(&self, account_id: &str) -> String {
        self(account_id)
    }
}

/// Cloudflare R2: `https://{account_id}.r2.cloudflarestorage.com`
#[derive(Debug, Clone, Copy, Default)]
pub struct R2Endpoint;

impl EndpointResolver for R2Endpoint {
    fn resolve(&self, account_id: &str) -> String {
        format!("https://{}.{}", account_id, R2_DOMAIN)
    }
}
