use async_trait::async_trait;

use crate::errors::AppError;

pub mod s3;

/// Blob storage with publicly readable buckets.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `content` under `path` inside `bucket`.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), AppError>;

    /// URL a browser can fetch the object from. Pure, performs no I/O.
    fn public_url(&self, bucket: &str, path: &str) -> String;

    async fn remove(&self, bucket: &str, path: &str) -> Result<(), AppError>;
}

/// `{base}/{bucket}/{path}` with exactly one slash at each join.
pub fn join_public_url(base: &str, bucket: &str, path: &str) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        bucket.trim_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_double_slashes() {
        assert_eq!(
            join_public_url("https://cdn.test/public/", "/images/", "/blog-covers/a.png"),
            "https://cdn.test/public/images/blog-covers/a.png"
        );
    }
}
