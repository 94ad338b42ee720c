use async_trait::async_trait;
use aws_sdk_s3::{config::Region, primitives::ByteStream};

use crate::{errors::AppError, settings::AppConfig, storage::{join_public_url, ObjectStorage}};

/// S3-compatible object store (AWS, MinIO, LocalStack, Supabase storage).
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    public_base_url: String,
}

impl S3Storage {
    /// Credentials come from the standard AWS provider chain
    /// (`AWS_ACCESS_KEY_ID`, profiles, instance roles).
    pub async fn from_config(config: &AppConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.storage_region.clone()));

        if let Some(endpoint) = &config.storage_endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.storage_endpoint.is_some())
            .build();

        S3Storage::new(aws_sdk_s3::Client::from_conf(s3_config), config.storage_public_url.clone())
    }

    pub fn new(client: aws_sdk_s3::Client, public_base_url: String) -> Self {
        S3Storage { client, public_base_url }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), AppError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(path)
            .content_type(content_type)
            .cache_control("public, max-age=3600")
            .body(ByteStream::from(content))
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to put object '{}/{}': {}", bucket, path, e)))?;

        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        join_public_url(&self.public_base_url, bucket, path)
    }

    async fn remove(&self, bucket: &str, path: &str) -> Result<(), AppError> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(path)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to delete object '{}/{}': {}", bucket, path, e)))?;

        Ok(())
    }
}
