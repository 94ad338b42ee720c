use std::{future::Future, path::Path, sync::Arc};

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::{errors::AppError, storage::ObjectStorage};

const FALLBACK_EXTENSION: &str = "bin";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A file received from a client, already read into memory.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoredObject {
    pub bucket: String,
    pub path: String,
    pub public_url: String,
    pub content_type: String,
}

/// Puts client files into object storage under collision-resistant names.
#[derive(Clone)]
pub struct FileUploader {
    storage: Arc<dyn ObjectStorage>,
    images_bucket: String,
    files_bucket: String,
}

impl FileUploader {
    pub fn new(storage: Arc<dyn ObjectStorage>, images_bucket: String, files_bucket: String) -> Self {
        FileUploader {
            storage,
            images_bucket,
            files_bucket,
        }
    }

    pub fn images_bucket(&self) -> &str {
        &self.images_bucket
    }

    pub fn files_bucket(&self) -> &str {
        &self.files_bucket
    }

    /// Stores the file at `{folder}/{unix_millis}-{8 hex}.{ext}` and returns its public URL.
    pub async fn upload(&self, bucket: &str, folder: &str, file: UploadFile) -> Result<StoredObject, AppError> {
        if file.bytes.is_empty() {
            return Err(AppError::InvalidInput("Uploaded file is empty".into()));
        }

        let path = object_path(folder, file.file_name.as_deref());
        let content_type = detect_content_type(&file.bytes, file.content_type.as_deref());

        self.storage
            .upload(bucket, &path, file.bytes, &content_type)
            .await
            .inspect_err(|e| tracing::error!(bucket, path = %path, "Upload failed: {}", e))?;

        let public_url = self.storage.public_url(bucket, &path);
        tracing::info!(bucket, path = %path, content_type = %content_type, "File uploaded");

        Ok(StoredObject {
            bucket: bucket.to_string(),
            path,
            public_url,
            content_type,
        })
    }

    /// Uploads, then runs `insert` with the public URL. When the insert fails
    /// the blob is removed again and the insert's error is returned.
    ///
    /// `insert` must do nothing but the write: any error it returns is taken
    /// to mean no row references the blob.
    pub async fn upload_then_insert<T, F, Fut>(
        &self,
        bucket: &str,
        folder: &str,
        file: UploadFile,
        insert: F,
    ) -> Result<T, AppError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let stored = self.upload(bucket, folder, file).await?;

        match insert(stored.public_url.clone()).await {
            Ok(value) => Ok(value),
            Err(insert_error) => {
                tracing::warn!(path = %stored.path, "Metadata insert failed, removing uploaded blob");
                if let Err(remove_error) = self.storage.remove(&stored.bucket, &stored.path).await {
                    tracing::error!(
                        path = %stored.path,
                        "Failed to remove orphaned blob: {}",
                        remove_error
                    );
                }
                Err(insert_error)
            }
        }
    }
}

pub fn object_path(folder: &str, file_name: Option<&str>) -> String {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(8).collect();
    format!(
        "{}/{}-{}.{}",
        folder.trim_matches('/'),
        Utc::now().timestamp_millis(),
        suffix,
        file_extension(file_name)
    )
}

/// Lower-cased extension of the original name, `bin` when there is none.
pub fn file_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

/// Magic bytes first, then what the client declared.
pub fn detect_content_type(bytes: &[u8], declared: Option<&str>) -> String {
    infer::get(bytes)
        .map(|kind| kind.mime_type().to_string())
        .or_else(|| {
            declared
                .map(str::trim)
                .filter(|ct| !ct.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn path_has_folder_timestamp_suffix_and_extension() {
        let path = object_path("blog-covers", Some("Holiday Photo.JPG"));
        let (folder, name) = path.split_once('/').unwrap();
        assert_eq!(folder, "blog-covers");

        let (stem, ext) = name.rsplit_once('.').unwrap();
        assert_eq!(ext, "jpg");

        let (millis, suffix) = stem.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn missing_extension_falls_back_to_bin() {
        assert_eq!(file_extension(None), "bin");
        assert_eq!(file_extension(Some("README")), "bin");
        assert_eq!(file_extension(Some("cv.PDF")), "pdf");
    }

    #[test]
    fn sniffed_type_beats_declared_type() {
        assert_eq!(detect_content_type(&PNG_HEADER, Some("application/pdf")), "image/png");
        assert_eq!(detect_content_type(b"plain words", Some("text/plain")), "text/plain");
        assert_eq!(detect_content_type(b"plain words", None), "application/octet-stream");
    }
}
