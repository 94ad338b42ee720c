use actix_multipart::form::tempfile::TempFile;
use serde::Deserialize;

use crate::{errors::AppError, use_cases::uploads::UploadFile};

/// `?confirm=true` must accompany every destructive request.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub confirm: bool,
}

impl DeleteConfirmation {
    pub fn require(&self) -> Result<(), AppError> {
        if self.confirm {
            Ok(())
        } else {
            Err(AppError::InvalidInput(
                "Deletion must be confirmed with ?confirm=true".to_string(),
            ))
        }
    }
}

/// Reads a spooled multipart file into memory for the uploader.
pub async fn read_temp_file(file: TempFile) -> Result<UploadFile, AppError> {
    let bytes = tokio::fs::read(file.file.path()).await?;

    Ok(UploadFile {
        file_name: file.file_name,
        content_type: file.content_type.map(|mime| mime.to_string()),
        bytes,
    })
}
