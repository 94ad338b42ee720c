use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::CV_FOLDER,
    entities::cv_file::{CvFile, CvFileInsert, NewCvFileRequest},
    errors::AppError,
    repositories::{cv_file::CvFileRepository, resource::ResourceRepository},
    use_cases::uploads::{FileUploader, UploadFile},
    utils::valid_uuid::valid_uuid,
};

pub struct CvHandler<R>
where
    R: CvFileRepository + ?Sized,
{
    pub cv_repo: Arc<R>,
}

impl<R> CvHandler<R>
where
    R: CvFileRepository + ?Sized,
{
    pub fn new(cv_repo: Arc<R>) -> Self {
        CvHandler { cv_repo }
    }

    pub async fn list(&self) -> Result<Vec<CvFile>, AppError> {
        self.cv_repo.list().await
    }

    pub async fn upload(
        &self,
        request: NewCvFileRequest,
        file: UploadFile,
        uploader: &FileUploader,
    ) -> Result<CvFile, AppError> {
        request.validate()?;

        let repo = Arc::clone(&self.cv_repo);
        let title = request.title.trim().to_string();
        uploader
            .upload_then_insert(uploader.files_bucket(), CV_FOLDER, file, |file_url| async move {
                repo.insert(&CvFileInsert { title, file_url }).await
            })
            .await
    }

    /// Removes the record only; the stored blob stays where it is.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.cv_repo.delete(valid_id).await
    }
}
