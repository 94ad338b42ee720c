use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::CERTIFICATES_FOLDER,
    entities::certificate::{Certificate, CertificatePatch, CertificateView, NewCertificateRequest, UpdateCertificateRequest},
    entities::validation::new_validation_error,
    errors::AppError,
    repositories::{certificate::CertificateRepository, resource::{ResourceRepository, UpdatableRepository}},
    use_cases::uploads::{FileUploader, UploadFile},
    utils::valid_uuid::valid_uuid,
};

pub struct CertificateHandler<R>
where
    R: CertificateRepository + ?Sized,
{
    pub certificate_repo: Arc<R>,
}

impl<R> CertificateHandler<R>
where
    R: CertificateRepository + ?Sized,
{
    pub fn new(certificate_repo: Arc<R>) -> Self {
        CertificateHandler { certificate_repo }
    }

    /// Issue date descending (undated last), each tagged image or document.
    pub async fn list_public(&self) -> Result<Vec<CertificateView>, AppError> {
        let certificates = self.certificate_repo.list().await?;
        Ok(certificates.iter().map(CertificateView::from).collect())
    }

    pub async fn list_admin(&self) -> Result<Vec<Certificate>, AppError> {
        self.certificate_repo.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Certificate, AppError> {
        let valid_id = valid_uuid(id)?;
        self.certificate_repo.get(valid_id).await.into_result("Certificate")
    }

    /// Creates a certificate pointing at an already hosted file.
    pub async fn create(&self, request: NewCertificateRequest) -> Result<Certificate, AppError> {
        let request = request.normalized();
        request.validate()?;

        let Some(file_url) = request.file_url.clone() else {
            let mut errors = validator::ValidationErrors::new();
            errors.add("file_url", new_validation_error("required", "A file or file URL is required"));
            return Err(errors.into());
        };

        self.certificate_repo.insert(&request.into_insert(file_url)).await
    }

    /// Uploads the certificate file, then records it. The upload is undone
    /// when the row cannot be written.
    pub async fn create_with_file(
        &self,
        request: NewCertificateRequest,
        file: UploadFile,
        uploader: &FileUploader,
    ) -> Result<Certificate, AppError> {
        let request = request.normalized();
        request.validate()?;

        let repo = Arc::clone(&self.certificate_repo);
        uploader
            .upload_then_insert(uploader.files_bucket(), CERTIFICATES_FOLDER, file, |url| async move {
                repo.insert(&request.into_insert(url)).await
            })
            .await
    }

    pub async fn update(&self, id: &str, request: UpdateCertificateRequest) -> Result<Certificate, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;
        self.certificate_repo.update(valid_id, &CertificatePatch::from(request)).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.certificate_repo.delete(valid_id).await
    }
}
