use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    entities::{option_fields::OptionField, validation::{blank_to_none, validate_not_blank, validate_url}},
    utils::file_kind::FileKind,
};

const MAX_TITLE_LENGTH: u64 = 200;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Certificate {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub issued_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CertificateInsert {
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub issued_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct CertificatePatch {
    pub title: Option<String>,
    pub description: OptionField<String>,
    pub file_url: Option<String>,
    pub issued_date: OptionField<NaiveDate>,
}

impl Certificate {
    pub fn from_insert(id: Uuid, insert: &CertificateInsert, created_at: DateTime<Utc>) -> Self {
        Certificate {
            id,
            title: insert.title.clone(),
            description: insert.description.clone(),
            file_url: insert.file_url.clone(),
            issued_date: insert.issued_date,
            created_at,
        }
    }

    pub fn apply(&mut self, patch: &CertificatePatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(file_url) = &patch.file_url {
            self.file_url = file_url.clone();
        }
        patch.description.apply_to(&mut self.description);
        patch.issued_date.apply_to(&mut self.issued_date);
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CertificateView {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_kind: FileKind,
    pub issued_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<&Certificate> for CertificateView {
    fn from(cert: &Certificate) -> Self {
        CertificateView {
            id: cert.id,
            title: cert.title.clone(),
            description: cert.description.clone(),
            file_url: cert.file_url.clone(),
            file_kind: FileKind::classify(&cert.file_url),
            issued_date: cert.issued_date,
            created_at: cert.created_at,
        }
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

/// `file_url` may be omitted when the file itself is sent as a multipart part.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCertificateRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be between 1 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    pub description: Option<String>,

    #[validate(url(message = "File URL must be a valid URL"))]
    pub file_url: Option<String>,

    pub issued_date: Option<NaiveDate>,
}

impl NewCertificateRequest {
    pub fn normalized(self) -> Self {
        NewCertificateRequest {
            title: self.title.trim().to_string(),
            description: blank_to_none(self.description),
            file_url: blank_to_none(self.file_url),
            issued_date: self.issued_date,
        }
    }

    pub fn into_insert(self, file_url: String) -> CertificateInsert {
        CertificateInsert {
            title: self.title,
            description: self.description,
            file_url,
            issued_date: self.issued_date,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_update_certificate"))]
pub struct UpdateCertificateRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,

    #[serde(default)]
    pub description: OptionField<String>,

    pub file_url: Option<String>,

    #[serde(default)]
    pub issued_date: OptionField<NaiveDate>,
}

fn validate_update_certificate(req: &UpdateCertificateRequest) -> Result<(), ValidationError> {
    if let Some(title) = req.title.as_deref() {
        validate_not_blank(title)?;
    }
    if let Some(file_url) = req.file_url.as_deref() {
        validate_url(file_url.trim())?;
    }
    Ok(())
}

impl From<UpdateCertificateRequest> for CertificatePatch {
    fn from(req: UpdateCertificateRequest) -> Self {
        CertificatePatch {
            title: req.title.map(|t| t.trim().to_string()),
            description: req.description.blank_as_null(),
            file_url: req.file_url.map(|u| u.trim().to_string()),
            issued_date: req.issued_date,
        }
    }
}
