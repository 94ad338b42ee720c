use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};

use crate::{entities::message::ContactForm, errors::AppError};

/// Third-party form endpoint that forwards contact submissions to the owner.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn relay(&self, form: &ContactForm) -> Result<(), AppError>;
}

pub struct HttpFormRelay {
    client: Client,
    endpoint: String,
}

impl HttpFormRelay {
    pub fn new(endpoint: String) -> Self {
        HttpFormRelay {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    async fn relay(&self, form: &ContactForm) -> Result<(), AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(form)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Form relay unreachable: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, body = %body, "Form relay rejected submission");
        Err(AppError::Upstream(format!("Form relay responded with {}", status)))
    }
}
