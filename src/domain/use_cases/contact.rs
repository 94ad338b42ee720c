use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::message::{ContactForm, ContactResponse, MessageInsert},
    errors::AppError,
    relay::FormRelay,
    repositories::{message::MessageRepository, resource::ResourceRepository},
};

/// Public contact form. Submissions are forwarded to the form relay when one
/// is configured and stored as messages when storage is enabled.
pub struct ContactHandler<R>
where
    R: MessageRepository + ?Sized,
{
    pub message_repo: Arc<R>,
    pub relay: Option<Arc<dyn FormRelay>>,
    pub store_messages: bool,
}

impl<R> ContactHandler<R>
where
    R: MessageRepository + ?Sized,
{
    pub fn new(message_repo: Arc<R>, relay: Option<Arc<dyn FormRelay>>, store_messages: bool) -> Self {
        ContactHandler {
            message_repo,
            relay,
            store_messages,
        }
    }

    /// A relay failure is reported to the caller and nothing is stored. Once
    /// the relay has accepted the message a storage failure is only logged.
    pub async fn submit(&self, form: ContactForm) -> Result<ContactResponse, AppError> {
        let form = form.normalized();
        form.validate()?;

        if self.relay.is_none() && !self.store_messages {
            tracing::error!("Contact form received but neither relay nor storage is enabled");
            return Err(AppError::InternalError("Contact form is not configured".into()));
        }

        let relayed = match &self.relay {
            Some(relay) => {
                relay.relay(&form).await?;
                true
            }
            None => false,
        };

        let stored = if self.store_messages {
            match self.message_repo.insert(&MessageInsert::from(form)).await {
                Ok(_) => true,
                Err(e) if relayed => {
                    tracing::error!("Relayed contact message could not be stored: {}", e);
                    false
                }
                Err(e) => return Err(e),
            }
        } else {
            false
        };

        tracing::info!(relayed, stored, "Contact message accepted");
        Ok(ContactResponse {
            message: "Thank you, your message has been sent.".to_string(),
            relayed,
            stored,
        })
    }
}
