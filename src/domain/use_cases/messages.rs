use std::sync::Arc;

use crate::{
    entities::message::Message,
    errors::AppError,
    repositories::{message::MessageRepository, resource::ResourceRepository},
    utils::valid_uuid::valid_uuid,
};

pub struct MessageHandler<R>
where
    R: MessageRepository + ?Sized,
{
    pub message_repo: Arc<R>,
}

impl<R> MessageHandler<R>
where
    R: MessageRepository + ?Sized,
{
    pub fn new(message_repo: Arc<R>) -> Self {
        MessageHandler { message_repo }
    }

    pub async fn list(&self) -> Result<Vec<Message>, AppError> {
        self.message_repo.list().await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.message_repo.delete(valid_id).await
    }
}
