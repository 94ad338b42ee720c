use uuid::Uuid;

use crate::errors::AppError;

/// Parses a path id, answering 400 for anything that is not a UUID.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::InvalidInput("Invalid UUID format".to_string()))
}
