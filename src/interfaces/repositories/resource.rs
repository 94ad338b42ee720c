use async_trait::async_trait;
use uuid::Uuid;

use crate::{domain::lookup::Lookup, errors::AppError};

/// Storage operations shared by every content table.
///
/// Ids and timestamps are assigned by the implementation, never by callers.
/// `list` returns the table's canonical ordering. `delete` of an id that does
/// not exist answers `AppError::NotFound`.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    type Record: Send + Sync;
    type Insert: Send + Sync;

    async fn list(&self) -> Result<Vec<Self::Record>, AppError>;
    async fn get(&self, id: Uuid) -> Lookup<Self::Record>;
    /// Writes a new row and returns it as stored, id and timestamps included.
    async fn insert(&self, record: &Self::Insert) -> Result<Self::Record, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

/// Tables whose rows can be edited after creation.
///
/// Updates read the current row, apply the patch and write every column back.
/// Concurrent editors overwrite each other; the last write wins.
#[async_trait]
pub trait UpdatableRepository: ResourceRepository {
    type Patch: Send + Sync;

    async fn update(&self, id: Uuid, patch: &Self::Patch) -> Result<Self::Record, AppError>;
}

/// Maps a DELETE's affected-row count to the not-found contract.
pub fn ensure_deleted(rows_affected: u64, resource: &str) -> Result<(), AppError> {
    if rows_affected == 0 {
        return Err(AppError::NotFound(format!("{resource} not found")));
    }
    Ok(())
}
