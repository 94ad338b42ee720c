use crate::errors::AppError;

/// Outcome of a single-record read.
///
/// A missing row and a failed query are different things to a caller: the
/// first usually becomes a 404, the second a logged 5xx. Repositories never
/// fold one into the other.
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    Error(String),
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound)
    }

    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
            Lookup::Error(reason) => Lookup::Error(reason),
        }
    }

    /// Collapses into a `Result`, naming the resource in the not-found message.
    pub fn into_result(self, resource: &str) -> Result<T, AppError> {
        match self {
            Lookup::Found(value) => Ok(value),
            Lookup::NotFound => Err(AppError::NotFound(format!("{resource} not found"))),
            Lookup::Error(reason) => {
                tracing::error!(resource, %reason, "Lookup failed");
                Err(AppError::InternalError(reason))
            }
        }
    }

    /// Like `into_result`, but a missing record is an ordinary `None`.
    pub fn into_optional(self) -> Result<Option<T>, AppError> {
        match self {
            Lookup::Found(value) => Ok(Some(value)),
            Lookup::NotFound => Ok(None),
            Lookup::Error(reason) => Err(AppError::InternalError(reason)),
        }
    }
}

impl<T> From<Result<Option<T>, sqlx::Error>> for Lookup<T> {
    fn from(result: Result<Option<T>, sqlx::Error>) -> Self {
        match result {
            Ok(Some(value)) => Lookup::Found(value),
            Ok(None) | Err(sqlx::Error::RowNotFound) => Lookup::NotFound,
            Err(e) => Lookup::Error(e.to_string()),
        }
    }
}
