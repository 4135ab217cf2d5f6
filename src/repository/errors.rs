use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::Error as DieselError;
use thiserror::Error;

/// Failure reported by the storage layer while executing a statement.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Row decoding error: {0}")]
    DecodeError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => {
                RepositoryError::DecodeError("Statement returned no rows".to_string())
            }

            DieselError::DatabaseError(_, info) => {
                RepositoryError::DatabaseError(info.message().to_string())
            }

            DieselError::DeserializationError(e) => {
                RepositoryError::DecodeError(format!("Deserialization error: {e}"))
            }

            DieselError::SerializationError(e) => {
                RepositoryError::DatabaseError(format!("Parameter binding error: {e}"))
            }

            DieselError::QueryBuilderError(e) => {
                RepositoryError::DatabaseError(format!("Query builder error: {e}"))
            }

            _ => RepositoryError::Unexpected(format!("Unexpected diesel error: {err}")),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::ConnectionError(format!("Connection error: {err}"))
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(format!("Connection error: {err}"))
    }
}
