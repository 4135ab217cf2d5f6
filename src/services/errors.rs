use thiserror::Error;

use crate::query::ParamError;
use crate::repository::errors::RepositoryError;

/// Failure of a catalog service call.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller supplied a malformed or inconsistent parameter.
    #[error(transparent)]
    InvalidParameter(#[from] ParamError),

    /// A statement failed to execute; details are logged, not returned.
    #[error("Database error")]
    Storage(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_keeps_message() {
        let err = ServiceError::from(ParamError::InvalidValue("page"));

        assert_eq!(err.to_string(), "Invalid value for \"page\"");
    }

    #[test]
    fn storage_error_hides_detail() {
        let err = ServiceError::from(RepositoryError::DatabaseError("no such table".into()));

        assert_eq!(err.to_string(), "Database error");
    }
}
