//! Request-level orchestration between parsed query input and the repository.

pub mod books;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
