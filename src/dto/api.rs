//! DTOs exposed by the catalog API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::book::Book;
use crate::pagination::Paginated;

/// Body of the paginated `/api/books_limit` response.
pub type BooksPage = Paginated<Book>;

/// Error body returned with every non-2xx API response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
