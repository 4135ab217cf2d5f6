use crate::db::DbPool;
use crate::domain::book::Book;
use crate::query::statement::Statement;
use crate::repository::errors::RepositoryResult;

pub mod book;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Read access to the `books` table through prebuilt statements.
///
/// Implementations execute the statement text as given and bind
/// [`Statement::params`] positionally; they never inspect or rewrite the SQL.
pub trait BookReader {
    /// Runs a row-returning statement and decodes each row as a [`Book`].
    fn fetch_books(&self, statement: &Statement) -> RepositoryResult<Vec<Book>>;
    /// Runs a `SELECT COUNT(*) AS total` statement.
    fn count_books(&self, statement: &Statement) -> RepositoryResult<usize>;
}

/// Diesel-backed repository shared by all request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
