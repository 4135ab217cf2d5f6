//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::book::Book;
use crate::query::statement::Statement;
use crate::repository::BookReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl BookReader for Repository {
        fn fetch_books(&self, statement: &Statement) -> RepositoryResult<Vec<Book>>;
        fn count_books(&self, statement: &Statement) -> RepositoryResult<usize>;
    }
}
