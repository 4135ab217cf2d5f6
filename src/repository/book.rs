use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{BigInt, Double, Text};
use diesel::sqlite::Sqlite;

use crate::db::get_connection;
use crate::domain::book::Book;
use crate::models::book::{Book as DbBook, BookCount};
use crate::query::statement::{SqlParam, Statement};
use crate::repository::{BookReader, DieselRepository, errors::RepositoryResult};

/// Turns a [`Statement`] into a Diesel raw query with every parameter bound in order.
fn bind_statement(statement: &Statement) -> BoxedSqlQuery<'static, Sqlite, SqlQuery> {
    statement.params().iter().fold(
        diesel::sql_query(statement.sql()).into_boxed::<Sqlite>(),
        |query, param| match param {
            SqlParam::Text(value) => query.bind::<Text, _>(value.clone()),
            SqlParam::Double(value) => query.bind::<Double, _>(*value),
            SqlParam::BigInt(value) => query.bind::<BigInt, _>(*value),
        },
    )
}

impl BookReader for DieselRepository {
    fn fetch_books(&self, statement: &Statement) -> RepositoryResult<Vec<Book>> {
        let mut conn = get_connection(&self.pool)?;

        log::debug!("Fetching books: {}", statement.sql());

        let books = bind_statement(statement)
            .load::<DbBook>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Book>>();

        Ok(books)
    }

    fn count_books(&self, statement: &Statement) -> RepositoryResult<usize> {
        let mut conn = get_connection(&self.pool)?;

        log::debug!("Counting books: {}", statement.sql());

        let count = bind_statement(statement).get_result::<BookCount>(&mut conn)?;

        Ok(count.total.max(0) as usize)
    }
}
