use diesel::prelude::*;

use crate::domain::book::Book as DomainBook;

#[derive(Debug, Clone, QueryableByName)]
#[diesel(table_name = crate::schema::books)]
/// Diesel model for [`crate::domain::book::Book`].
pub struct Book {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, QueryableByName)]
/// Row produced by `SELECT COUNT(*) AS total ...` statements.
pub struct BookCount {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub total: i64,
}

impl From<Book> for DomainBook {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            price: book.price,
        }
    }
}
