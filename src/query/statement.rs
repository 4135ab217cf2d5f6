//! Rendering of filter and page specs into SQL text plus positional parameters.

use crate::db::UNICODE_NOCASE;
use crate::domain::types::SortColumn;
use crate::pagination::PageSpec;
use crate::query::filter::FilterSpec;

const SELECT_BOOKS: &str = "SELECT id, name, price FROM books";
const COUNT_BOOKS: &str = "SELECT COUNT(*) AS total FROM books";

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Double(f64),
    BigInt(i64),
}

/// SQL text together with the parameters for its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<SqlParam>,
}

impl Statement {
    /// Every book matching `filter`, ordered by the resolved sort column.
    pub fn list(filter: &FilterSpec) -> Self {
        let (conditions, params) = where_clause(filter);
        Self {
            sql: format!("{SELECT_BOOKS}{conditions}{}", order_by(filter)),
            params,
        }
    }

    /// Number of books matching `filter`; no ordering or window.
    pub fn count(filter: &FilterSpec) -> Self {
        let (conditions, params) = where_clause(filter);
        Self {
            sql: format!("{COUNT_BOOKS}{conditions}"),
            params,
        }
    }

    /// One page of books matching `filter`.
    pub fn page(filter: &FilterSpec, page: &PageSpec) -> Self {
        let mut statement = Self::list(filter);
        statement.sql.push_str(" LIMIT ? OFFSET ?");
        // PageSpec::parse bounds both values to i64.
        statement.params.push(SqlParam::BigInt(page.per_page as i64));
        statement.params.push(SqlParam::BigInt(page.offset as i64));
        statement
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }
}

fn where_clause(filter: &FilterSpec) -> (String, Vec<SqlParam>) {
    let predicates = filter.predicates();
    if predicates.is_empty() {
        return (String::new(), Vec::new());
    }
    let conditions = predicates
        .iter()
        .map(|p| p.fragment())
        .collect::<Vec<_>>()
        .join(" AND ");
    let params = predicates.iter().map(|p| p.param()).collect();
    (format!(" WHERE {conditions}"), params)
}

/// Names sort case-insensitively; `id` keeps ties stable across pages.
fn order_by(filter: &FilterSpec) -> String {
    let column = filter.sort.as_sql();
    match filter.sort {
        SortColumn::Name => format!(" ORDER BY {column} COLLATE {UNICODE_NOCASE} ASC, id ASC"),
        SortColumn::Price => format!(" ORDER BY {column} ASC, id ASC"),
    }
}
