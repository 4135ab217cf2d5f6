//! Translation of raw catalog query parameters into parameterized SQL.
//!
//! Input flows one way: [`params::QueryParams`] normalizes the query string,
//! [`filter::FilterSpec`] validates it into predicates and a sort column, and
//! [`statement::Statement`] renders the final SQL text with its positional
//! parameters.

use thiserror::Error;

pub mod filter;
pub mod params;
pub mod statement;

/// A request parameter that failed validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamError {
    /// The named parameter was present but malformed.
    #[error("Invalid value for \"{0}\"")]
    InvalidValue(&'static str),
    /// Both price bounds parsed but describe an empty range.
    #[error("\"minprice\" cannot be greater than \"maxprice\"")]
    PriceRange,
}
