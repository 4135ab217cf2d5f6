//! Closed enumerations that stand between request input and generated SQL.
//!
//! Free-form query strings are mapped onto these variants before any
//! statement is built, so only the identifiers listed here can ever appear
//! unparameterized in a query.
use serde::{Deserialize, Serialize};

/// Column a book listing may be ordered by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Name,
    Price,
}

impl SortColumn {
    /// Resolves a requested sort key, falling back to [`SortColumn::Name`]
    /// when the key is absent or not whitelisted.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("price") => SortColumn::Price,
            Some("name") => SortColumn::Name,
            _ => SortColumn::default(),
        }
    }

    /// Column identifier used in `ORDER BY`.
    pub const fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Price => "price",
        }
    }
}

/// How a keyword search compares against book names.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring match.
    #[default]
    Partial,
    /// Exact, case-sensitive name match.
    Exact,
}

impl SearchMode {
    /// Anything other than `exact` is treated as a partial search.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("exact") => SearchMode::Exact,
            _ => SearchMode::Partial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_column_accepts_whitelisted_keys_in_any_case() {
        assert_eq!(SortColumn::resolve(Some("price")), SortColumn::Price);
        assert_eq!(SortColumn::resolve(Some("PRICE")), SortColumn::Price);
        assert_eq!(SortColumn::resolve(Some("Name")), SortColumn::Name);
    }

    #[test]
    fn sort_column_defaults_to_name() {
        assert_eq!(SortColumn::resolve(None), SortColumn::Name);
        assert_eq!(SortColumn::resolve(Some("")), SortColumn::Name);
        assert_eq!(SortColumn::resolve(Some("id")), SortColumn::Name);
        assert_eq!(
            SortColumn::resolve(Some("price; DROP TABLE books")),
            SortColumn::Name
        );
    }

    #[test]
    fn sort_column_only_emits_known_identifiers() {
        for raw in ["name", "price", "id", "price desc", "1", "\"name\""] {
            let column = SortColumn::resolve(Some(raw)).as_sql();
            assert!(column == "name" || column == "price", "{raw} -> {column}");
        }
    }

    #[test]
    fn search_mode_defaults_to_partial() {
        assert_eq!(SearchMode::resolve(None), SearchMode::Partial);
        assert_eq!(SearchMode::resolve(Some("fuzzy")), SearchMode::Partial);
        assert_eq!(SearchMode::resolve(Some("exact")), SearchMode::Exact);
    }
}
