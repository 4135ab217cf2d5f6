//! Structural normalization of query-string pairs.

use std::collections::HashMap;

/// Query parameters with every key lower-cased.
///
/// Keys that collide after lower-casing keep the value parsed last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.as_ref().to_lowercase(), value.into()))
                .collect(),
        )
    }

    /// Looks up a normalized (lower-case) key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value of the first alias that is present and non-empty.
    pub fn first_non_empty(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.is_empty())
    }
}

/// Raw, alias-resolved inputs of the book listing endpoints.
///
/// Values are still unvalidated strings; [`crate::query::filter::FilterSpec`]
/// and [`crate::pagination::PageSpec`] turn them into typed specs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQueryInput {
    pub search: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl From<&QueryParams> for BookQueryInput {
    fn from(params: &QueryParams) -> Self {
        let owned = |value: Option<&str>| value.map(str::to_string);
        Self {
            search: owned(params.get("search")),
            min_price: owned(params.get("minprice")),
            max_price: owned(params.first_non_empty(&["maxprice", "max_price"])),
            sort: owned(params.get("sort")),
            page: owned(params.get("page")),
            per_page: owned(params.first_non_empty(&["per_page", "perpage"])),
        }
    }
}

/// Raw inputs of the keyword search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordInput {
    pub keyword: Option<String>,
    pub mode: Option<String>,
}

impl From<&QueryParams> for KeywordInput {
    fn from(params: &QueryParams) -> Self {
        Self {
            keyword: params.get("keyword").map(str::to_string),
            mode: params.get("mode").map(str::to_string),
        }
    }
}
