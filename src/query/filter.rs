//! Compilation of raw filter inputs into an ordered predicate list.

use crate::domain::types::{SearchMode, SortColumn};
use crate::query::ParamError;
use crate::query::params::{BookQueryInput, KeywordInput};
use crate::query::statement::SqlParam;

/// How malformed price filters are treated.
///
/// The plain listing endpoint has always ignored bad numbers while the
/// paginated one rejects them; both behaviors are kept as separate modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Malformed price filters are dropped and no range check is applied.
    Lenient,
    /// Malformed price filters and inverted ranges are rejected.
    Strict,
}

/// Name condition of a [`FilterSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    /// Case-insensitive substring.
    Contains(String),
    /// Exact name.
    Equals(String),
}

/// One parameterized SQL condition together with its bound value.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    NameContains(String),
    NameEquals(String),
    MinPrice(f64),
    MaxPrice(f64),
    PriceBelow(f64),
}

impl Predicate {
    /// SQL condition with a single `?` placeholder.
    pub fn fragment(&self) -> &'static str {
        match self {
            Predicate::NameContains(_) => r"unicode_lower(name) LIKE ? ESCAPE '\'",
            Predicate::NameEquals(_) => "name = ?",
            Predicate::MinPrice(_) => "price >= ?",
            Predicate::MaxPrice(_) => "price <= ?",
            Predicate::PriceBelow(_) => "price < ?",
        }
    }

    /// Value bound to the fragment's placeholder.
    pub fn param(&self) -> SqlParam {
        match self {
            Predicate::NameContains(term) => {
                SqlParam::Text(format!("%{}%", escape_like(&term.to_lowercase())))
            }
            Predicate::NameEquals(name) => SqlParam::Text(name.clone()),
            Predicate::MinPrice(value)
            | Predicate::MaxPrice(value)
            | Predicate::PriceBelow(value) => SqlParam::Double(*value),
        }
    }
}

/// Validated filters and ordering for a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub name: Option<NameMatch>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Exclusive upper price bound.
    pub price_below: Option<f64>,
    pub sort: SortColumn,
}

impl FilterSpec {
    pub fn compile(input: &BookQueryInput, mode: ValidationMode) -> Result<Self, ParamError> {
        match mode {
            ValidationMode::Lenient => Ok(Self::lenient(input)),
            ValidationMode::Strict => Self::strict(input),
        }
    }

    /// Builds the spec, silently dropping price filters that do not parse.
    pub fn lenient(input: &BookQueryInput) -> Self {
        let price = |raw: Option<&str>| parse_price(raw, "").ok().flatten();
        Self {
            name: search_term(input.search.as_deref()).map(NameMatch::Contains),
            min_price: price(input.min_price.as_deref()),
            max_price: price(input.max_price.as_deref()),
            price_below: None,
            sort: SortColumn::resolve(input.sort.as_deref()),
        }
    }

    /// Builds the spec, failing on the first malformed price or an inverted range.
    pub fn strict(input: &BookQueryInput) -> Result<Self, ParamError> {
        let min_price = parse_price(input.min_price.as_deref(), "minprice")?;
        let max_price = parse_price(input.max_price.as_deref(), "maxprice")?;

        if matches!((min_price, max_price), (Some(min), Some(max)) if min > max) {
            return Err(ParamError::PriceRange);
        }

        Ok(Self {
            name: search_term(input.search.as_deref()).map(NameMatch::Contains),
            min_price,
            max_price,
            price_below: None,
            sort: SortColumn::resolve(input.sort.as_deref()),
        })
    }

    /// Builds a name-ordered keyword search, or `None` for a blank keyword.
    pub fn keyword(input: &KeywordInput) -> Option<Self> {
        let term = search_term(input.keyword.as_deref())?;
        let name = match SearchMode::resolve(input.mode.as_deref()) {
            SearchMode::Exact => NameMatch::Equals(term),
            SearchMode::Partial => NameMatch::Contains(term),
        };
        Some(Self {
            name: Some(name),
            sort: SortColumn::Name,
            ..Self::default()
        })
    }

    /// Books strictly cheaper than `limit`, cheapest first.
    pub fn bargain(limit: f64) -> Self {
        Self {
            price_below: Some(limit),
            sort: SortColumn::Price,
            ..Self::default()
        }
    }

    /// Predicates in the order they are rendered and bound.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        match &self.name {
            Some(NameMatch::Contains(term)) => {
                predicates.push(Predicate::NameContains(term.clone()));
            }
            Some(NameMatch::Equals(name)) => predicates.push(Predicate::NameEquals(name.clone())),
            None => {}
        }
        if let Some(min) = self.min_price {
            predicates.push(Predicate::MinPrice(min));
        }
        if let Some(max) = self.max_price {
            predicates.push(Predicate::MaxPrice(max));
        }
        if let Some(limit) = self.price_below {
            predicates.push(Predicate::PriceBelow(limit));
        }
        predicates
    }
}

fn search_term(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parses an optional price; blank input means "no filter".
fn parse_price(raw: Option<&str>, name: &'static str) -> Result<Option<f64>, ParamError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ParamError::InvalidValue(name)),
    }
}

/// Escapes `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(min: Option<&str>, max: Option<&str>) -> BookQueryInput {
        BookQueryInput {
            min_price: min.map(str::to_string),
            max_price: max.map(str::to_string),
            ..BookQueryInput::default()
        }
    }

    #[test]
    fn blank_search_is_no_filter() {
        let spec = FilterSpec::lenient(&BookQueryInput {
            search: Some("   ".to_string()),
            ..BookQueryInput::default()
        });

        assert_eq!(spec.name, None);
        assert!(spec.predicates().is_empty());
    }

    #[test]
    fn search_is_trimmed_and_matched_case_insensitively() {
        let spec = FilterSpec::lenient(&BookQueryInput {
            search: Some("  Dune ".to_string()),
            ..BookQueryInput::default()
        });

        let predicates = spec.predicates();
        assert_eq!(predicates, vec![Predicate::NameContains("Dune".to_string())]);
        assert_eq!(
            predicates[0].fragment(),
            r"unicode_lower(name) LIKE ? ESCAPE '\'"
        );
        assert_eq!(predicates[0].param(), SqlParam::Text("%dune%".to_string()));
    }

    #[test]
    fn search_term_is_lower_cased_beyond_ascii() {
        let predicate = Predicate::NameContains("ÉCLAIR Ωμέγα".to_string());

        assert_eq!(
            predicate.param(),
            SqlParam::Text("%éclair ωμέγα%".to_string())
        );
    }

    #[test]
    fn like_wildcards_in_search_are_escaped() {
        let predicate = Predicate::NameContains(r"100%_a\b".to_string());

        assert_eq!(
            predicate.param(),
            SqlParam::Text(r"%100\%\_a\\b%".to_string())
        );
    }

    #[test]
    fn lenient_mode_drops_malformed_prices() {
        let spec = FilterSpec::lenient(&input(Some("abc"), Some("NaN")));

        assert_eq!(spec.min_price, None);
        assert_eq!(spec.max_price, None);

        let spec = FilterSpec::lenient(&input(Some("inf"), Some("12.5")));
        assert_eq!(spec.min_price, None);
        assert_eq!(spec.max_price, Some(12.5));
    }

    #[test]
    fn lenient_mode_keeps_inverted_range() {
        let spec = FilterSpec::compile(&input(Some("50"), Some("10")), ValidationMode::Lenient)
            .expect("lenient mode never fails");

        assert_eq!(
            spec.predicates(),
            vec![Predicate::MinPrice(50.0), Predicate::MaxPrice(10.0)]
        );
    }

    #[test]
    fn strict_mode_names_malformed_parameter() {
        assert_eq!(
            FilterSpec::strict(&input(Some("abc"), None)),
            Err(ParamError::InvalidValue("minprice"))
        );
        assert_eq!(
            FilterSpec::strict(&input(None, Some("-infinity"))),
            Err(ParamError::InvalidValue("maxprice"))
        );
    }

    #[test]
    fn strict_mode_checks_min_before_max() {
        assert_eq!(
            FilterSpec::strict(&input(Some("x"), Some("y"))),
            Err(ParamError::InvalidValue("minprice"))
        );
    }

    #[test]
    fn strict_mode_rejects_inverted_range() {
        let err = FilterSpec::compile(&input(Some("50"), Some("10")), ValidationMode::Strict)
            .unwrap_err();

        assert_eq!(err, ParamError::PriceRange);
        assert_eq!(err.to_string(), "\"minprice\" cannot be greater than \"maxprice\"");
    }

    #[test]
    fn strict_mode_accepts_equal_bounds() {
        let spec = FilterSpec::strict(&input(Some(" 20 "), Some("20"))).unwrap();

        assert_eq!(spec.min_price, Some(20.0));
        assert_eq!(spec.max_price, Some(20.0));
    }

    #[test]
    fn empty_prices_are_absent_in_both_modes() {
        for mode in [ValidationMode::Lenient, ValidationMode::Strict] {
            let spec = FilterSpec::compile(&input(Some(""), Some("")), mode).unwrap();
            assert!(spec.predicates().is_empty());
        }
    }

    #[test]
    fn predicates_follow_fixed_order() {
        let spec = FilterSpec::strict(&BookQueryInput {
            search: Some("a".to_string()),
            min_price: Some("1".to_string()),
            max_price: Some("2".to_string()),
            sort: Some("price".to_string()),
            ..BookQueryInput::default()
        })
        .unwrap();

        assert_eq!(
            spec.predicates(),
            vec![
                Predicate::NameContains("a".to_string()),
                Predicate::MinPrice(1.0),
                Predicate::MaxPrice(2.0),
            ]
        );
        assert_eq!(spec.sort, SortColumn::Price);
    }

    #[test]
    fn keyword_search_selects_match_kind() {
        let exact = FilterSpec::keyword(&KeywordInput {
            keyword: Some(" Dune ".to_string()),
            mode: Some("exact".to_string()),
        })
        .unwrap();
        assert_eq!(exact.predicates(), vec![Predicate::NameEquals("Dune".to_string())]);

        let partial = FilterSpec::keyword(&KeywordInput {
            keyword: Some("dune".to_string()),
            mode: None,
        })
        .unwrap();
        assert_eq!(
            partial.predicates(),
            vec![Predicate::NameContains("dune".to_string())]
        );

        assert!(FilterSpec::keyword(&KeywordInput::default()).is_none());
    }

    #[test]
    fn bargain_is_exclusive_and_sorted_by_price() {
        let spec = FilterSpec::bargain(20.0);

        assert_eq!(spec.sort, SortColumn::Price);
        assert_eq!(spec.predicates(), vec![Predicate::PriceBelow(20.0)]);
        assert_eq!(spec.predicates()[0].fragment(), "price < ?");
    }
}
