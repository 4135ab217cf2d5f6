use serde::Serialize;

use crate::query::ParamError;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const MAX_ITEMS_PER_PAGE: usize = 50;

/// Envelope version reported by the paginated listing.
pub const PAGINATED_VERSION: &str = "2";

/// Largest integer a client can send that still round-trips through `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Resolved page window for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub page: usize,
    pub per_page: usize,
    pub offset: usize,
}

impl PageSpec {
    /// Builds a window, clamping `per_page` to [`MAX_ITEMS_PER_PAGE`].
    ///
    /// Returns `None` for a zero page or page size, or when the row offset
    /// does not fit a SQL integer.
    pub fn new(page: usize, per_page: usize) -> Option<Self> {
        if page == 0 || per_page == 0 {
            return None;
        }
        let per_page = per_page.min(MAX_ITEMS_PER_PAGE);
        let offset = (page - 1).checked_mul(per_page)?;
        if i64::try_from(offset).is_err() {
            return None;
        }
        Some(Self {
            page,
            per_page,
            offset,
        })
    }

    /// Parses raw `page` and `per_page` values, applying defaults for blanks.
    pub fn parse(page: Option<&str>, per_page: Option<&str>) -> Result<Self, ParamError> {
        let page = parse_positive_int(page, "page", DEFAULT_PAGE)?;
        let per_page = parse_positive_int(per_page, "per_page", DEFAULT_ITEMS_PER_PAGE)?;
        Self::new(page, per_page).ok_or(ParamError::InvalidValue("page"))
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_ITEMS_PER_PAGE,
            offset: 0,
        }
    }
}

/// Accepts any whole number greater than zero, including forms like `2.0`.
fn parse_positive_int(
    raw: Option<&str>,
    name: &'static str,
    default: usize,
) -> Result<usize, ParamError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };
    match raw.parse::<f64>() {
        Ok(value)
            if value.is_finite()
                && value.fract() == 0.0
                && value > 0.0
                && value <= MAX_EXACT_INTEGER =>
        {
            Ok(value as usize)
        }
        _ => Err(ParamError::InvalidValue(name)),
    }
}

/// One page of items plus the metadata needed to navigate the rest.
#[derive(Debug, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub version: &'static str,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: usize, page: &PageSpec) -> Self {
        Self {
            version: PAGINATED_VERSION,
            page: page.page,
            per_page: page.per_page,
            total,
            total_pages: page.total_pages(total),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_blank_values() {
        assert_eq!(PageSpec::parse(None, None), Ok(PageSpec::default()));
        assert_eq!(PageSpec::parse(Some(""), Some(" ")), Ok(PageSpec::default()));
    }

    #[test]
    fn offset_follows_page_and_size() {
        let spec = PageSpec::parse(Some("3"), Some("20")).unwrap();

        assert_eq!(spec.page, 3);
        assert_eq!(spec.per_page, 20);
        assert_eq!(spec.offset, 40);
    }

    #[test]
    fn per_page_is_clamped_not_rejected() {
        let spec = PageSpec::parse(Some("2"), Some("999")).unwrap();

        assert_eq!(spec.per_page, MAX_ITEMS_PER_PAGE);
        assert_eq!(spec.offset, MAX_ITEMS_PER_PAGE);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        assert_eq!(
            PageSpec::parse(Some("0"), None),
            Err(ParamError::InvalidValue("page"))
        );
        assert_eq!(
            PageSpec::parse(Some("-1"), None),
            Err(ParamError::InvalidValue("page"))
        );
        assert_eq!(
            PageSpec::parse(None, Some("0")),
            Err(ParamError::InvalidValue("per_page"))
        );
    }

    #[test]
    fn fractional_and_garbage_values_are_rejected() {
        assert_eq!(
            PageSpec::parse(Some("1.5"), None),
            Err(ParamError::InvalidValue("page"))
        );
        assert_eq!(
            PageSpec::parse(None, Some("ten")),
            Err(ParamError::InvalidValue("per_page"))
        );
        assert_eq!(
            PageSpec::parse(Some("NaN"), None),
            Err(ParamError::InvalidValue("page"))
        );
    }

    #[test]
    fn whole_number_decimals_are_accepted() {
        let spec = PageSpec::parse(Some("2.0"), Some("5")).unwrap();

        assert_eq!(spec.page, 2);
        assert_eq!(spec.offset, 5);
    }

    #[test]
    fn total_pages_rounds_up() {
        let spec = PageSpec::new(1, 10).unwrap();

        assert_eq!(spec.total_pages(0), 0);
        assert_eq!(spec.total_pages(1), 1);
        assert_eq!(spec.total_pages(10), 1);
        assert_eq!(spec.total_pages(11), 2);
    }

    #[test]
    fn paginated_carries_metadata() {
        let spec = PageSpec::new(2, 1).unwrap();
        let page = Paginated::new(vec!["b"], 3, &spec);

        assert_eq!(page.version, "2");
        assert_eq!(page.page, 2);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec!["b"]);
    }
}
