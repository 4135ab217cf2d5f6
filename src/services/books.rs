use crate::domain::book::Book;
use crate::dto::api::BooksPage;
use crate::pagination::{PageSpec, Paginated};
use crate::query::filter::FilterSpec;
use crate::query::params::{BookQueryInput, KeywordInput, QueryParams};
use crate::query::statement::Statement;
use crate::repository::BookReader;
use crate::repository::errors::RepositoryResult;
use crate::services::ServiceResult;

/// Books priced strictly below this are listed as bargains.
pub const BARGAIN_PRICE_LIMIT: f64 = 20.0;

/// Lists every book matching the filters, ignoring malformed price filters.
pub fn list_books<R>(repo: &R, params: &QueryParams) -> RepositoryResult<Vec<Book>>
where
    R: BookReader + ?Sized,
{
    let filter = FilterSpec::lenient(&BookQueryInput::from(params));

    repo.fetch_books(&Statement::list(&filter)).map_err(|err| {
        log::error!("Failed to list books: {err}");
        err
    })
}

/// Lists one page of books with paging metadata.
///
/// All parameters are validated before any statement runs. The total is
/// counted first and the page fetched second; either failure aborts the call.
pub fn list_books_page<R>(repo: &R, params: &QueryParams) -> ServiceResult<BooksPage>
where
    R: BookReader + ?Sized,
{
    let input = BookQueryInput::from(params);

    let (filter, page) = FilterSpec::strict(&input)
        .and_then(|filter| {
            let page = PageSpec::parse(input.page.as_deref(), input.per_page.as_deref())?;
            Ok((filter, page))
        })
        .map_err(|err| {
            log::warn!("Rejected paginated book query: {err}");
            err
        })?;

    let total = repo.count_books(&Statement::count(&filter)).map_err(|err| {
        log::error!("Failed to count books: {err}");
        err
    })?;

    let items = repo
        .fetch_books(&Statement::page(&filter, &page))
        .map_err(|err| {
            log::error!("Failed to load books page {}: {err}", page.page);
            err
        })?;

    Ok(Paginated::new(items, total, &page))
}

/// Searches books by name; a blank keyword yields no results without querying.
pub fn search_books<R>(repo: &R, params: &QueryParams) -> RepositoryResult<Vec<Book>>
where
    R: BookReader + ?Sized,
{
    let Some(filter) = FilterSpec::keyword(&KeywordInput::from(params)) else {
        return Ok(Vec::new());
    };

    repo.fetch_books(&Statement::list(&filter)).map_err(|err| {
        log::error!("Failed to search books: {err}");
        err
    })
}

/// Lists books cheaper than [`BARGAIN_PRICE_LIMIT`], cheapest first.
pub fn bargain_books<R>(repo: &R) -> RepositoryResult<Vec<Book>>
where
    R: BookReader + ?Sized,
{
    let filter = FilterSpec::bargain(BARGAIN_PRICE_LIMIT);

    repo.fetch_books(&Statement::list(&filter)).map_err(|err| {
        log::error!("Failed to list bargain books: {err}");
        err
    })
}
