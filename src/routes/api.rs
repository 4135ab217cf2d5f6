use actix_web::{HttpResponse, Responder, get, web};

use crate::query::params::QueryParams;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::books as books_service;

/// Raw query-string pairs, kept in parse order for key normalization.
type RawQuery = web::Query<Vec<(String, String)>>;

#[get("/books")]
pub async fn api_books(query: RawQuery, repo: web::Data<DieselRepository>) -> impl Responder {
    let params = QueryParams::from_pairs(query.into_inner());

    match books_service::list_books(repo.get_ref(), &params) {
        Ok(books) => HttpResponse::Ok().json(books),
        Err(err) => error_response(&err.into()),
    }
}

#[get("/books_limit")]
pub async fn api_books_limit(
    query: RawQuery,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = QueryParams::from_pairs(query.into_inner());

    match books_service::list_books_page(repo.get_ref(), &params) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err),
    }
}

#[get("/books/search")]
pub async fn api_books_search(
    query: RawQuery,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = QueryParams::from_pairs(query.into_inner());

    match books_service::search_books(repo.get_ref(), &params) {
        Ok(books) => HttpResponse::Ok().json(books),
        Err(err) => error_response(&err.into()),
    }
}

#[get("/bargainbooks")]
pub async fn api_bargain_books(repo: web::Data<DieselRepository>) -> impl Responder {
    match books_service::bargain_books(repo.get_ref()) {
        Ok(books) => HttpResponse::Ok().json(books),
        Err(err) => error_response(&err.into()),
    }
}
