//! HTTP handlers.

use actix_web::HttpResponse;

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod api;

/// Maps a service failure onto its HTTP status and JSON body.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidParameter(err) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()))
        }
        ServiceError::Storage(_) => {
            HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string()))
        }
    }
}
