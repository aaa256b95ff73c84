use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::core::ParamError;
use crate::models::ErrorResponse;
use crate::services::StoreError;

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Query timed out after {0}s")]
    Timeout(u64),
}

impl From<ParamError> for ApiError {
    fn from(value: ParamError) -> Self {
        ApiError::InvalidArgument(value.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(value: validator::ValidationErrors) -> Self {
        ApiError::InvalidArgument(value.to_string())
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Timeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Handle query string errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    tracing::warn!("Query error on {}: {}", req.path(), err);
    ApiError::InvalidArgument(format!("Invalid query: {}", err)).into()
}

/// Handle path parameter errors, e.g. a non-numeric cocktail id
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Path error on {}: {}", req.path(), err);
    ApiError::InvalidArgument(format!("Invalid path parameter: {}", err)).into()
}
