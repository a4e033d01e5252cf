use crate::storage::StorageError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use qa_types::{ErrorResponse, FieldErrors};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input in {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::NotFound(_) | ApiError::Storage(StorageError::NotFound(_)) => "not_found",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Storage(_) => "storage_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::Storage(StorageError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // field errors go out as the bare `{field: [reasons]}` map
        if let ApiError::Validation(errors) = self {
            return HttpResponse::BadRequest().json(errors);
        }

        if self.status_code().is_server_error() {
            error!(error = %self, "Request failed");
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.error_type().to_string(),
            message: self.to_string(),
        })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
