use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::helpers::{error_chain_fmt, missing, rejected};

#[derive(thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Select a valid course.")]
    UnknownCourse,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for FormError {
    fn status_code(&self) -> StatusCode {
        match self {
            FormError::ValidationError(_) | FormError::UnknownCourse => StatusCode::BAD_REQUEST,
            FormError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            FormError::UnexpectedError(_) => HttpResponse::new(self.status_code()),
            _ => rejected(self.status_code(), &self.to_string()),
        }
    }
}

/// Failed lookup of a single stored record for a read endpoint.
#[derive(thiserror::Error)]
pub enum LookupError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("No video available")]
    NoVideo,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for LookupError {
    fn status_code(&self) -> StatusCode {
        match self {
            LookupError::NotFound(_) | LookupError::NoVideo => StatusCode::NOT_FOUND,
            LookupError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            LookupError::UnexpectedError(_) => HttpResponse::new(self.status_code()),
            _ => missing(&self.to_string()),
        }
    }
}
