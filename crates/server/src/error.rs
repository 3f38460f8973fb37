//! HTTP error responses.
//!
//! Every failure leaves the handler as one of four fixed payloads. Details
//! about the underlying cause are logged, never sent to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pressbody_core::{ErrorKind, PressError};
use serde::Serialize;

pub const MISSING_PARAMS_MESSAGE: &str = "source_name과 url이 필요합니다.";
pub const UNSUPPORTED_PUBLISHER_MESSAGE: &str = "지원하지 않는 언론사입니다.";
pub const NOT_FOUND_MESSAGE: &str = "본문을 찾을 수 없습니다.";
pub const INTERNAL_MESSAGE: &str = "Failed to fetch data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// `source_name` or `url` absent or empty.
    MissingParams,
    UnsupportedPublisher,
    /// The page had no body text.
    NotFound,
    /// Anything that went wrong while fetching or extracting.
    Internal,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::MissingParams | ApiError::UnsupportedPublisher => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApiError::MissingParams => MISSING_PARAMS_MESSAGE,
            ApiError::UnsupportedPublisher => UNSUPPORTED_PUBLISHER_MESSAGE,
            ApiError::NotFound => NOT_FOUND_MESSAGE,
            ApiError::Internal => INTERNAL_MESSAGE,
        }
    }
}

impl From<&PressError> for ApiError {
    fn from(err: &PressError) -> Self {
        match err.kind() {
            ErrorKind::UnsupportedPublisher => ApiError::UnsupportedPublisher,
            ErrorKind::NotFound => ApiError::NotFound,
            ErrorKind::InvalidInput | ErrorKind::Upstream => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { error: self.message() })).into_response()
    }
}
