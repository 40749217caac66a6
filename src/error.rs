use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

/// Errors a request can end with. Data gaps in the CMS are never errors;
/// they only shrink the response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The content cache could not be acquired for this request
    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn content_unavailable() -> Self {
        ApiError::ServiceUnavailable("CMS content context currently unavailable.".to_string())
    }

    pub fn language_not_found() -> Self {
        ApiError::NotFound("Language was not found in the CMS".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ServiceUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::ServiceUnavailable(msg) => error!("API error: {}", msg),
            ApiError::NotFound(msg) => debug!("Not found: {}", msg),
        }

        (status, self.to_string()).into_response()
    }
}
