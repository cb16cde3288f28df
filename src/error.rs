//! Error types for the starred restaurants service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures surfaced by the star collection and the HTTP layer.
///
/// Every variant carries the human-readable message that is returned to the
/// caller verbatim. None of them are transient, so nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StarError {
    /// A required field was absent or empty
    #[error("{0}")]
    InvalidInput(String),

    /// No matching record, or a reference that does not resolve
    #[error("{0}")]
    NotFound(String),
}

impl StarError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        StarError::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        StarError::NotFound(message.into())
    }

    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            StarError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            StarError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for StarError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, self.to_string()).into_response()
    }
}

pub type StarResult<T> = Result<T, StarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let response = StarError::invalid_input("A comment is required.").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = StarError::not_found("Starred restaurant not found.").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_display_is_the_bare_message() {
        let err = StarError::not_found("No restaurants found.");
        assert_eq!(err.to_string(), "No restaurants found.");
    }
}
