//! Error types for the mail relay.

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;

/// Errors produced by the relay route.
#[derive(Debug)]
pub enum RelayError {
    /// One of `toEmail`, `subject` or `body` was absent or empty
    MissingFields,
    /// The provider (token acquisition or the send call) failed
    Provider(eyre::Report),
}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Missing required fields"),
            Self::Provider(e) => write!(f, "Provider error: {}", e),
        }
    }
}

impl std::error::Error for RelayError {}

/// Convert RelayError to AppError for standardized error responses
impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::MissingFields => {
                AppError::BadRequest("Missing required fields".to_string())
            }
            RelayError::Provider(e) => {
                AppError::InternalServerError(format!("Failed to send email: {}", e))
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
