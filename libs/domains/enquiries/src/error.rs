use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnquiryError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Booking backend failure: {0}")]
    Booking(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type EnquiryResult<T> = Result<T, EnquiryError>;

/// Convert EnquiryError to AppError for standardized error responses
impl From<EnquiryError> for AppError {
    fn from(err: EnquiryError) -> Self {
        match err {
            EnquiryError::Validation(msg) => AppError::BadRequest(msg),
            // The booking backend's own error body is logged but never
            // surfaced to the browser
            EnquiryError::Booking(_) => {
                AppError::BadGateway("Failed to submit enquiry".to_string())
            }
            EnquiryError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for EnquiryError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
