//! HTTP surface for the mail relay.
//!
//! `POST /` (mounted under `/api/send-email`) accepts a
//! `{ toEmail, subject, body }` payload and dispatches one HTML email
//! through the configured provider.

use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::ErrorResponse;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use utoipa::{OpenApi, ToSchema};

use crate::error::RelayError;
use crate::models::Email;
use crate::provider::EmailProvider;

/// OpenAPI documentation for the mail relay
#[derive(OpenApi)]
#[openapi(
    paths(send_email),
    components(schemas(SendEmailRequest, SendEmailResponse, ErrorResponse)),
    tags((name = "email", description = "Mail relay endpoint"))
)]
pub struct ApiDoc;

/// Relay request payload.
///
/// All three fields are required and must be non-empty. They are optional
/// at the serde level so an absent field yields the same 400 as an empty
/// one instead of a deserialization rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    /// Recipient address
    #[serde(default)]
    pub to_email: Option<String>,
    /// Message subject
    #[serde(default)]
    pub subject: Option<String>,
    /// HTML body
    #[serde(default)]
    pub body: Option<String>,
}

impl SendEmailRequest {
    /// Validate presence of all fields, returning their contents.
    fn into_parts(self) -> Result<(String, String, String), RelayError> {
        match (self.to_email, self.subject, self.body) {
            (Some(to), Some(subject), Some(body))
                if !to.is_empty() && !subject.is_empty() && !body.is_empty() =>
            {
                Ok((to, subject, body))
            }
            _ => Err(RelayError::MissingFields),
        }
    }
}

/// Relay response payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEmailResponse {
    pub success: bool,
    pub message: String,
}

/// Create the mail relay router
pub fn router(provider: Arc<dyn EmailProvider>) -> Router {
    Router::new()
        .route("/", post(send_email))
        .with_state(provider)
}

/// Send one email through the configured provider
#[utoipa::path(
    post,
    path = "/api/send-email",
    tag = "email",
    request_body = SendEmailRequest,
    responses(
        (status = 200, description = "Email sent", body = SendEmailResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Provider failure", body = ErrorResponse)
    )
)]
async fn send_email(
    State(provider): State<Arc<dyn EmailProvider>>,
    Json(request): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>, RelayError> {
    let (to, subject, body) = request.into_parts()?;

    debug!(
        to = %to,
        subject = %subject,
        body_preview = %body.chars().take(100).collect::<String>(),
        "Relay request received"
    );

    let email = Email::new(&to, &subject).with_html(&body);
    let result = provider
        .send(&email)
        .await
        .map_err(RelayError::Provider)?;

    info!(
        provider = provider.name(),
        message_id = %result.message_id,
        to = %to,
        "Email sent"
    );

    Ok(Json(SendEmailResponse {
        success: true,
        message: format!("Email sent to {}", to),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_parts_with_all_fields() {
        let request = SendEmailRequest {
            to_email: Some("a@b.co".to_string()),
            subject: Some("Hi".to_string()),
            body: Some("<p>Hello</p>".to_string()),
        };

        let (to, subject, body) = request.into_parts().unwrap();
        assert_eq!(to, "a@b.co");
        assert_eq!(subject, "Hi");
        assert_eq!(body, "<p>Hello</p>");
    }

    #[test]
    fn test_into_parts_rejects_missing_field() {
        let request = SendEmailRequest {
            to_email: None,
            subject: Some("Hi".to_string()),
            body: Some("<p>Hello</p>".to_string()),
        };

        assert!(matches!(
            request.into_parts(),
            Err(RelayError::MissingFields)
        ));
    }

    #[test]
    fn test_into_parts_rejects_empty_field() {
        let request = SendEmailRequest {
            to_email: Some("a@b.co".to_string()),
            subject: Some("".to_string()),
            body: Some("<p>Hello</p>".to_string()),
        };

        assert!(matches!(
            request.into_parts(),
            Err(RelayError::MissingFields)
        ));
    }
}
