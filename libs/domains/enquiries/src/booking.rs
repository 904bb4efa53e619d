//! Client for the external booking backend.
//!
//! Accepted enquiries are forwarded as JSON to an external API that owns
//! lead storage. This service keeps no record of its own.

use crate::error::{EnquiryError, EnquiryResult};
use crate::models::NewEnquiry;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

const DEFAULT_BOOKING_API_URL: &str =
    "https://next-js-running-backend.vercel.app/api/driving-master";

/// Abstraction over the booking backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingClient: Send + Sync {
    /// Forward an enquiry to the backend
    async fn submit(&self, enquiry: &NewEnquiry) -> EnquiryResult<()>;
}

/// HTTP implementation of [`BookingClient`]
pub struct HttpBookingClient {
    url: String,
    token: Option<String>,
    client: Client,
}

impl HttpBookingClient {
    pub fn new(url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            url: url.into(),
            token,
            client: Client::new(),
        }
    }

    /// Create from environment variables.
    ///
    /// - `BOOKING_API_URL`: override for the backend endpoint
    /// - `BOOKING_API_TOKEN`: optional bearer-style token sent as the
    ///   `Authorization` header verbatim
    pub fn from_env() -> Self {
        let url = std::env::var("BOOKING_API_URL")
            .unwrap_or_else(|_| DEFAULT_BOOKING_API_URL.to_string());
        let token = std::env::var("BOOKING_API_TOKEN").ok();

        Self::new(url, token)
    }
}

#[async_trait]
impl BookingClient for HttpBookingClient {
    async fn submit(&self, enquiry: &NewEnquiry) -> EnquiryResult<()> {
        debug!(url = %self.url, student = %enquiry.student_name, "Forwarding enquiry to booking backend");

        let mut request = self.client.post(&self.url).json(enquiry);
        if let Some(token) = &self.token {
            request = request.header("Authorization", token);
        }

        let response = request.send().await.map_err(|e| {
            error!(url = %self.url, "Booking backend unreachable: {}", e);
            EnquiryError::Booking(format!("request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                url = %self.url,
                status = %status,
                error = %body,
                "Booking backend rejected enquiry"
            );
            return Err(EnquiryError::Booking(format!(
                "backend returned {}: {}",
                status, body
            )));
        }

        debug!(status = %status, "Enquiry accepted by booking backend");
        Ok(())
    }
}
