//! Business logic for enquiry submission.

use crate::booking::BookingClient;
use crate::error::{EnquiryError, EnquiryResult};
use crate::models::{EnquiryAck, NewEnquiry};
use crate::notifications::Notifier;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Orchestrates validation, forwarding and notifications for one enquiry
#[derive(Clone)]
pub struct EnquiryService<B: BookingClient> {
    booking: Arc<B>,
    notifier: Notifier,
}

impl<B: BookingClient> EnquiryService<B> {
    pub fn new(booking: B, notifier: Notifier) -> Self {
        Self {
            booking: Arc::new(booking),
            notifier,
        }
    }

    /// Submit an enquiry.
    ///
    /// The enquiry is validated, forwarded to the booking backend, and on
    /// acceptance both notification emails are queued. The backend call is
    /// the only step that can fail the submission; notification sends are
    /// fire-and-forget.
    pub async fn submit(&self, enquiry: NewEnquiry) -> EnquiryResult<EnquiryAck> {
        enquiry
            .validate()
            .map_err(|e| EnquiryError::Validation(e.to_string()))?;

        self.booking.submit(&enquiry).await?;

        info!(
            student = %enquiry.student_name,
            car_type = %enquiry.car_type,
            location = %enquiry.location,
            "Enquiry accepted"
        );

        self.notifier.enquiry_submitted(&enquiry);

        Ok(EnquiryAck {
            success: true,
            message: "Enquiry submitted successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::MockBookingClient;
    use crate::models::CarType;
    use chrono::{Duration, Utc};
    use email::{MockMailProvider, TemplateEngine};

    fn enquiry() -> NewEnquiry {
        NewEnquiry {
            student_name: "Asha Rao".to_string(),
            phone_number: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            car_type: CarType::Manual,
            location: "Andheri West".to_string(),
            start_date: Utc::now().date_naive() + Duration::days(3),
        }
    }

    fn notifier(provider: &MockMailProvider) -> Notifier {
        Notifier::new(
            Arc::new(provider.clone()),
            Arc::new(TemplateEngine::new().unwrap()),
        )
    }

    #[tokio::test]
    async fn test_submit_forwards_and_notifies() {
        let mut booking = MockBookingClient::new();
        booking.expect_submit().times(1).returning(|_| Ok(()));

        let provider = MockMailProvider::new();
        let service = EnquiryService::new(booking, notifier(&provider));

        let ack = service.submit(enquiry()).await.unwrap();
        assert!(ack.success);

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(provider.sent_count().await, 2);
    }

    #[tokio::test]
    async fn test_invalid_enquiry_never_reaches_backend() {
        let mut booking = MockBookingClient::new();
        booking.expect_submit().times(0);

        let provider = MockMailProvider::new();
        let service = EnquiryService::new(booking, notifier(&provider));

        let mut bad = enquiry();
        bad.phone_number = "12345".to_string();

        let result = service.submit(bad).await;
        assert!(matches!(result, Err(EnquiryError::Validation(_))));
        assert_eq!(provider.sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_backend_failure_sends_no_emails() {
        let mut booking = MockBookingClient::new();
        booking
            .expect_submit()
            .times(1)
            .returning(|_| Err(EnquiryError::Booking("backend returned 500".to_string())));

        let provider = MockMailProvider::new();
        let service = EnquiryService::new(booking, notifier(&provider));

        let result = service.submit(enquiry()).await;
        assert!(matches!(result, Err(EnquiryError::Booking(_))));

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(provider.sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_notification_failure_still_succeeds() {
        let mut booking = MockBookingClient::new();
        booking.expect_submit().times(1).returning(|_| Ok(()));

        let provider = MockMailProvider::failing("graph is down");
        let service = EnquiryService::new(booking, notifier(&provider));

        let ack = service.submit(enquiry()).await.unwrap();
        assert!(ack.success);
    }
}
