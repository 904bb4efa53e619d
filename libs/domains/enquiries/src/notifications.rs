//! Email notifications for accepted enquiries.
//!
//! Two messages go out after the booking backend accepts an enquiry: a
//! confirmation to the student and a lead alert to the staff mailbox.
//! Both sends are fire-and-forget. A notification failure never fails
//! the submission; it is logged and the student still sees success.

use crate::models::NewEnquiry;
use chrono::{Datelike, Utc};
use email::models::Email;
use email::provider::{EmailProvider, SENDER_ADDRESS};
use email::templates::{TEMPLATE_ENQUIRY_CONFIRMATION, TEMPLATE_LEAD_ALERT, TemplateEngine};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

/// Dispatches enquiry notification emails
#[derive(Clone)]
pub struct Notifier {
    provider: Arc<dyn EmailProvider>,
    templates: Arc<TemplateEngine>,
}

impl Notifier {
    pub fn new(provider: Arc<dyn EmailProvider>, templates: Arc<TemplateEngine>) -> Self {
        Self {
            provider,
            templates,
        }
    }

    /// Queue both notification emails for an accepted enquiry.
    ///
    /// Returns immediately; the sends run as background tasks.
    pub fn enquiry_submitted(&self, enquiry: &NewEnquiry) {
        let data = json!({
            "student_name": enquiry.student_name,
            "phone_number": enquiry.phone_number,
            "email": enquiry.email,
            "car_type": enquiry.car_type.to_string(),
            "location": enquiry.location,
            "start_date": enquiry.start_date.to_string(),
            "year": Utc::now().year(),
        });

        self.dispatch(TEMPLATE_ENQUIRY_CONFIRMATION, &enquiry.email, &data);
        self.dispatch(TEMPLATE_LEAD_ALERT, SENDER_ADDRESS, &data);
    }

    /// Render one template and send it in a background task
    fn dispatch(&self, template: &'static str, to: &str, data: &serde_json::Value) {
        let rendered = match self.templates.render(template, data) {
            Ok(rendered) => rendered,
            Err(e) => {
                error!(template, "Failed to render notification email: {}", e);
                return;
            }
        };

        let email = Email::new(to, rendered.subject).with_html(rendered.body_html);
        let provider = Arc::clone(&self.provider);

        tokio::spawn(async move {
            match provider.send(&email).await {
                Ok(result) => {
                    debug!(
                        template,
                        message_id = %result.message_id,
                        to = %email.to,
                        "Notification email sent"
                    );
                }
                Err(e) => {
                    error!(template, to = %email.to, "Failed to send notification email: {}", e);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CarType;
    use chrono::Duration;
    use email::MockMailProvider;

    fn enquiry() -> NewEnquiry {
        NewEnquiry {
            student_name: "Asha Rao".to_string(),
            phone_number: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            car_type: CarType::Automatic,
            location: "Andheri West".to_string(),
            start_date: Utc::now().date_naive() + Duration::days(3),
        }
    }

    fn notifier(provider: MockMailProvider) -> Notifier {
        Notifier::new(
            Arc::new(provider),
            Arc::new(TemplateEngine::new().unwrap()),
        )
    }

    #[tokio::test]
    async fn test_sends_confirmation_and_lead_alert() {
        let provider = MockMailProvider::new();
        let notifier = notifier(provider.clone());

        notifier.enquiry_submitted(&enquiry());

        // Let the spawned send tasks run
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        assert_eq!(provider.sent_count().await, 2);
        assert!(provider.was_sent_to("asha@example.com").await);
        assert!(provider.was_sent_to(SENDER_ADDRESS).await);
    }

    #[tokio::test]
    async fn test_send_failure_does_not_panic() {
        let provider = MockMailProvider::failing("graph is down");
        let notifier = notifier(provider.clone());

        notifier.enquiry_submitted(&enquiry());

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        assert_eq!(provider.sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_confirmation_contains_enquiry_details() {
        let provider = MockMailProvider::new();
        let notifier = notifier(provider.clone());

        notifier.enquiry_submitted(&enquiry());

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        let sent = provider.sent_emails().await;
        let confirmation = sent
            .iter()
            .find(|e| e.to == "asha@example.com")
            .expect("confirmation email");

        assert_eq!(confirmation.subject, "DrivingMaster Enquiry Confirmation");
        let body = confirmation.body_html.as_deref().unwrap();
        assert!(body.contains("Asha Rao"));
        assert!(body.contains("Automatic"));
    }
}
