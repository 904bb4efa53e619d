use serde::{Deserialize, Serialize};

/// Email message to be sent.
///
/// The message is transient: built from an enquiry or a relay request,
/// handed to a provider, and discarded. Nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    /// Unique identifier for the email (used for log correlation)
    pub id: String,
    /// Recipient email address
    pub to: String,
    /// Email subject
    pub subject: String,
    /// HTML body
    pub body_html: Option<String>,
    /// Sender email (defaults to the provider's configured mailbox)
    pub from: Option<String>,
}

impl Email {
    /// Create a new email with required fields
    pub fn new(to: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            to: to.into(),
            subject: subject.into(),
            body_html: None,
            from: None,
        }
    }

    /// Set HTML body
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.body_html = Some(html.into());
        self
    }

    /// Override the sender address
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_builder() {
        let email = Email::new("student@example.com", "Welcome")
            .with_html("<p>Hello</p>");

        assert_eq!(email.to, "student@example.com");
        assert_eq!(email.subject, "Welcome");
        assert_eq!(email.body_html.as_deref(), Some("<p>Hello</p>"));
        assert!(email.from.is_none());
        assert!(!email.id.is_empty());
    }
}
