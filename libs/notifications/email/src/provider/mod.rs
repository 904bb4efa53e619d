//! Email provider implementations

pub mod graph;
pub mod mock;

pub use graph::{GraphProvider, SENDER_ADDRESS};
pub use mock::MockMailProvider;

use crate::models::Email;
use async_trait::async_trait;
use eyre::Result;

/// Result of sending an email
#[derive(Debug)]
pub struct SendResult {
    /// Message ID for log correlation (Graph returns no body, so this is
    /// the email's own ID)
    pub message_id: String,
}

/// Trait for email providers
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send an email
    async fn send(&self, email: &Email) -> Result<SendResult>;

    /// Check if the provider is healthy
    async fn health_check(&self) -> Result<()>;

    /// Get provider name
    fn name(&self) -> &'static str;
}
