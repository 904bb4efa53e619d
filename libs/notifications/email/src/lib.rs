//! Email notification library for the lead-capture service
//!
//! This library provides everything the service needs to dispatch email:
//!
//! ## Components
//!
//! - **Email Model**: [`Email`] — a transient message (recipient, subject, HTML body)
//! - **Providers**: [`GraphProvider`] (Microsoft Graph via OAuth2
//!   client-credentials) and [`MockMailProvider`] (capturing, for tests and
//!   local development)
//! - **Templates**: Handlebars-based [`TemplateEngine`] with the enquiry
//!   confirmation and staff lead-alert templates
//! - **Relay route**: [`handlers::router`] — the `POST /api/send-email`
//!   surface accepting `{ toEmail, subject, body }`

// Core modules
pub mod error;
pub mod handlers;
pub mod models;
pub mod provider;
pub mod templates;

// Re-export main types
pub use error::RelayError;
pub use handlers::{SendEmailRequest, SendEmailResponse};
pub use models::Email;
pub use provider::{EmailProvider, GraphProvider, MockMailProvider, SendResult};
pub use templates::{EmailTemplate, RenderedTemplate, TemplateEngine};
