//! Enquiries Domain
//!
//! Lead capture for driving lessons. An enquiry flows through three steps:
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /api/enquiries
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation, orchestration
//! └──────┬──────┘
//!        │
//!   ┌────┴─────┐
//!   ▼          ▼
//! Booking    Notifier   ← external backend, notification emails
//! ```
//!
//! Nothing is persisted locally. The booking backend owns lead storage and
//! the notifier dispatches the confirmation and lead-alert emails.

pub mod booking;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notifications;
pub mod service;

pub use booking::{BookingClient, HttpBookingClient};
pub use error::{EnquiryError, EnquiryResult};
pub use models::{CarType, EnquiryAck, NewEnquiry};
pub use notifications::Notifier;
pub use service::EnquiryService;
