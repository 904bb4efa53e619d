//! # Axum Helpers
//!
//! A collection of utilities and helpers shared by the HTTP surface of the
//! lead-capture service.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (validated JSON)
//! - **[`health`]**: Liveness endpoint
//! - **[`shutdown`]**: Graceful shutdown signal handling

pub mod errors;
pub mod extractors;
pub mod health;
pub mod shutdown;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export health types
pub use health::{HealthResponse, health_router};

// Re-export shutdown helper
pub use shutdown::shutdown_signal;
