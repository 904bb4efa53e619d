use chrono::{Duration, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// Loose email shape check. Intentionally unanchored: any non-space local
/// part, an `@`, and a dotted domain somewhere in the value.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Custom validator for required free-text fields
fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Custom validator for phone numbers.
///
/// Formatting characters are ignored; what remains must be exactly ten
/// digits, so "(123) 456-7890" and "1234567890" are equally valid.
fn validate_phone(value: &str) -> Result<(), validator::ValidationError> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        return Err(validator::ValidationError::new("invalid_phone"));
    }
    Ok(())
}

/// Custom validator for email addresses
fn validate_email_shape(value: &str) -> Result<(), validator::ValidationError> {
    if !EMAIL_SHAPE.is_match(value) {
        return Err(validator::ValidationError::new("invalid_email"));
    }
    Ok(())
}

/// Custom validator for the lesson start date. Today and past dates are
/// rejected; the earliest accepted date is tomorrow.
fn validate_start_date(value: &NaiveDate) -> Result<(), validator::ValidationError> {
    let tomorrow = Utc::now().date_naive() + Duration::days(1);
    if *value < tomorrow {
        return Err(validator::ValidationError::new("start_date_too_early"));
    }
    Ok(())
}

/// Transmission type the student wants to learn on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum CarType {
    Manual,
    Automatic,
}

/// A prospective student's enquiry, as submitted by the booking form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewEnquiry {
    /// Student's full name
    #[validate(custom(function = "validate_not_blank"))]
    pub student_name: String,
    /// Ten-digit contact number, formatting characters allowed
    #[validate(custom(function = "validate_phone"))]
    pub phone_number: String,
    /// Contact email address
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,
    /// Manual or Automatic
    pub car_type: CarType,
    /// Pickup area or neighbourhood
    #[validate(custom(function = "validate_not_blank"))]
    pub location: String,
    /// Preferred first-lesson date, tomorrow at the earliest
    #[validate(custom(function = "validate_start_date"))]
    pub start_date: NaiveDate,
}

/// Acknowledgement returned after a successful submission
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnquiryAck {
    pub success: bool,
    pub message: String,
}
