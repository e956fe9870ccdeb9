//! Field validation rules
//!
//! Pure checks run on every field change. Each returns the message shown
//! beside the field when the value is rejected.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;

use crate::domain::value_objects::Age;

pub const SAP_ID_LENGTH: usize = 11;
pub const CONTACT_LENGTH: usize = 10;
pub const MIN_AGE_YEARS: i32 = 14;
pub const MAX_AGE_YEARS: i32 = 25;
pub const MIN_COLLECTION_OFFSET_DAYS: i64 = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("SAP ID should be 11 digits")]
    SapIdLength,

    #[error("Mobile number should be 10 digits")]
    ContactLength,

    #[error("Age should be between 14 and 25 years")]
    AgeOutOfRange,

    #[error("Collection date must be at least two days from today")]
    CollectionTooSoon,

    #[error("Collection date cannot be on a Saturday or Sunday")]
    CollectionOnWeekend,

    #[error("Enter a valid date")]
    InvalidDate,
}

/// SAP IDs are checked for length only
pub fn validate_sap_id(value: &str) -> Result<(), FieldError> {
    if value.chars().count() != SAP_ID_LENGTH {
        return Err(FieldError::SapIdLength);
    }
    Ok(())
}

pub fn validate_contact(value: &str) -> Result<(), FieldError> {
    if value.chars().count() != CONTACT_LENGTH {
        return Err(FieldError::ContactLength);
    }
    Ok(())
}

/// Returns the derived age when it falls inside the eligible range
pub fn validate_dob(birth: NaiveDate, today: NaiveDate) -> Result<Age, FieldError> {
    let age = Age::between(birth, today);
    if !age.within(MIN_AGE_YEARS, MAX_AGE_YEARS) {
        return Err(FieldError::AgeOutOfRange);
    }
    Ok(age)
}

/// The offset rule is checked before the weekend rule.
pub fn validate_collection_date(date: NaiveDate, today: NaiveDate) -> Result<(), FieldError> {
    if date < today + Duration::days(MIN_COLLECTION_OFFSET_DAYS) {
        return Err(FieldError::CollectionTooSoon);
    }
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return Err(FieldError::CollectionOnWeekend);
    }
    Ok(())
}

/// Parse an ISO `YYYY-MM-DD` date as sent by date inputs
pub fn parse_date(value: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| FieldError::InvalidDate)
}
