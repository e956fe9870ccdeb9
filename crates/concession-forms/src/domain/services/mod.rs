//! Domain Services
//!
//! Stateless rules that don't belong to a single aggregate.

pub mod availability;
pub mod validation;

pub use availability::{resolve_availability, SlotCount, TimeslotOption, SEAT_CEILING};
pub use validation::{
    parse_date, validate_collection_date, validate_contact, validate_dob, validate_sap_id,
    FieldError, MAX_AGE_YEARS, MIN_AGE_YEARS, MIN_COLLECTION_OFFSET_DAYS,
};
