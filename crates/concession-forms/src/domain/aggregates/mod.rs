//! Aggregates module

pub mod session;
pub mod submission;

pub use session::{FieldEffect, FormSession, SessionError, SessionState, ValidationErrors};
pub use submission::{Submission, SubmissionRecord, DEFAULT_SCHOOL};
