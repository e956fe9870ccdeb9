//! Inbound ports (Use case traits)
//!
//! What the portal may ask of a form session.

use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::{ChangeFieldCommand, SessionView};
use crate::domain::aggregates::SessionError;
use crate::domain::services::TimeslotOption;
use crate::domain::value_objects::SessionId;

#[async_trait]
pub trait ConcessionUseCases: Send + Sync {
    /// Start a new, empty application
    async fn open_session(&self) -> Result<SessionView, UseCaseError>;

    /// Current state, or the confirmation once submitted
    async fn get_session(&self, id: SessionId) -> Result<SessionView, UseCaseError>;

    /// Apply one field change event
    async fn change_field(&self, command: ChangeFieldCommand) -> Result<SessionView, UseCaseError>;

    /// The timeslot selector was opened; refresh availability
    async fn open_timeslot_selector(&self, id: SessionId) -> Result<Vec<TimeslotOption>, UseCaseError>;

    /// Validate, re-check availability, persist and notify
    async fn submit(&self, id: SessionId) -> Result<SessionView, UseCaseError>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    #[error("session {0} not found")]
    NotFound(SessionId),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    /// Submission refused before any network call
    #[error("{0}")]
    Rejected(String),

    #[error("a valid collection date is required first")]
    NoCollectionDate,

    #[error("An error occurred: {0}")]
    Persistence(String),
}

impl From<SessionError> for UseCaseError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotEditable(_) | SessionError::NotLoading(_) => {
                Self::Conflict(err.to_string())
            }
            SessionError::Incomplete(_) | SessionError::Invalid(_) => Self::Rejected(err.to_string()),
            SessionError::DerivedField(_)
            | SessionError::InvalidChoice { .. }
            | SessionError::TimeslotUnavailable(_)
            | SessionError::NoCollectionDate => Self::BadRequest(err.to_string()),
        }
    }
}
