//! Outbound ports
//!
//! Interfaces the infrastructure layer implements: the datastore, the
//! workflow endpoint and the calendar.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::aggregates::{Submission, SubmissionRecord};
use crate::domain::services::SlotCount;

/// Datastore holding slot counts and submitted applications
#[async_trait]
pub trait ConcessionStore: Send + Sync {
    /// Every `(timeslot, count)` row recorded for `date`
    async fn slot_counts(&self, date: NaiveDate) -> Result<Vec<SlotCount>, RepositoryError>;

    /// Insert one new submission row
    async fn insert_submission(&self, record: &SubmissionRecord) -> Result<(), RepositoryError>;
}

/// External workflow that receives each stored submission
#[async_trait]
pub trait WorkflowNotifier: Send + Sync {
    async fn notify(&self, submission: &Submission) -> Result<(), NotificationError>;
}

/// Source of "today" for date rules
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("workflow endpoint unreachable: {0}")]
    Transport(String),

    #[error("payload encoding failed: {0}")]
    Encoding(String),
}
