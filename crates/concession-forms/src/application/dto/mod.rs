//! Data Transfer Objects (DTOs)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::{FormSession, SessionState, Submission, ValidationErrors};
use crate::domain::services::TimeslotOption;
use crate::domain::value_objects::SessionId;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChangeFieldCommand {
    pub session_id: SessionId,
    pub field: String,
    pub value: String,
}

/// Snapshot of a session as returned to clients
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: SessionId,
    pub state: SessionState,
    pub submission: Submission,
    pub errors: ValidationErrors,
    pub timeslots: Vec<TimeslotOption>,
    /// The selector is only offered once a valid collection date is set
    pub timeslot_selectable: bool,
    pub last_error: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<&FormSession> for SessionView {
    fn from(session: &FormSession) -> Self {
        Self {
            id: session.id(),
            state: session.state(),
            submission: session.submission().clone(),
            errors: session.errors().clone(),
            timeslots: session.timeslots().to_vec(),
            timeslot_selectable: session.valid_collection_date().is_some(),
            last_error: session.last_error().map(str::to_string),
            updated_at: session.updated_at(),
        }
    }
}
