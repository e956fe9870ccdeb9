//! Domain Events
//!
//! Raised by the form session to record what happened during an event.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::aggregates::SessionState;
use crate::domain::value_objects::{FieldName, SessionId, Timeslot};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    Opened {
        session_id: SessionId,
        opened_at: DateTime<Utc>,
    },

    FieldChanged {
        field: FieldName,
        /// Message recorded for the field, empty when accepted
        error: String,
    },

    AvailabilityRefreshed {
        collection_date: NaiveDate,
        disabled: Vec<Timeslot>,
    },

    StateChanged {
        from: SessionState,
        to: SessionState,
    },
}
