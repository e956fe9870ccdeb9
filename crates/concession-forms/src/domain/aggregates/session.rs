//! Form Session Aggregate
//!
//! Owns everything one applicant edits: the submission, live validation
//! messages, the timeslot selector and the submit state machine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::submission::{Submission, SubmissionRecord};
use crate::domain::events::SessionEvent;
use crate::domain::services::{
    parse_date, resolve_availability, validate_collection_date, validate_contact, validate_dob,
    validate_sap_id, FieldError, SlotCount, TimeslotOption,
};
use crate::domain::value_objects::{FieldName, SessionId, Timeslot};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Editing,
    Loading,
    Submitted,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Editing => write!(f, "editing"),
            Self::Loading => write!(f, "loading"),
            Self::Submitted => write!(f, "submitted"),
        }
    }
}

/// Current message per validated field; empty means no error
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    pub sap_id: String,
    pub contact: String,
    pub dob: String,
    #[serde(rename = "collectiondate")]
    pub collection_date: String,
}

impl ValidationErrors {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::SapId => Some(&self.sap_id),
            FieldName::Contact => Some(&self.contact),
            FieldName::Dob => Some(&self.dob),
            FieldName::CollectionDate => Some(&self.collection_date),
            _ => None,
        }
    }

    fn record(&mut self, field: FieldName, outcome: Result<(), FieldError>) {
        let slot = match field {
            FieldName::SapId => &mut self.sap_id,
            FieldName::Contact => &mut self.contact,
            FieldName::Dob => &mut self.dob,
            FieldName::CollectionDate => &mut self.collection_date,
            _ => return,
        };
        *slot = outcome.err().map(|e| e.to_string()).unwrap_or_default();
    }

    /// Validated fields currently carrying a message
    pub fn failing(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|f| self.get(*f).map(|m| !m.is_empty()).unwrap_or(false))
            .collect()
    }

    pub fn is_clear(&self) -> bool {
        self.failing().is_empty()
    }
}

/// Follow-up work a field change asks of the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEffect {
    None,
    /// A valid collection date was entered; resolve its availability
    ResolveAvailability(NaiveDate),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session is {0}, not editing")]
    NotEditable(SessionState),

    #[error("{0} is derived and cannot be set")]
    DerivedField(FieldName),

    #[error("'{value}' is not a valid choice for {field}")]
    InvalidChoice { field: FieldName, value: String },

    #[error("timeslot '{0}' is full")]
    TimeslotUnavailable(Timeslot),

    #[error("select a valid collection date before choosing a timeslot")]
    NoCollectionDate,

    #[error("Please fill in all the fields. Missing: {}", join_fields(.0))]
    Incomplete(Vec<FieldName>),

    #[error("Please correct the highlighted fields: {}", join_fields(.0))]
    Invalid(Vec<FieldName>),

    #[error("no submission in flight (session is {0})")]
    NotLoading(SessionState),
}

fn join_fields(fields: &[FieldName]) -> String {
    fields.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
}

/// Form session aggregate root
#[derive(Clone, Debug)]
pub struct FormSession {
    id: SessionId,
    state: SessionState,
    submission: Submission,
    errors: ValidationErrors,
    timeslots: Vec<TimeslotOption>,
    last_error: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    events: Vec<SessionEvent>,
}

impl FormSession {
    pub fn open() -> Self {
        let now = Utc::now();
        let id = SessionId::new();
        let mut session = Self {
            id,
            state: SessionState::Editing,
            submission: Submission::default(),
            errors: ValidationErrors::default(),
            timeslots: TimeslotOption::defaults(),
            last_error: None,
            created_at: now,
            updated_at: now,
            events: vec![],
        };
        session.raise_event(SessionEvent::Opened { session_id: id, opened_at: now });
        session
    }

    pub fn id(&self) -> SessionId { self.id }
    pub fn state(&self) -> SessionState { self.state }
    pub fn submission(&self) -> &Submission { &self.submission }
    pub fn errors(&self) -> &ValidationErrors { &self.errors }
    pub fn timeslots(&self) -> &[TimeslotOption] { &self.timeslots }
    pub fn last_error(&self) -> Option<&str> { self.last_error.as_deref() }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    /// The collection date, if one is set and passed validation
    pub fn valid_collection_date(&self) -> Option<NaiveDate> {
        self.submission
            .collection_date
            .filter(|_| self.errors.collection_date.is_empty())
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Apply one field change event.
    ///
    /// Validation failures are recorded in [`ValidationErrors`] and do not make
    /// this return an error; `Err` means the change was refused outright and
    /// the session is untouched.
    pub fn change_field(
        &mut self,
        field: FieldName,
        value: &str,
        today: NaiveDate,
    ) -> Result<FieldEffect, SessionError> {
        self.ensure_editing()?;

        let mut effect = FieldEffect::None;
        let s = &mut self.submission;
        match field {
            FieldName::Age => return Err(SessionError::DerivedField(field)),
            FieldName::FirstName => s.first_name = value.to_string(),
            FieldName::LastName => s.last_name = value.to_string(),
            FieldName::Address => s.address = value.to_string(),
            FieldName::School => s.school = value.to_string(),
            FieldName::Station => s.station = value.to_string(),
            FieldName::SapId => {
                s.sap_id = value.to_string();
                self.errors.record(field, validate_sap_id(value));
            }
            FieldName::Contact => {
                s.contact = value.to_string();
                self.errors.record(field, validate_contact(value));
            }
            FieldName::Gender => s.gender = parse_choice(field, value)?,
            FieldName::Course => s.course = parse_choice(field, value)?,
            FieldName::Stream => s.stream = parse_choice(field, value)?,
            FieldName::Year => s.year = parse_choice(field, value)?,
            FieldName::ClassForPass => s.class_for_pass = parse_choice(field, value)?,
            FieldName::PassPeriod => s.pass_period = parse_choice(field, value)?,
            FieldName::RailwayType => s.railway_type = parse_choice(field, value)?,
            FieldName::Timeslot => {
                let slot: Option<Timeslot> = parse_choice(field, value)?;
                if let Some(slot) = slot {
                    if self.valid_collection_date().is_none() {
                        return Err(SessionError::NoCollectionDate);
                    }
                    let full = self.timeslots.iter().any(|o| o.value == slot && o.disabled);
                    if full {
                        return Err(SessionError::TimeslotUnavailable(slot));
                    }
                }
                self.submission.timeslot = slot;
            }
            FieldName::Dob => self.change_dob(value, today),
            FieldName::CollectionDate => effect = self.change_collection_date(value, today),
        }

        let error = self.errors.get(field).unwrap_or_default().to_string();
        self.raise_event(SessionEvent::FieldChanged { field, error });
        self.touch();
        Ok(effect)
    }

    fn change_dob(&mut self, value: &str, today: NaiveDate) {
        self.submission.age.clear();
        if value.trim().is_empty() {
            self.submission.dob = None;
            self.errors.record(FieldName::Dob, Ok(()));
            return;
        }

        let outcome = parse_date(value).and_then(|birth| {
            self.submission.dob = Some(birth);
            validate_dob(birth, today)
        });
        match outcome {
            Ok(age) => {
                self.submission.age = age.to_string();
                self.errors.record(FieldName::Dob, Ok(()));
            }
            Err(e) => {
                if e == FieldError::InvalidDate {
                    self.submission.dob = None;
                }
                self.errors.record(FieldName::Dob, Err(e));
            }
        }
    }

    fn change_collection_date(&mut self, value: &str, today: NaiveDate) -> FieldEffect {
        if value.trim().is_empty() {
            self.set_collection_date(None);
            self.errors.record(FieldName::CollectionDate, Ok(()));
            return FieldEffect::None;
        }

        match parse_date(value) {
            Ok(date) => {
                self.set_collection_date(Some(date));
                let outcome = validate_collection_date(date, today);
                let accepted = outcome.is_ok();
                self.errors.record(FieldName::CollectionDate, outcome);
                if accepted {
                    FieldEffect::ResolveAvailability(date)
                } else {
                    FieldEffect::None
                }
            }
            Err(e) => {
                self.set_collection_date(None);
                self.errors.record(FieldName::CollectionDate, Err(e));
                FieldEffect::None
            }
        }
    }

    /// A chosen timeslot only holds for the date it was picked against
    fn set_collection_date(&mut self, date: Option<NaiveDate>) {
        if self.submission.collection_date != date {
            self.submission.timeslot = None;
        }
        self.submission.collection_date = date;
    }

    /// Recompute the selector from counts recorded for `date`
    pub fn apply_availability(&mut self, date: NaiveDate, counts: &[SlotCount]) {
        resolve_availability(&mut self.timeslots, counts);
        let disabled = self
            .timeslots
            .iter()
            .filter(|o| o.disabled)
            .map(|o| o.value)
            .collect();
        self.raise_event(SessionEvent::AvailabilityRefreshed { collection_date: date, disabled });
        self.touch();
    }

    // =========================================================================
    // Submit state machine
    // =========================================================================

    /// Editing -> Loading, yielding the row to persist.
    ///
    /// Refused while any field is empty or carries a validation message.
    pub fn begin_submit(&mut self) -> Result<SubmissionRecord, SessionError> {
        self.ensure_editing()?;

        let record = self.submission.to_record().map_err(SessionError::Incomplete)?;
        let failing = self.errors.failing();
        if !failing.is_empty() {
            return Err(SessionError::Invalid(failing));
        }

        self.last_error = None;
        self.transition(SessionState::Loading);
        Ok(record)
    }

    /// Loading -> Editing after the record could not be stored
    pub fn fail_submit(&mut self, reason: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_loading()?;
        self.last_error = Some(reason.into());
        self.transition(SessionState::Editing);
        Ok(())
    }

    /// Loading -> Submitted once the record is stored
    pub fn complete_submit(&mut self) -> Result<(), SessionError> {
        self.ensure_loading()?;
        self.transition(SessionState::Submitted);
        Ok(())
    }

    // =========================================================================
    // Domain Events
    // =========================================================================

    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn raise_event(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    fn transition(&mut self, to: SessionState) {
        let from = self.state;
        self.state = to;
        self.raise_event(SessionEvent::StateChanged { from, to });
        self.touch();
    }

    fn ensure_editing(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Editing => Ok(()),
            other => Err(SessionError::NotEditable(other)),
        }
    }

    fn ensure_loading(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Loading => Ok(()),
            other => Err(SessionError::NotLoading(other)),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Empty clears a select; anything else must be one of its values
fn parse_choice<T: std::str::FromStr>(field: FieldName, value: &str) -> Result<Option<T>, SessionError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| SessionError::InvalidChoice { field, value: value.to_string() })
}
