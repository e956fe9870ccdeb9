//! Railway concession application forms
//!
//! Students fill in a concession request field by field. Each change is
//! validated on the spot, the collection timeslots are checked against the
//! datastore's per-day counts, and a complete form is stored and forwarded
//! to the workflow endpoint.
//!
//! ## Layout
//! - `domain`: form session state machine, field rules, slot availability
//! - `ports`: use case trait and the datastore/notifier/clock seams
//! - `application`: session registry and the submit sequence
//! - `infrastructure`: PostgREST, webhook, in-memory and clock adapters

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{ChangeFieldCommand, ConcessionService, Delivery, SessionRegistry, SessionView};
pub use domain::aggregates::{FormSession, SessionState, Submission, SubmissionRecord};
pub use domain::services::{TimeslotOption, SEAT_CEILING};
pub use domain::value_objects::{FieldName, SessionId, Timeslot};
pub use ports::inbound::{ConcessionUseCases, UseCaseError};
pub use ports::outbound::{Clock, ConcessionStore, WorkflowNotifier};
