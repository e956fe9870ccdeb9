//! Value Objects module
//!
//! Immutable, validated primitives of the concession form.

pub mod age;
pub mod choices;
pub mod field;

pub use age::Age;
pub use choices::{
    ChoiceOption, Course, Gender, PassClass, PassPeriod, RailwayType, Stream, StudyYear, Timeslot,
};
pub use field::FieldName;

/// Identifier of a live form session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SessionId(uuid::Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    pub fn from_uuid(id: uuid::Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
