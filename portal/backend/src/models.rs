//! Data Models

use concession_forms::domain::value_objects::{
    ChoiceOption, Course, FieldName, Gender, PassClass, PassPeriod, RailwayType, Stream, StudyYear,
    Timeslot,
};
use concession_forms::domain::aggregates::DEFAULT_SCHOOL;
use serde::{Deserialize, Serialize};

pub const STATION_NOTE: &str = "Applicable only till Vile Parle Station";

/// Everything a client needs to render the form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub fields: Vec<&'static str>,
    pub school: &'static str,
    pub station_note: &'static str,
    pub gender: Vec<ChoiceOption>,
    pub course: Vec<ChoiceOption>,
    pub stream: Vec<ChoiceOption>,
    pub year: Vec<ChoiceOption>,
    pub class_for_pass: Vec<ChoiceOption>,
    pub pass_period: Vec<ChoiceOption>,
    pub railway_type: Vec<ChoiceOption>,
    pub timeslot: Vec<ChoiceOption>,
}

impl FormSchema {
    pub fn current() -> Self {
        Self {
            fields: FieldName::ALL.iter().map(|f| f.as_str()).collect(),
            school: DEFAULT_SCHOOL,
            station_note: STATION_NOTE,
            gender: Gender::options(),
            course: Course::options(),
            stream: Stream::options(),
            year: StudyYear::options(),
            class_for_pass: PassClass::options(),
            pass_period: PassPeriod::options(),
            railway_type: RailwayType::options(),
            timeslot: Timeslot::options(),
        }
    }
}

/// One field change event
#[derive(Debug, Clone, Deserialize)]
pub struct FieldChangeRequest {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}
