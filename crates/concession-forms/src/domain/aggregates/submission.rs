//! Submission
//!
//! The application being filled in, and the row it becomes once complete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Course, FieldName, Gender, PassClass, PassPeriod, RailwayType, Stream, StudyYear, Timeslot,
};

pub const DEFAULT_SCHOOL: &str = "MPSTME";

/// In-memory form data, serialized with the form's camelCase names
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub school: String,
    pub sap_id: String,
    pub contact: String,
    pub gender: Option<Gender>,
    pub dob: Option<NaiveDate>,
    pub age: String,
    pub course: Option<Course>,
    pub stream: Option<Stream>,
    pub year: Option<StudyYear>,
    pub class_for_pass: Option<PassClass>,
    pub pass_period: Option<PassPeriod>,
    pub railway_type: Option<RailwayType>,
    pub station: String,
    #[serde(rename = "collectiondate")]
    pub collection_date: Option<NaiveDate>,
    pub timeslot: Option<Timeslot>,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            school: DEFAULT_SCHOOL.to_string(),
            sap_id: String::new(),
            contact: String::new(),
            gender: None,
            dob: None,
            age: String::new(),
            course: None,
            stream: None,
            year: None,
            class_for_pass: None,
            pass_period: None,
            railway_type: None,
            station: String::new(),
            collection_date: None,
            timeslot: None,
        }
    }
}

impl Submission {
    pub fn is_empty(&self, field: FieldName) -> bool {
        match field {
            FieldName::FirstName => self.first_name.is_empty(),
            FieldName::LastName => self.last_name.is_empty(),
            FieldName::Address => self.address.is_empty(),
            FieldName::School => self.school.is_empty(),
            FieldName::SapId => self.sap_id.is_empty(),
            FieldName::Contact => self.contact.is_empty(),
            FieldName::Gender => self.gender.is_none(),
            FieldName::Dob => self.dob.is_none(),
            FieldName::Age => self.age.is_empty(),
            FieldName::Course => self.course.is_none(),
            FieldName::Stream => self.stream.is_none(),
            FieldName::Year => self.year.is_none(),
            FieldName::ClassForPass => self.class_for_pass.is_none(),
            FieldName::PassPeriod => self.pass_period.is_none(),
            FieldName::RailwayType => self.railway_type.is_none(),
            FieldName::Station => self.station.is_empty(),
            FieldName::CollectionDate => self.collection_date.is_none(),
            FieldName::Timeslot => self.timeslot.is_none(),
        }
    }

    /// Empty fields in form order
    pub fn missing_fields(&self) -> Vec<FieldName> {
        FieldName::ALL.into_iter().filter(|f| self.is_empty(*f)).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Row for `form_submissions`, or the missing fields
    pub fn to_record(&self) -> Result<SubmissionRecord, Vec<FieldName>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }

        let text = |v: Option<&'static str>| v.unwrap_or_default().to_string();
        let day = |v: Option<NaiveDate>| v.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();

        Ok(SubmissionRecord {
            firstname: self.first_name.clone(),
            lastname: self.last_name.clone(),
            address: self.address.clone(),
            school: self.school.clone(),
            sapid: self.sap_id.clone(),
            contact: self.contact.clone(),
            gender: text(self.gender.map(|g| g.as_str())),
            dob: day(self.dob),
            age: self.age.clone(),
            course: text(self.course.map(|c| c.as_str())),
            stream: text(self.stream.map(|s| s.as_str())),
            year: text(self.year.map(|y| y.as_str())),
            classforpass: text(self.class_for_pass.map(|c| c.as_str())),
            passperiod: text(self.pass_period.map(|p| p.as_str())),
            railwaytype: text(self.railway_type.map(|r| r.as_str())),
            station: self.station.clone(),
            collectiondate: day(self.collection_date),
            timeslot: text(self.timeslot.map(|t| t.as_str())),
        })
    }
}

/// A persisted submission, keyed by lower-cased column names
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub firstname: String,
    pub lastname: String,
    pub address: String,
    pub school: String,
    pub sapid: String,
    pub contact: String,
    pub gender: String,
    pub dob: String,
    pub age: String,
    pub course: String,
    pub stream: String,
    pub year: String,
    pub classforpass: String,
    pub passperiod: String,
    pub railwaytype: String,
    pub station: String,
    pub collectiondate: String,
    pub timeslot: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn complete_submission() -> Submission {
        Submission {
            first_name: "Asha".into(),
            last_name: "Kulkarni".into(),
            address: "12 Link Road, Andheri West".into(),
            school: DEFAULT_SCHOOL.into(),
            sap_id: "70012345678".into(),
            contact: "9876543210".into(),
            gender: Some(Gender::Female),
            dob: NaiveDate::from_ymd_opt(2006, 3, 10),
            age: "20 years 7 months".into(),
            course: Some(Course::BTech),
            stream: Some(Stream::DataScience),
            year: Some(StudyYear::Third),
            class_for_pass: Some(PassClass::Second),
            pass_period: Some(PassPeriod::Monthly),
            railway_type: Some(RailwayType::Western),
            station: "Borivali".into(),
            collection_date: NaiveDate::from_ymd_opt(2026, 10, 19),
            timeslot: Some(Timeslot::Noon),
        }
    }
}
