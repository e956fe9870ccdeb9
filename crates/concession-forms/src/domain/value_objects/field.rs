//! Form field names
//!
//! Change events address fields by the camelCase names the form uses; the
//! datastore uses the same names lower-cased.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    LastName,
    #[serde(rename = "address")]
    Address,
    #[serde(rename = "school")]
    School,
    #[serde(rename = "sapId")]
    SapId,
    #[serde(rename = "contact")]
    Contact,
    #[serde(rename = "gender")]
    Gender,
    #[serde(rename = "dob")]
    Dob,
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "course")]
    Course,
    #[serde(rename = "stream")]
    Stream,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "classForPass")]
    ClassForPass,
    #[serde(rename = "passPeriod")]
    PassPeriod,
    #[serde(rename = "railwayType")]
    RailwayType,
    #[serde(rename = "station")]
    Station,
    #[serde(rename = "collectiondate")]
    CollectionDate,
    #[serde(rename = "timeslot")]
    Timeslot,
}

impl FieldName {
    /// Every field in form order
    pub const ALL: [FieldName; 18] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Address,
        FieldName::School,
        FieldName::SapId,
        FieldName::Contact,
        FieldName::Gender,
        FieldName::Dob,
        FieldName::Age,
        FieldName::Course,
        FieldName::Stream,
        FieldName::Year,
        FieldName::ClassForPass,
        FieldName::PassPeriod,
        FieldName::RailwayType,
        FieldName::Station,
        FieldName::CollectionDate,
        FieldName::Timeslot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address => "address",
            Self::School => "school",
            Self::SapId => "sapId",
            Self::Contact => "contact",
            Self::Gender => "gender",
            Self::Dob => "dob",
            Self::Age => "age",
            Self::Course => "course",
            Self::Stream => "stream",
            Self::Year => "year",
            Self::ClassForPass => "classForPass",
            Self::PassPeriod => "passPeriod",
            Self::RailwayType => "railwayType",
            Self::Station => "station",
            Self::CollectionDate => "collectiondate",
            Self::Timeslot => "timeslot",
        }
    }

    /// Column name in the `form_submissions` table
    pub fn column(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Fields carrying a live validation message
    pub fn is_validated(&self) -> bool {
        matches!(self, Self::SapId | Self::Contact | Self::Dob | Self::CollectionDate)
    }

    /// Derived fields cannot be set by change events
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Age)
    }
}

impl std::str::FromStr for FieldName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|f| f.as_str() == s).ok_or(())
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names_are_lowercase() {
        assert_eq!(FieldName::ClassForPass.column(), "classforpass");
        assert_eq!(FieldName::SapId.column(), "sapid");
        assert_eq!(FieldName::CollectionDate.column(), "collectiondate");
    }

    #[test]
    fn test_parse_round_trips_every_field() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
        assert!("SapId".parse::<FieldName>().is_err());
    }
}
