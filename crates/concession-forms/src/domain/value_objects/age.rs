//! Age Value Object
//!
//! Elapsed years and months between a birthdate and a reference day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Age in whole years plus the whole months beyond them
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    years: i32,
    months: u32,
}

impl Age {
    /// Compute the age on `today` for someone born on `birth`.
    ///
    /// Only the year and month components are compared; the day of month is
    /// ignored, so someone born on the 30th counts the new month from the 1st.
    /// A birthdate after `today` yields a negative year count.
    pub fn between(birth: NaiveDate, today: NaiveDate) -> Self {
        let years = today.year() - birth.year();
        let months = today.month() as i32 - birth.month() as i32;
        let total = years * 12 + months;

        Self {
            years: total.div_euclid(12),
            months: total.rem_euclid(12) as u32,
        }
    }

    pub fn years(&self) -> i32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    /// Whether the age in years lies within `min..=max`
    pub fn within(&self, min: i32, max: i32) -> bool {
        (min..=max).contains(&self.years)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years {} months", self.years, self.months)
    }
}
