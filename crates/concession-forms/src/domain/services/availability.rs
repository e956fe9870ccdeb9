//! Timeslot availability
//!
//! Marks timeslots whose recorded count reached the seat ceiling as disabled.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Timeslot;

/// Accepted submissions per timeslot per collection date
pub const SEAT_CEILING: i64 = 60;

/// A `(timeslot, count)` row recorded by the datastore for one date.
///
/// A row without a count leaves the slot open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCount {
    pub timeslot: String,
    #[serde(default)]
    pub count: Option<i64>,
}

impl SlotCount {
    pub fn new(timeslot: impl Into<String>, count: i64) -> Self {
        Self { timeslot: timeslot.into(), count: Some(count) }
    }

    pub fn uncounted(timeslot: impl Into<String>) -> Self {
        Self { timeslot: timeslot.into(), count: None }
    }

    pub fn is_full(&self) -> bool {
        matches!(self.count, Some(count) if count >= SEAT_CEILING)
    }
}

/// A timeslot as offered by the selector
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimeslotOption {
    pub value: Timeslot,
    pub label: &'static str,
    pub disabled: bool,
}

impl TimeslotOption {
    /// The four fixed timeslots, all enabled
    pub fn defaults() -> Vec<TimeslotOption> {
        Timeslot::ALL
            .iter()
            .map(|slot| TimeslotOption { value: *slot, label: slot.label(), disabled: false })
            .collect()
    }
}

/// Recompute `disabled` for every option from the counts recorded for a date.
///
/// A slot with no row stays available. When several rows name the same slot
/// the first one decides.
pub fn resolve_availability(options: &mut [TimeslotOption], counts: &[SlotCount]) {
    for option in options.iter_mut() {
        let recorded = counts.iter().find(|c| c.timeslot == option.value.as_str());
        option.disabled = recorded.map(SlotCount::is_full).unwrap_or(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_disables_full_slots() {
        let mut options = TimeslotOption::defaults();
        let counts = vec![
            SlotCount::new("11.00 AM TO 12.00 PM", 59),
            SlotCount::new("12.00 PM TO 1.00 PM", 60),
            SlotCount::new("2.00 PM TO 3.00 PM", 0),
        ];

        resolve_availability(&mut options, &counts);

        let disabled: Vec<_> = options.iter().map(|o| o.disabled).collect();
        assert_eq!(disabled, vec![false, true, false, false]);
    }

    #[test]
    fn test_refresh_reenables_slots() {
        let mut options = TimeslotOption::defaults();
        resolve_availability(&mut options, &[SlotCount::new("3.00 PM TO 4.00 PM", 75)]);
        assert!(options[3].disabled);

        resolve_availability(&mut options, &[]);
        assert!(options.iter().all(|o| !o.disabled));
    }

    #[test]
    fn test_first_matching_row_wins() {
        let mut options = TimeslotOption::defaults();
        let counts = vec![
            SlotCount::new("11.00 AM TO 12.00 PM", 3),
            SlotCount::new("11.00 AM TO 12.00 PM", 60),
        ];
        resolve_availability(&mut options, &counts);
        assert!(!options[0].disabled);
    }

    #[test]
    fn test_null_count_is_available() {
        let mut options = TimeslotOption::defaults();
        resolve_availability(&mut options, &[SlotCount::uncounted("12.00 PM TO 1.00 PM")]);
        assert!(!options[1].disabled);
    }

    #[test]
    fn test_unknown_timeslots_are_ignored() {
        let mut options = TimeslotOption::defaults();
        resolve_availability(&mut options, &[SlotCount::new("9.00 AM TO 10.00 AM", 99)]);
        assert!(options.iter().all(|o| !o.disabled));
    }
}
