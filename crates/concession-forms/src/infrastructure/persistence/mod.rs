//! In-memory datastore
//!
//! Keeps submissions and the per-date slot counts derived from them. Used
//! when no remote datastore is configured, and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::domain::aggregates::SubmissionRecord;
use crate::domain::services::SlotCount;
use crate::ports::outbound::{ConcessionStore, RepositoryError};

#[derive(Default)]
pub struct InMemoryConcessionStore {
    submissions: RwLock<Vec<SubmissionRecord>>,
    slots: RwLock<HashMap<(NaiveDate, String), i64>>,
    unavailable: RwLock<bool>,
}

impl InMemoryConcessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the recorded count for one slot
    pub fn set_count(&self, date: NaiveDate, timeslot: impl Into<String>, count: i64) {
        self.slots.write().insert((date, timeslot.into()), count);
    }

    /// Make every call fail with a connection error
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write() = unavailable;
    }

    pub fn submissions(&self) -> Vec<SubmissionRecord> {
        self.submissions.read().clone()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if *self.unavailable.read() {
            return Err(RepositoryError::Connection("datastore unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ConcessionStore for InMemoryConcessionStore {
    async fn slot_counts(&self, date: NaiveDate) -> Result<Vec<SlotCount>, RepositoryError> {
        self.check_available()?;
        let slots = self.slots.read();
        let mut counts: Vec<SlotCount> = slots
            .iter()
            .filter(|((d, _), _)| *d == date)
            .map(|((_, timeslot), count)| SlotCount::new(timeslot.clone(), *count))
            .collect();
        counts.sort_by(|a, b| a.timeslot.cmp(&b.timeslot));
        Ok(counts)
    }

    async fn insert_submission(&self, record: &SubmissionRecord) -> Result<(), RepositoryError> {
        self.check_available()?;
        let date = NaiveDate::parse_from_str(&record.collectiondate, "%Y-%m-%d")
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        self.submissions.write().push(record.clone());
        *self
            .slots
            .write()
            .entry((date, record.timeslot.clone()))
            .or_insert(0) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sapid: &str, timeslot: &str) -> SubmissionRecord {
        SubmissionRecord {
            firstname: "Rohan".into(),
            lastname: "Mehta".into(),
            address: "Vile Parle East".into(),
            school: "MPSTME".into(),
            sapid: sapid.into(),
            contact: "9123456780".into(),
            gender: "male".into(),
            dob: "2005-06-01".into(),
            age: "21 years 4 months".into(),
            course: "MBA TECH".into(),
            stream: "CIVIL".into(),
            year: "2".into(),
            classforpass: "first".into(),
            passperiod: "quarterly".into(),
            railwaytype: "central".into(),
            station: "Thane".into(),
            collectiondate: "2026-10-20".into(),
            timeslot: timeslot.into(),
        }
    }

    fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    #[tokio::test]
    async fn test_insert_increments_slot_count() {
        let store = InMemoryConcessionStore::new();
        store.insert_submission(&record("70000000001", "2.00 PM TO 3.00 PM")).await.unwrap();
        store.insert_submission(&record("70000000002", "2.00 PM TO 3.00 PM")).await.unwrap();

        let counts = store.slot_counts(tuesday()).await.unwrap();
        assert_eq!(counts, vec![SlotCount::new("2.00 PM TO 3.00 PM", 2)]);
        assert_eq!(store.submissions().len(), 2);
    }

    #[tokio::test]
    async fn test_counts_are_per_date() {
        let store = InMemoryConcessionStore::new();
        store.set_count(tuesday(), "11.00 AM TO 12.00 PM", 60);

        let wednesday = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
        assert!(store.slot_counts(wednesday).await.unwrap().is_empty());
        assert_eq!(store.slot_counts(tuesday()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let store = InMemoryConcessionStore::new();
        store.set_unavailable(true);
        assert!(matches!(
            store.slot_counts(tuesday()).await,
            Err(RepositoryError::Connection(_))
        ));
        assert!(store.insert_submission(&record("70000000001", "2.00 PM TO 3.00 PM")).await.is_err());
        assert!(store.submissions().is_empty());
    }
}
