//! Slot availability resolver
//!
//! Queries the datastore and applies the result to a session. Query failures
//! fail open: the selector keeps whatever it showed before.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::aggregates::FormSession;
use crate::domain::services::SlotCount;
use crate::domain::value_objects::SessionId;
use crate::ports::outbound::ConcessionStore;

#[derive(Clone)]
pub struct SlotAvailabilityResolver {
    store: Arc<dyn ConcessionStore>,
}

impl SlotAvailabilityResolver {
    pub fn new(store: Arc<dyn ConcessionStore>) -> Self {
        Self { store }
    }

    /// Counts recorded for `date`, or `None` when the query failed
    pub async fn fetch(&self, session_id: SessionId, date: NaiveDate) -> Option<Vec<SlotCount>> {
        match self.store.slot_counts(date).await {
            Ok(counts) => Some(counts),
            Err(e) => {
                tracing::warn!(
                    session_id = %session_id,
                    collection_date = %date,
                    error = %e,
                    "Error fetching slot availability"
                );
                None
            }
        }
    }

    /// Returns whether the selector was refreshed
    pub async fn refresh(&self, session: &mut FormSession, date: NaiveDate) -> bool {
        match self.fetch(session.id(), date).await {
            Some(counts) => {
                session.apply_availability(date, &counts);
                true
            }
            None => false,
        }
    }
}
