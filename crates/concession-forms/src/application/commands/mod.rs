//! Command handlers
//!
//! Application services that orchestrate use cases.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::availability::SlotAvailabilityResolver;
use crate::application::dto::{ChangeFieldCommand, SessionView};
use crate::application::registry::{SessionHandle, SessionRegistry};
use crate::application::side_channel::{best_effort, Delivery};
use crate::domain::aggregates::{FieldEffect, FormSession};
use crate::domain::services::TimeslotOption;
use crate::domain::value_objects::{FieldName, SessionId};
use crate::ports::inbound::{ConcessionUseCases, UseCaseError};
use crate::ports::outbound::{Clock, ConcessionStore, WorkflowNotifier};

/// Runs the submit sequence against one session:
/// re-check availability, insert, notify.
pub struct SubmissionCoordinator {
    resolver: SlotAvailabilityResolver,
    store: Arc<dyn ConcessionStore>,
    notifier: Arc<dyn WorkflowNotifier>,
}

impl SubmissionCoordinator {
    pub fn new(store: Arc<dyn ConcessionStore>, notifier: Arc<dyn WorkflowNotifier>) -> Self {
        Self {
            resolver: SlotAvailabilityResolver::new(store.clone()),
            store,
            notifier,
        }
    }

    /// On success the session is Submitted and the notification outcome is
    /// returned for logging only. A failed insert puts the session back into
    /// Editing with the error attached.
    ///
    /// The session lock is only held for the state transitions, so readers
    /// see Loading while the datastore and workflow calls are in flight.
    /// Loading itself refuses further edits and submits.
    pub async fn submit(&self, handle: &SessionHandle) -> Result<Delivery, UseCaseError> {
        let (id, record, submission) = {
            let mut session = handle.lock().await;
            let record = session.begin_submit()?;
            drain_events(&mut session);
            (session.id(), record, session.submission().clone())
        };
        tracing::info!(session_id = %id, "submission loading");

        // The refreshed list is informational; the chosen slot is not re-checked.
        if let Some(date) = submission.collection_date {
            if let Some(counts) = self.resolver.fetch(id, date).await {
                let mut session = handle.lock().await;
                session.apply_availability(date, &counts);
                drain_events(&mut session);
            }
        }

        if let Err(e) = self.store.insert_submission(&record).await {
            tracing::error!(session_id = %id, error = %e, "Error inserting data");
            let mut session = handle.lock().await;
            session.fail_submit(e.to_string())?;
            drain_events(&mut session);
            return Err(UseCaseError::Persistence(e.to_string()));
        }

        let delivery = best_effort("workflow", self.notifier.notify(&submission)).await;

        {
            let mut session = handle.lock().await;
            session.complete_submit()?;
            drain_events(&mut session);
        }
        tracing::info!(
            session_id = %id,
            sap_id = %record.sapid,
            collection_date = %record.collectiondate,
            timeslot = %record.timeslot,
            "Data inserted successfully"
        );
        Ok(delivery)
    }
}

/// Form session application service
pub struct ConcessionService {
    registry: Arc<SessionRegistry>,
    resolver: SlotAvailabilityResolver,
    coordinator: SubmissionCoordinator,
    clock: Arc<dyn Clock>,
}

impl ConcessionService {
    pub fn new(
        store: Arc<dyn ConcessionStore>,
        notifier: Arc<dyn WorkflowNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry: Arc::new(SessionRegistry::new()),
            resolver: SlotAvailabilityResolver::new(store.clone()),
            coordinator: SubmissionCoordinator::new(store, notifier),
            clock,
        }
    }

    pub fn registry(&self) -> Arc<SessionRegistry> {
        self.registry.clone()
    }

    fn handle(&self, id: SessionId) -> Result<SessionHandle, UseCaseError> {
        self.registry.get(&id).ok_or(UseCaseError::NotFound(id))
    }
}

fn drain_events(session: &mut FormSession) {
    for event in session.take_events() {
        tracing::debug!(session_id = %session.id(), ?event, "session event");
    }
}

#[async_trait]
impl ConcessionUseCases for ConcessionService {
    async fn open_session(&self) -> Result<SessionView, UseCaseError> {
        let mut session = FormSession::open();
        drain_events(&mut session);
        let view = SessionView::from(&session);
        self.registry.insert(session);
        tracing::info!(session_id = %view.id, "session opened");
        Ok(view)
    }

    async fn get_session(&self, id: SessionId) -> Result<SessionView, UseCaseError> {
        let handle = self.handle(id)?;
        let session = handle.lock().await;
        Ok(SessionView::from(&*session))
    }

    async fn change_field(&self, command: ChangeFieldCommand) -> Result<SessionView, UseCaseError> {
        let field: FieldName = command
            .field
            .parse()
            .map_err(|_| UseCaseError::UnknownField(command.field.clone()))?;

        let handle = self.handle(command.session_id)?;
        let mut session = handle.lock().await;

        let effect = session.change_field(field, &command.value, self.clock.today())?;
        if let FieldEffect::ResolveAvailability(date) = effect {
            self.resolver.refresh(&mut session, date).await;
        }

        drain_events(&mut session);
        Ok(SessionView::from(&*session))
    }

    async fn open_timeslot_selector(&self, id: SessionId) -> Result<Vec<TimeslotOption>, UseCaseError> {
        let handle = self.handle(id)?;
        let mut session = handle.lock().await;

        let date = session.valid_collection_date().ok_or(UseCaseError::NoCollectionDate)?;
        self.resolver.refresh(&mut session, date).await;

        drain_events(&mut session);
        Ok(session.timeslots().to_vec())
    }

    async fn submit(&self, id: SessionId) -> Result<SessionView, UseCaseError> {
        let handle = self.handle(id)?;

        if let Delivery::Failed(reason) = self.coordinator.submit(&handle).await? {
            tracing::debug!(session_id = %id, %reason, "workflow notification not delivered");
        }

        let session = handle.lock().await;
        Ok(SessionView::from(&*session))
    }
}
