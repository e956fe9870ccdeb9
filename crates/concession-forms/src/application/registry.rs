//! Session registry
//!
//! Live form sessions keyed by id. Each session sits behind its own async
//! mutex, so one session handles one event at a time while different
//! sessions proceed independently.

use std::sync::Arc;

use chrono::{Duration, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::domain::aggregates::FormSession;
use crate::domain::value_objects::SessionId;

pub type SessionHandle = Arc<Mutex<FormSession>>;

#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, SessionHandle>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session: FormSession) -> SessionHandle {
        let id = session.id();
        let handle = Arc::new(Mutex::new(session));
        self.sessions.insert(id, handle.clone());
        handle
    }

    pub fn get(&self, id: &SessionId) -> Option<SessionHandle> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop sessions untouched for longer than `ttl`. Sessions busy with an
    /// event are kept.
    pub fn purge_idle(&self, ttl: Duration) -> usize {
        let before = self.sessions.len();
        let now = Utc::now();
        self.sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => now - session.updated_at() < ttl,
            Err(_) => true,
        });
        before.saturating_sub(self.sessions.len())
    }
}
