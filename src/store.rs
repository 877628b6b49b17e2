//! Event store collaborator
//!
//! The scoring core never owns a persistence connection. It consumes an
//! [`EventStore`] passed in by the surrounding service layer, which owns the
//! store's lifecycle. [`MemoryStore`] is a complete in-memory implementation
//! used by the CLI and tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::DriftError;
use crate::types::{Session, TrackingEvent};

/// Append-only event storage with session records.
///
/// `query_events` must return events for the session ordered most-recent-first,
/// capped at `limit`. An unknown session id yields an empty sequence, not an
/// error.
pub trait EventStore {
    /// Append a tracking event
    fn append_event(&self, event: TrackingEvent) -> Result<(), DriftError>;

    /// Fetch up to `limit` events for a session, newest first
    fn query_events(&self, session_id: &str, limit: usize)
        -> Result<Vec<TrackingEvent>, DriftError>;

    /// Fetch a session record, `None` if absent
    fn get_session(&self, session_id: &str) -> Result<Option<Session>, DriftError>;

    /// Insert or replace a session record
    fn upsert_session(&self, session: Session) -> Result<(), DriftError>;
}

/// In-memory event store.
///
/// Events are kept in append order per session; session records are keyed by
/// id. All methods take `&self`; interior mutability is a single mutex since
/// ingestion needs no cross-writer coordination.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    events: HashMap<String, Vec<TrackingEvent>>,
    sessions: HashMap<String, Session>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryStoreInner>, DriftError> {
        self.inner
            .lock()
            .map_err(|_| DriftError::Store("memory store mutex poisoned".to_string()))
    }

    /// Total number of stored events across all sessions
    pub fn event_count(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.events.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Ids of all sessions that have a session record
    pub fn session_ids(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|inner| inner.sessions.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl EventStore for MemoryStore {
    fn append_event(&self, event: TrackingEvent) -> Result<(), DriftError> {
        let mut inner = self.lock()?;
        inner
            .events
            .entry(event.session_id.clone())
            .or_default()
            .push(event);
        Ok(())
    }

    fn query_events(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<TrackingEvent>, DriftError> {
        let inner = self.lock()?;
        let mut events = inner
            .events
            .get(session_id)
            .cloned()
            .unwrap_or_default();
        // Newest first; ties keep append order stable
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        events.truncate(limit);
        Ok(events)
    }

    fn get_session(&self, session_id: &str) -> Result<Option<Session>, DriftError> {
        let inner = self.lock()?;
        Ok(inner.sessions.get(session_id).cloned())
    }

    fn upsert_session(&self, session: Session) -> Result<(), DriftError> {
        let mut inner = self.lock()?;
        inner.sessions.insert(session.id.clone(), session);
        Ok(())
    }
}
