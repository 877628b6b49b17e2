//! Drift engine orchestration
//!
//! This module provides the public API for drift scoring. [`analyze_events`]
//! is the pure scoring pipeline over an already-fetched window;
//! [`DriftEngine`] wires the pipeline to an injected [`EventStore`] and
//! exposes the session operations.

use chrono::Utc;

use crate::error::DriftError;
use crate::metrics;
use crate::recommend::{self, MSG_NO_EVENTS};
use crate::scorer;
use crate::stats;
use crate::store::EventStore;
use crate::types::{DriftAnalysis, EventData, EventType, Session, SessionStats, TrackingEvent};
use crate::window;

/// Score a window of events into a drift analysis (pure, total).
///
/// An empty window is the designated terminal case: no rules are evaluated
/// and the no-events recommendation is returned. Any non-empty window goes
/// through aggregation, scoring, classification, and recommendation
/// selection; none of those stages can fail.
pub fn analyze_events(events: &[TrackingEvent]) -> DriftAnalysis {
    if events.is_empty() {
        return DriftAnalysis {
            is_drifting: false,
            confidence: 0.0,
            drift_score: 0.0,
            factors: vec![],
            recommendation: MSG_NO_EVENTS.to_string(),
        };
    }

    let counters = metrics::aggregate(events);
    let scored = scorer::score_metrics(&counters);
    let drifting = scorer::is_drifting(scored.score);

    DriftAnalysis {
        is_drifting: drifting,
        confidence: scorer::confidence(scored.score),
        drift_score: scored.score,
        recommendation: recommend::recommend(drifting, &scored.factors).to_string(),
        factors: scored.factors,
    }
}

/// Drift engine bound to an event store.
///
/// All operations are stateless computations over store reads; the engine
/// holds nothing but the store reference, so concurrent analyses are
/// independent.
pub struct DriftEngine<S: EventStore> {
    store: S,
}

impl<S: EventStore> DriftEngine<S> {
    /// Create an engine over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a new tracking session and persist its record
    pub fn start_session(&self) -> Result<Session, DriftError> {
        let session = Session::new();
        self.store.upsert_session(session.clone())?;
        Ok(session)
    }

    /// Log a behavioral event against a session.
    ///
    /// The event type arrives as its wire string; unrecognized kinds are
    /// rejected with a validation error before anything is stored. The
    /// session's existence is not checked.
    pub fn log_event(
        &self,
        session_id: &str,
        event_type: &str,
        data: EventData,
    ) -> Result<String, DriftError> {
        let event_type = EventType::parse(event_type).ok_or_else(|| {
            DriftError::Validation(format!("unrecognized event type: {event_type}"))
        })?;

        let event = TrackingEvent::new(session_id, event_type, data);
        let event_id = event.id.clone();
        self.store.append_event(event)?;
        Ok(event_id)
    }

    /// Analyze the session's recent event window.
    ///
    /// Never fails on session content: an unknown or empty session yields the
    /// terminal no-events analysis.
    pub fn analyze_session(&self, session_id: &str) -> Result<DriftAnalysis, DriftError> {
        let events = window::recent_window(&self.store, session_id)?;
        Ok(analyze_events(&events))
    }

    /// Compute session-level statistics.
    ///
    /// Fails with `NotFound` when the session has no events or no session
    /// record.
    pub fn session_stats(&self, session_id: &str) -> Result<SessionStats, DriftError> {
        let history = window::full_history(&self.store, session_id)?;
        if history.is_empty() {
            return Err(DriftError::NotFound(format!(
                "no events for session {session_id}"
            )));
        }

        let session = self
            .store
            .get_session(session_id)?
            .ok_or_else(|| DriftError::NotFound(format!("session {session_id} not found")))?;

        let analysis = self.analyze_session(session_id)?;
        Ok(stats::build_stats(&session, &history, &analysis, Utc::now()))
    }

    /// End a tracking session: clears `is_active` and stamps `end_time`.
    ///
    /// Fails with `NotFound` when no session record exists. Racing writers
    /// resolve last-write-wins; no compare-and-swap is needed.
    pub fn end_session(&self, session_id: &str) -> Result<(), DriftError> {
        let mut session = self
            .store
            .get_session(session_id)?
            .ok_or_else(|| DriftError::NotFound(format!("session {session_id} not found")))?;

        session.is_active = false;
        session.end_time = Some(Utc::now());
        self.store.upsert_session(session)
    }
}
