//! Event window selection
//!
//! Real-time drift scoring looks only at a bounded, most-recent window of a
//! session's events; cumulative statistics pull the full history under a
//! larger practical cap. The window is bounded by event count alone; there
//! is no time cutoff.

use crate::error::DriftError;
use crate::store::EventStore;
use crate::types::TrackingEvent;

/// Maximum events in the real-time analysis window
pub const ANALYSIS_WINDOW_LIMIT: usize = 100;

/// Practical cap when pulling a session's full event history
pub const HISTORY_LIMIT: usize = 1000;

/// Fetch the most recent bounded window of events for a session.
///
/// An empty result is a normal condition (session not yet tracked, or no
/// events logged), not an error.
pub fn recent_window<S: EventStore>(
    store: &S,
    session_id: &str,
) -> Result<Vec<TrackingEvent>, DriftError> {
    store.query_events(session_id, ANALYSIS_WINDOW_LIMIT)
}

/// Fetch the full event history for a session, bounded only by the
/// memory-safety cap.
pub fn full_history<S: EventStore>(
    store: &S,
    session_id: &str,
) -> Result<Vec<TrackingEvent>, DriftError> {
    store.query_events(session_id, HISTORY_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::{EventData, EventType, TrackingEvent};
    use chrono::{Duration, Utc};

    fn fill(store: &MemoryStore, session_id: &str, n: usize) {
        let base = Utc::now();
        for i in 0..n {
            let mut event =
                TrackingEvent::new(session_id, EventType::Scroll, EventData::default());
            event.timestamp = base + Duration::milliseconds(i as i64);
            store.append_event(event).unwrap();
        }
    }

    #[test]
    fn test_recent_window_caps_at_limit() {
        let store = MemoryStore::new();
        fill(&store, "s1", ANALYSIS_WINDOW_LIMIT + 50);

        let window = recent_window(&store, "s1").unwrap();
        assert_eq!(window.len(), ANALYSIS_WINDOW_LIMIT);
    }

    #[test]
    fn test_recent_window_keeps_newest() {
        let store = MemoryStore::new();
        fill(&store, "s1", ANALYSIS_WINDOW_LIMIT + 1);

        let window = recent_window(&store, "s1").unwrap();
        let oldest_kept = window.last().unwrap().timestamp;
        let full = full_history(&store, "s1").unwrap();
        let dropped = full.last().unwrap().timestamp;
        assert!(oldest_kept > dropped);
    }

    #[test]
    fn test_empty_session_is_not_an_error() {
        let store = MemoryStore::new();
        let window = recent_window(&store, "untracked").unwrap();
        assert!(window.is_empty());
    }

    #[test]
    fn test_full_history_exceeds_analysis_window() {
        let store = MemoryStore::new();
        fill(&store, "s1", ANALYSIS_WINDOW_LIMIT + 20);

        let history = full_history(&store, "s1").unwrap();
        assert_eq!(history.len(), ANALYSIS_WINDOW_LIMIT + 20);
    }
}
