//! Session statistics assembly
//!
//! Folds the full event history, the session record, and a fresh
//! recent-window analysis into a [`SessionStats`] record. Counters cover the
//! whole history; the drift verdict deliberately covers only the recent
//! window, so stats can show both cumulative volume and current engagement.

use chrono::{DateTime, Utc};

use crate::metrics;
use crate::types::{DriftAnalysis, Session, SessionStats, TrackingEvent};

/// Seconds represented by one idle tick (client polls idle state every 5s)
pub const IDLE_TICK_SEC: f64 = 5.0;

/// Assemble session statistics from already-fetched inputs.
pub fn build_stats(
    session: &Session,
    history: &[TrackingEvent],
    analysis: &DriftAnalysis,
    now: DateTime<Utc>,
) -> SessionStats {
    let counters = metrics::aggregate(history);
    let active_time = (now - session.start_time).num_milliseconds() as f64 / 1000.0;

    SessionStats {
        session_id: session.id.clone(),
        active_time,
        scroll_count: counters.scroll_count,
        click_count: counters.click_count,
        mouse_movements: counters.mouse_movements,
        idle_time: counters.idle_events as f64 * IDLE_TICK_SEC,
        tab_switches: counters.tab_switches,
        drift_detected: analysis.is_drifting,
        drift_score: analysis.drift_score,
    }
}
