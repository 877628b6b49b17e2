//! Core data types for drift scoring
//!
//! This module defines the wire-facing types for sessions and tracking events,
//! and the derived records produced by the scoring pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Behavioral event types captured from browser activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Scroll,
    Click,
    Mousemove,
    Idle,
    Visibility,
    TabCount,
}

impl EventType {
    /// Parse a wire-format event type string. Returns `None` for
    /// unrecognized kinds so the boundary can reject them before storage.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scroll" => Some(Self::Scroll),
            "click" => Some(Self::Click),
            "mousemove" => Some(Self::Mousemove),
            "idle" => Some(Self::Idle),
            "visibility" => Some(Self::Visibility),
            "tab_count" => Some(Self::TabCount),
            _ => None,
        }
    }

    /// Wire-format name of this event type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Click => "click",
            Self::Mousemove => "mousemove",
            Self::Idle => "idle",
            Self::Visibility => "visibility",
            Self::TabCount => "tab_count",
        }
    }
}

/// Type-specific event payload.
///
/// Only the fields the scoring rules read are declared; producers may send
/// extra keys (ignored on deserialization) or omit keys entirely (fields
/// default to `None`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventData {
    /// Open tab count (present on `tab_count` events)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Page visibility state (present on `visibility` events)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// A single behavioral event within a session. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingEvent {
    /// Unique event identifier
    pub id: String,
    /// Session this event belongs to (existence is not enforced)
    pub session_id: String,
    /// Event type
    pub event_type: EventType,
    /// Event timestamp (UTC)
    pub timestamp: DateTime<Utc>,
    /// Type-specific payload
    #[serde(default)]
    pub data: EventData,
}

impl TrackingEvent {
    /// Create a new event with a fresh id, timestamped now
    pub fn new(session_id: &str, event_type: EventType, data: EventData) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.to_string(),
            event_type,
            timestamp: Utc::now(),
            data,
        }
    }
}

/// A tracked period of user activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier
    pub id: String,
    /// Session start time (UTC)
    pub start_time: DateTime<Utc>,
    /// Session end time, set once by the end-session operation
    pub end_time: Option<DateTime<Utc>>,
    /// Whether the session is still active
    pub is_active: bool,
}

impl Session {
    /// Create a new active session with a fresh id, started now
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_time: Utc::now(),
            end_time: None,
            is_active: true,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// A triggered drift rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftFactor {
    /// High scroll volume with almost no clicks
    ExcessiveScrolling,
    /// Repeated idle ticks
    IdleBehavior,
    /// Tab count repeatedly above threshold
    MultipleTabs,
    /// Heavy mouse movement with few clicks
    ErraticMovement,
    /// Very little interaction overall
    LowActivity,
}

/// Result of scoring a session's recent event window. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftAnalysis {
    /// Whether the drift score crosses the drifting threshold
    pub is_drifting: bool,
    /// Confidence in the verdict, 0 to 0.95
    pub confidence: f64,
    /// Raw sum of triggered rule weights
    pub drift_score: f64,
    /// Rules that triggered, in rule-evaluation order
    pub factors: Vec<DriftFactor>,
    /// Human-readable suggestion
    pub recommendation: String,
}

/// Session-level statistics. Derived, never persisted.
///
/// Counters cover the full event history; `drift_detected` and `drift_score`
/// come from a fresh analysis of the bounded recent window, so they reflect
/// recent behavior only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Session identifier
    pub session_id: String,
    /// Seconds elapsed since session start
    pub active_time: f64,
    /// Scroll events over the full history
    pub scroll_count: u32,
    /// Click events over the full history
    pub click_count: u32,
    /// Mouse-move events over the full history
    pub mouse_movements: u32,
    /// Estimated idle seconds (idle events x 5s polling interval)
    pub idle_time: f64,
    /// Tab-switch events (count > 3) over the full history
    pub tab_switches: u32,
    /// Drift verdict over the recent window
    pub drift_detected: bool,
    /// Drift score over the recent window
    pub drift_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_event_type_serialization() {
        let json = serde_json::to_string(&EventType::TabCount).unwrap();
        assert_eq!(json, "\"tab_count\"");

        let parsed: EventType = serde_json::from_str("\"mousemove\"").unwrap();
        assert_eq!(parsed, EventType::Mousemove);
    }

    #[test]
    fn test_event_type_parse_rejects_unknown() {
        assert_eq!(EventType::parse("scroll"), Some(EventType::Scroll));
        assert_eq!(EventType::parse("keypress"), None);
        assert_eq!(EventType::parse(""), None);
    }

    #[test]
    fn test_event_type_round_trip_names() {
        for name in ["scroll", "click", "mousemove", "idle", "visibility", "tab_count"] {
            let parsed = EventType::parse(name).unwrap();
            assert_eq!(parsed.as_str(), name);
        }
    }

    #[test]
    fn test_tracking_event_deserialization() {
        let json = r#"{
            "id": "evt-1",
            "session_id": "sess-1",
            "event_type": "tab_count",
            "timestamp": "2024-01-15T14:05:00Z",
            "data": {"count": 7, "window_id": "ignored-extra-key"}
        }"#;

        let event: TrackingEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, EventType::TabCount);
        assert_eq!(event.data.count, Some(7));
        assert_eq!(event.data.visible, None);
    }

    #[test]
    fn test_tracking_event_missing_data() {
        let json = r#"{
            "id": "evt-2",
            "session_id": "sess-1",
            "event_type": "scroll",
            "timestamp": "2024-01-15T14:05:00Z"
        }"#;

        let event: TrackingEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.data.count, None);
    }

    #[test]
    fn test_timestamp_round_trip_is_utc() {
        let event = TrackingEvent::new("sess-1", EventType::Click, EventData::default());
        let json = serde_json::to_string(&event).unwrap();
        let back: TrackingEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timestamp, event.timestamp);
    }

    #[test]
    fn test_new_session_is_active() {
        let session = Session::new();
        assert!(session.is_active);
        assert!(session.end_time.is_none());
        assert!(!session.id.is_empty());
    }

    #[test]
    fn test_drift_factor_serialization() {
        let json = serde_json::to_string(&DriftFactor::ExcessiveScrolling).unwrap();
        assert_eq!(json, "\"excessive_scrolling\"");
    }
}
