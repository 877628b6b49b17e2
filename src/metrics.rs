//! Behavioral metric aggregation
//!
//! Reduces a window of tracking events into the per-type counters the drift
//! rules read. Counters are computed independently over the same input; a
//! single event feeds at most one counter.

use crate::types::{EventType, TrackingEvent};

/// Tab count above which a `tab_count` event registers as a tab switch
const TAB_SWITCH_COUNT_THRESHOLD: u32 = 3;

/// Per-type event counters over a window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowMetrics {
    /// Scroll events
    pub scroll_count: u32,
    /// Click events
    pub click_count: u32,
    /// Mouse-move events
    pub mouse_movements: u32,
    /// Idle ticks
    pub idle_events: u32,
    /// `tab_count` events whose reported count exceeds the switch threshold
    pub tab_switches: u32,
}

impl WindowMetrics {
    /// Total interaction volume (scrolls + clicks + mouse moves)
    pub fn total_activity(&self) -> u32 {
        self.scroll_count + self.click_count + self.mouse_movements
    }
}

/// Aggregate a window of events into counters.
///
/// `visibility` events and any payload keys the counters do not read are
/// ignored. A `tab_count` event with no `count` field defaults to a count of
/// 1 and so never registers as a switch.
pub fn aggregate(events: &[TrackingEvent]) -> WindowMetrics {
    let mut metrics = WindowMetrics::default();

    for event in events {
        match event.event_type {
            EventType::Scroll => metrics.scroll_count += 1,
            EventType::Click => metrics.click_count += 1,
            EventType::Mousemove => metrics.mouse_movements += 1,
            EventType::Idle => metrics.idle_events += 1,
            EventType::TabCount => {
                if event.data.count.unwrap_or(1) > TAB_SWITCH_COUNT_THRESHOLD {
                    metrics.tab_switches += 1;
                }
            }
            EventType::Visibility => {}
        }
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventData;
    use pretty_assertions::assert_eq;

    fn event(event_type: EventType) -> TrackingEvent {
        TrackingEvent::new("s1", event_type, EventData::default())
    }

    fn tab_event(count: Option<u32>) -> TrackingEvent {
        TrackingEvent::new(
            "s1",
            EventType::TabCount,
            EventData {
                count,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_empty_window_is_all_zero() {
        assert_eq!(aggregate(&[]), WindowMetrics::default());
    }

    #[test]
    fn test_counts_by_type() {
        let events = vec![
            event(EventType::Scroll),
            event(EventType::Scroll),
            event(EventType::Click),
            event(EventType::Mousemove),
            event(EventType::Mousemove),
            event(EventType::Mousemove),
            event(EventType::Idle),
            event(EventType::Visibility),
        ];

        let metrics = aggregate(&events);
        assert_eq!(metrics.scroll_count, 2);
        assert_eq!(metrics.click_count, 1);
        assert_eq!(metrics.mouse_movements, 3);
        assert_eq!(metrics.idle_events, 1);
        assert_eq!(metrics.tab_switches, 0);
    }

    #[test]
    fn test_tab_switch_threshold_is_strict() {
        let events = vec![
            tab_event(Some(3)), // at threshold, not a switch
            tab_event(Some(4)),
            tab_event(Some(12)),
        ];

        let metrics = aggregate(&events);
        assert_eq!(metrics.tab_switches, 2);
    }

    #[test]
    fn test_tab_count_missing_payload_defaults_to_one() {
        let metrics = aggregate(&[tab_event(None)]);
        assert_eq!(metrics.tab_switches, 0);
    }

    #[test]
    fn test_total_activity_excludes_idle_and_tabs() {
        let events = vec![
            event(EventType::Scroll),
            event(EventType::Click),
            event(EventType::Mousemove),
            event(EventType::Idle),
            tab_event(Some(10)),
        ];

        let metrics = aggregate(&events);
        assert_eq!(metrics.total_activity(), 3);
    }
}
