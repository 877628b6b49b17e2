//! Recommendation selection
//!
//! Maps the drift verdict and triggered factors to a suggestion string.
//! Factor priority is fixed: idle behavior outranks scrolling, which outranks
//! tabs; anything else falls through to a generic refocus nudge.

use crate::types::DriftFactor;

/// Shown when the session has no events yet
pub const MSG_NO_EVENTS: &str = "Keep going! Start tracking your activity.";
/// Shown when the window does not classify as drifting
pub const MSG_FOCUSED: &str = "Great focus! Keep up the good work.";
/// Drifting, idle behavior dominant
pub const MSG_IDLE: &str = "Take a short break or switch tasks to re-engage.";
/// Drifting, scrolling dominant
pub const MSG_SCROLLING: &str = "Focus on reading content instead of scrolling.";
/// Drifting, tab churn dominant
pub const MSG_TABS: &str = "Close unnecessary tabs to reduce distractions.";
/// Drifting with no prioritized factor
pub const MSG_REFOCUS: &str = "Refocus on your current task.";

/// Select a recommendation for a scored (non-empty) window.
///
/// The empty-window message is handled by the pipeline's terminal case, not
/// here.
pub fn recommend(drifting: bool, factors: &[DriftFactor]) -> &'static str {
    if !drifting {
        return MSG_FOCUSED;
    }

    if factors.contains(&DriftFactor::IdleBehavior) {
        MSG_IDLE
    } else if factors.contains(&DriftFactor::ExcessiveScrolling) {
        MSG_SCROLLING
    } else if factors.contains(&DriftFactor::MultipleTabs) {
        MSG_TABS
    } else {
        MSG_REFOCUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_drifting_ignores_factors() {
        let factors = vec![DriftFactor::IdleBehavior, DriftFactor::MultipleTabs];
        assert_eq!(recommend(false, &factors), MSG_FOCUSED);
    }

    #[test]
    fn test_idle_outranks_everything() {
        let factors = vec![
            DriftFactor::ExcessiveScrolling,
            DriftFactor::IdleBehavior,
            DriftFactor::MultipleTabs,
        ];
        assert_eq!(recommend(true, &factors), MSG_IDLE);
    }

    #[test]
    fn test_scrolling_outranks_tabs() {
        let factors = vec![DriftFactor::MultipleTabs, DriftFactor::ExcessiveScrolling];
        assert_eq!(recommend(true, &factors), MSG_SCROLLING);
    }

    #[test]
    fn test_tabs_selected_when_alone() {
        let factors = vec![DriftFactor::MultipleTabs];
        assert_eq!(recommend(true, &factors), MSG_TABS);
    }

    #[test]
    fn test_unprioritized_factors_fall_through() {
        let factors = vec![DriftFactor::ErraticMovement, DriftFactor::LowActivity];
        assert_eq!(recommend(true, &factors), MSG_REFOCUS);
    }

    #[test]
    fn test_drifting_with_no_factors_falls_through() {
        assert_eq!(recommend(true, &[]), MSG_REFOCUS);
    }
}
