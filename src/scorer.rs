//! Drift scoring and classification
//!
//! A fixed, hand-tuned rule set stands in for a learned model: each rule
//! independently inspects the window counters and, when its condition holds,
//! adds its weight to the score and flags its factor. Conditions may overlap,
//! so one window can trigger several rules. No normalization or decay is
//! applied; the raw weight sum is the score.

use crate::metrics::WindowMetrics;
use crate::types::DriftFactor;

/// Weight for heavy scrolling with almost no clicks
const EXCESSIVE_SCROLLING_WEIGHT: f64 = 25.0;
/// Weight for repeated idle ticks
const IDLE_BEHAVIOR_WEIGHT: f64 = 30.0;
/// Weight for repeated over-threshold tab counts
const MULTIPLE_TABS_WEIGHT: f64 = 20.0;
/// Weight for heavy mouse movement with few clicks
const ERRATIC_MOVEMENT_WEIGHT: f64 = 15.0;
/// Weight for very low overall activity
const LOW_ACTIVITY_WEIGHT: f64 = 10.0;

/// Score above which a window is classified as drifting (strict)
pub const DRIFT_THRESHOLD: f64 = 40.0;

/// Upper bound on reported confidence
pub const CONFIDENCE_CAP: f64 = 0.95;

/// Drift score and triggered factors for a window
#[derive(Debug, Clone, PartialEq)]
pub struct DriftScore {
    /// Sum of triggered rule weights
    pub score: f64,
    /// Triggered rules, in evaluation order
    pub factors: Vec<DriftFactor>,
}

/// Evaluate the drift rules against window counters.
///
/// Rules are evaluated in a fixed order so the factor list is deterministic.
pub fn score_metrics(metrics: &WindowMetrics) -> DriftScore {
    let mut score = 0.0;
    let mut factors = Vec::new();

    // Mindless scrolling: high scroll volume, almost nothing clicked
    if metrics.scroll_count > 20 && metrics.click_count < 3 {
        score += EXCESSIVE_SCROLLING_WEIGHT;
        factors.push(DriftFactor::ExcessiveScrolling);
    }

    // Repeated idle ticks
    if metrics.idle_events > 3 {
        score += IDLE_BEHAVIOR_WEIGHT;
        factors.push(DriftFactor::IdleBehavior);
    }

    // Distraction across many open tabs
    if metrics.tab_switches > 2 {
        score += MULTIPLE_TABS_WEIGHT;
        factors.push(DriftFactor::MultipleTabs);
    }

    // Heavy cursor motion without corresponding clicks
    if metrics.mouse_movements > 50 && metrics.click_count < 5 {
        score += ERRATIC_MOVEMENT_WEIGHT;
        factors.push(DriftFactor::ErraticMovement);
    }

    // Barely any interaction at all
    if metrics.total_activity() < 10 {
        score += LOW_ACTIVITY_WEIGHT;
        factors.push(DriftFactor::LowActivity);
    }

    DriftScore { score, factors }
}

/// Classify a score as drifting or not. Exactly the threshold is NOT drifting.
pub fn is_drifting(score: f64) -> bool {
    score > DRIFT_THRESHOLD
}

/// Confidence in the verdict: `score / 100`, capped below certainty.
pub fn confidence(score: f64) -> f64 {
    (score / 100.0).min(CONFIDENCE_CAP)
}
