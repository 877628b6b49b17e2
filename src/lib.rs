//! Driftscope - Rule-based focus-drift scoring for behavioral event streams
//!
//! Driftscope infers whether a user is drifting away from a tracked task by
//! reducing a bounded window of lightweight behavioral events (scrolls,
//! clicks, mouse movement, idle ticks, tab counts) into counters, scoring
//! them against a fixed rule set, and deriving a verdict, confidence, and
//! recommendation.
//!
//! ## Pipeline
//!
//! window selection → metric aggregation → drift scoring → classification
//! → recommendation selection
//!
//! The engine owns no persistence: it consumes an injected [`EventStore`]
//! collaborator, with [`MemoryStore`] provided for tests and the CLI.

pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod recommend;
pub mod scorer;
pub mod stats;
pub mod store;
pub mod types;
pub mod window;

pub use error::DriftError;
pub use pipeline::{analyze_events, DriftEngine};
pub use store::{EventStore, MemoryStore};
pub use types::{
    DriftAnalysis, DriftFactor, EventData, EventType, Session, SessionStats, TrackingEvent,
};

/// Driftscope version embedded in CLI output
pub const DRIFTSCOPE_VERSION: &str = env!("CARGO_PKG_VERSION");
