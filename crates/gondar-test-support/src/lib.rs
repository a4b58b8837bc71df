//! Shared test doubles for Gondar analytics tracking.

mod backend;
mod journal;
mod sink;
mod tracker;

pub use backend::{
    AnalyticsCall, ProductCall, RecordingAnalyticsBackend, RecordingProductBackend,
    RecordingTelemetryBackend, TelemetryCall, UnavailableAnalyticsBackend,
};
pub use journal::CallJournal;
pub use sink::{FailingSink, RecordingSink};
pub use tracker::RecordingTracker;
