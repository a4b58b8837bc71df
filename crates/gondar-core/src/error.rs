//! Error types shared across the tracking pipeline.

use thiserror::Error;

/// Failure reported by a backend sink for a single delivery.
///
/// The tracker logs these and moves on to the next sink; they never reach
/// the caller of `track`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The backend SDK is not initialised or has been shut down.
    #[error("sink {sink} is unavailable")]
    Unavailable {
        /// Identifier of the sink that could not accept the call.
        sink: &'static str,
    },

    /// The backend refused the payload.
    #[error("sink {sink} rejected the delivery: {reason}")]
    Rejected {
        /// Identifier of the sink that refused the call.
        sink: &'static str,
        /// Backend-supplied reason.
        reason: String,
    },
}

/// Errors raised while configuring trackers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// A process-wide default tracker was already installed.
    #[error("a default tracker is already installed")]
    AlreadyInstalled,
}
