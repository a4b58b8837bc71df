//! Process-wide default tracker.
//!
//! Hosts install one tracker at startup; attachments that were not given an
//! explicit tracker fall back to it. Until something is installed the default
//! drops every event.

use std::sync::{Arc, OnceLock};

use gondar_core::error::TrackerError;
use gondar_core::tracker::{NullTracker, Tracker};
use tracing::info;

static DEFAULT_TRACKER: OnceLock<Arc<dyn Tracker>> = OnceLock::new();

/// Installs the process-wide default tracker.
///
/// # Errors
///
/// Returns `TrackerError::AlreadyInstalled` if a default was installed
/// before; the existing tracker is kept.
pub fn install_default(tracker: impl Tracker + 'static) -> Result<(), TrackerError> {
    DEFAULT_TRACKER
        .set(Arc::new(tracker))
        .map_err(|_| TrackerError::AlreadyInstalled)?;
    info!("default tracker installed");
    Ok(())
}

/// Returns the installed default tracker, or a tracker that drops every
/// event if none was installed.
#[must_use]
pub fn default_tracker() -> Arc<dyn Tracker> {
    DEFAULT_TRACKER
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(NullTracker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gondar_catalog::StoreViewedEvent;
    use gondar_test_support::RecordingTracker;

    // Process-wide state: every install in this crate's tests happens here.
    #[test]
    fn test_install_default_once() {
        // Arrange
        let recording = Arc::new(RecordingTracker::new());

        // Act
        let first = install_default(recording.clone());
        let second = install_default(RecordingTracker::new());
        default_tracker().track(&StoreViewedEvent);

        // Assert
        assert!(first.is_ok());
        assert_eq!(second, Err(TrackerError::AlreadyInstalled));
        assert_eq!(recording.tracked_names(), vec!["view_cart"]);
    }
}
