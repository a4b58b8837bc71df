//! Test tracker — records what would have been dispatched.

use std::sync::Mutex;

use gondar_core::delivery::{Delivery, route};
use gondar_core::event::Event;
use gondar_core::tracker::Tracker;

/// A tracker that routes each event and records the resulting delivery,
/// without talking to any sink.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    tracked: Mutex<Vec<Delivery>>,
}

impl RecordingTracker {
    /// Create an empty recording tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all deliveries, in `track` call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn tracked(&self) -> Vec<Delivery> {
        self.tracked.lock().unwrap().clone()
    }

    /// Returns the names of all tracked deliveries, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn tracked_names(&self) -> Vec<String> {
        self.tracked
            .lock()
            .unwrap()
            .iter()
            .map(|delivery| delivery.name().to_owned())
            .collect()
    }
}

impl Tracker for RecordingTracker {
    fn track(&self, event: &dyn Event) {
        self.tracked.lock().unwrap().push(route(event));
    }
}
