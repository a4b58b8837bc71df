//! Tracker abstraction.

use std::sync::Arc;

use crate::event::Event;

/// Accepts events and forwards them to analytics backends.
///
/// `track` never fails: unroutable events and backend failures are absorbed
/// by the implementation.
pub trait Tracker: Send + Sync {
    /// Forwards `event`.
    fn track(&self, event: &dyn Event);
}

impl<T: Tracker + ?Sized> Tracker for Arc<T> {
    fn track(&self, event: &dyn Event) {
        (**self).track(event);
    }
}

/// A tracker that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTracker;

impl Tracker for NullTracker {
    fn track(&self, _event: &dyn Event) {}
}
