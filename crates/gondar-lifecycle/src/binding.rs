//! Trigger bindings.

use std::fmt;

use gondar_core::tracker::Tracker;

use crate::list::EventList;
use crate::trigger::EventTrigger;

type Guard = Box<dyn Fn() -> bool + Send + Sync>;

/// Events bound to one lifecycle trigger, gated by a guard evaluated when
/// the trigger fires. Read-only once constructed.
pub struct TriggerBinding {
    trigger: EventTrigger,
    events: EventList,
    guard: Guard,
}

impl fmt::Debug for TriggerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerBinding")
            .field("trigger", &self.trigger)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl TriggerBinding {
    /// Binds `events` to `trigger` with a guard that always passes.
    #[must_use]
    pub fn new(trigger: EventTrigger, events: EventList) -> Self {
        Self {
            trigger,
            events,
            guard: Box::new(|| true),
        }
    }

    /// Replaces the guard.
    #[must_use]
    pub fn given(mut self, guard: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.guard = Box::new(guard);
        self
    }

    /// The trigger this binding listens for.
    #[must_use]
    pub fn trigger(&self) -> EventTrigger {
        self.trigger
    }

    /// The bound events.
    #[must_use]
    pub fn events(&self) -> &EventList {
        &self.events
    }

    /// Evaluates the guard and, when it passes, tracks every event in
    /// declaration order. Returns how many events were tracked.
    pub(crate) fn fire(&self, tracker: &dyn Tracker) -> usize {
        if !(self.guard)() {
            return 0;
        }
        for event in &self.events {
            tracker.track(event.as_ref());
        }
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use gondar_catalog::{ScreenViewedEvent, StoreViewedEvent};
    use gondar_test_support::RecordingTracker;

    use super::*;

    #[test]
    fn test_fire_tracks_events_in_order() {
        // Arrange
        let tracker = RecordingTracker::new();
        let binding = TriggerBinding::new(
            EventTrigger::Appear,
            crate::events![ScreenViewedEvent::new("Store"), StoreViewedEvent],
        );

        // Act
        let dispatched = binding.fire(&tracker);

        // Assert
        assert_eq!(dispatched, 2);
        assert_eq!(tracker.tracked_names(), vec!["screen_view", "view_cart"]);
    }

    #[test]
    fn test_failing_guard_tracks_nothing() {
        let tracker = RecordingTracker::new();
        let binding = TriggerBinding::new(EventTrigger::Disappear, crate::events![StoreViewedEvent])
            .given(|| false);

        assert_eq!(binding.fire(&tracker), 0);
        assert!(tracker.tracked().is_empty());
    }

    #[test]
    fn test_accessors() {
        let binding = TriggerBinding::new(EventTrigger::Disappear, crate::events![StoreViewedEvent]);
        assert_eq!(binding.trigger(), EventTrigger::Disappear);
        assert_eq!(binding.events().len(), 1);
    }
}
