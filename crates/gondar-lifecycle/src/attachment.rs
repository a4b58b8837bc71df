//! Per-node tracking attachment.
//!
//! Hosts may deliver the same lifecycle signal several times for one logical
//! appearance (layout passes, re-renders). Each attachment therefore keeps a
//! one-shot latch per trigger: the first signal sets it and fires the bound
//! events, every later signal for that trigger is ignored. The latch is set
//! before the guards run, so a guard that fails still consumes it.

use std::sync::Arc;

use gondar_core::tracker::Tracker;
use gondar_dispatch::global::default_tracker;
use tracing::{debug, instrument};

use crate::binding::TriggerBinding;
use crate::list::EventList;
use crate::trigger::EventTrigger;

/// Result of delivering one lifecycle signal to an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalOutcome {
    /// The trigger had already fired on this attachment; nothing was tracked.
    AlreadyTracked,
    /// The latch was set now; `dispatched` events were tracked.
    Fired {
        /// Number of events handed to the tracker.
        dispatched: usize,
    },
}

#[derive(Debug, Clone, Copy, Default)]
struct Latches {
    appear_tracked: bool,
    disappear_tracked: bool,
}

impl Latches {
    /// Sets the latch for `trigger`. Returns `false` if it was already set.
    fn consume(&mut self, trigger: EventTrigger) -> bool {
        let latch = match trigger {
            EventTrigger::Appear => &mut self.appear_tracked,
            EventTrigger::Disappear => &mut self.disappear_tracked,
        };
        !std::mem::replace(latch, true)
    }

    fn is_set(self, trigger: EventTrigger) -> bool {
        match trigger {
            EventTrigger::Appear => self.appear_tracked,
            EventTrigger::Disappear => self.disappear_tracked,
        }
    }
}

/// Tracking state for one UI attachment point.
pub struct TrackingAttachment {
    tracker: Arc<dyn Tracker>,
    bindings: Vec<TriggerBinding>,
    latches: Latches,
}

impl std::fmt::Debug for TrackingAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingAttachment")
            .field("bindings", &self.bindings)
            .field("latches", &self.latches)
            .finish_non_exhaustive()
    }
}

impl TrackingAttachment {
    /// Creates an attachment that tracks into `tracker`.
    #[must_use]
    pub fn new(tracker: Arc<dyn Tracker>) -> Self {
        Self {
            tracker,
            bindings: Vec::new(),
            latches: Latches::default(),
        }
    }

    /// Creates an attachment that tracks into the process-wide default
    /// tracker.
    #[must_use]
    pub fn with_default_tracker() -> Self {
        Self::new(default_tracker())
    }

    /// Binds `events` to `trigger`, unconditionally.
    #[must_use]
    pub fn track(self, on: EventTrigger, events: EventList) -> Self {
        self.bind(TriggerBinding::new(on, events))
    }

    /// Binds `events` to `trigger`, firing only when `given` returns `true`
    /// at signal time.
    #[must_use]
    pub fn track_given(
        self,
        on: EventTrigger,
        given: impl Fn() -> bool + Send + Sync + 'static,
        events: EventList,
    ) -> Self {
        self.bind(TriggerBinding::new(on, events).given(given))
    }

    /// Adds a prepared binding. Bindings fire in the order they were added.
    #[must_use]
    pub fn bind(mut self, binding: TriggerBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Returns `true` once `trigger` has fired on this attachment.
    #[must_use]
    pub fn is_tracked(&self, trigger: EventTrigger) -> bool {
        self.latches.is_set(trigger)
    }

    /// Handles the host's appear signal.
    pub fn on_appear(&mut self) -> SignalOutcome {
        self.signal(EventTrigger::Appear)
    }

    /// Handles the host's disappear signal.
    pub fn on_disappear(&mut self) -> SignalOutcome {
        self.signal(EventTrigger::Disappear)
    }

    /// Handles a lifecycle signal.
    ///
    /// # Panics
    ///
    /// Propagates a panic raised by a binding's guard.
    #[instrument(level = "debug", skip(self), fields(bindings = self.bindings.len()))]
    pub fn signal(&mut self, trigger: EventTrigger) -> SignalOutcome {
        if !self.latches.consume(trigger) {
            debug!("trigger already tracked, ignoring repeated signal");
            return SignalOutcome::AlreadyTracked;
        }
        let dispatched: usize = self
            .bindings
            .iter()
            .filter(|binding| binding.trigger() == trigger)
            .map(|binding| binding.fire(self.tracker.as_ref()))
            .sum();
        debug!(dispatched, "trigger fired");
        SignalOutcome::Fired { dispatched }
    }
}
