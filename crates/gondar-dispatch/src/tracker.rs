//! Fan-out tracker.
//!
//! Each `track` call classifies the event once, routes it into a neutral
//! delivery and hands that delivery to every registered sink in
//! registration order. A failing sink is logged and skipped; the remaining
//! sinks still receive the delivery.

use std::sync::Arc;

use gondar_core::capability::{capabilities, classify};
use gondar_core::delivery::Delivery;
use gondar_core::event::Event;
use gondar_core::sink::Sink;
use gondar_core::tracker::Tracker;
use tracing::{debug, trace, warn};

/// Tracker that forwards every event to a fixed list of sinks.
///
/// The sink list is immutable once built, so a single instance can be shared
/// across threads and called concurrently without external locking.
#[derive(Debug, Clone, Default)]
pub struct FanOutTracker {
    sinks: Arc<[Arc<dyn Sink>]>,
}

impl FanOutTracker {
    /// Starts building a tracker.
    #[must_use]
    pub fn builder() -> FanOutTrackerBuilder {
        FanOutTrackerBuilder::default()
    }

    /// Identifiers of the registered sinks, in delivery order.
    #[must_use]
    pub fn sink_ids(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|sink| sink.id()).collect()
    }

    fn deliver(&self, delivery: &Delivery) {
        for sink in self.sinks.iter() {
            let result = match delivery {
                Delivery::Occurrence(occurrence) => sink.log_occurrence(occurrence),
                Delivery::UserProperty(property) => {
                    if !sink.supports_user_properties() {
                        trace!(sink = sink.id(), event = %property.name, "sink skips user properties");
                        continue;
                    }
                    sink.set_user_property(property)
                }
            };
            if let Err(error) = result {
                warn!(sink = sink.id(), event = %delivery.name(), %error, "sink delivery failed");
            }
        }
    }
}

impl Tracker for FanOutTracker {
    fn track(&self, event: &dyn Event) {
        let satisfied = capabilities(event);
        let classified = classify(event);
        let capability = classified.capability();
        let delivery = Delivery::from(classified);
        debug!(
            event = %delivery.name(),
            capability = ?capability,
            capabilities = ?satisfied,
            sinks = self.sinks.len(),
            "tracking event"
        );
        self.deliver(&delivery);
    }
}

/// Builder for [`FanOutTracker`]. Sinks receive deliveries in the order they
/// are added.
#[derive(Debug, Default)]
pub struct FanOutTrackerBuilder {
    sinks: Vec<Arc<dyn Sink>>,
}

impl FanOutTrackerBuilder {
    /// Appends a sink.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Appends an already shared sink.
    #[must_use]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Freezes the sink list.
    #[must_use]
    pub fn build(self) -> FanOutTracker {
        FanOutTracker {
            sinks: self.sinks.into(),
        }
    }
}
