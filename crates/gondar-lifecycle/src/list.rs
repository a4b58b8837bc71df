//! Ordered event lists.

use std::slice;

use gondar_core::event::Event;

/// Ordered sequence of events, kept in declaration order.
#[derive(Debug, Default)]
pub struct EventList {
    events: Vec<Box<dyn Event>>,
}

impl EventList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a list.
    #[must_use]
    pub fn builder() -> EventListBuilder {
        EventListBuilder::default()
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the list holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates the events in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Event + 'static)> {
        self.into_iter().map(AsRef::as_ref)
    }
}

impl From<Vec<Box<dyn Event>>> for EventList {
    fn from(events: Vec<Box<dyn Event>>) -> Self {
        Self { events }
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Box<dyn Event>;
    type IntoIter = slice::Iter<'a, Box<dyn Event>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Builder for [`EventList`].
#[derive(Debug, Default)]
pub struct EventListBuilder {
    events: Vec<Box<dyn Event>>,
}

impl EventListBuilder {
    /// Appends `event`.
    #[must_use]
    pub fn event(mut self, event: impl Event + 'static) -> Self {
        self.events.push(Box::new(event));
        self
    }

    /// Finishes the list.
    #[must_use]
    pub fn build(self) -> EventList {
        EventList::from(self.events)
    }
}

/// Builds an [`EventList`] from events listed inline, keeping their order.
///
/// ```
/// use gondar_catalog::{ScreenViewedEvent, StoreViewedEvent};
/// use gondar_lifecycle::events;
///
/// let list = events![ScreenViewedEvent::new("Store"), StoreViewedEvent];
/// assert_eq!(list.len(), 2);
/// ```
#[macro_export]
macro_rules! events {
    () => {
        $crate::EventList::new()
    };
    ($($event:expr),+ $(,)?) => {
        $crate::EventList::builder()$(.event($event))+.build()
    };
}
