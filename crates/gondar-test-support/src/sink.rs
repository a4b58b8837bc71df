//! Test sinks — mock `Sink` implementations for tests.

use std::sync::Mutex;

use gondar_core::delivery::{Delivery, Occurrence, UserProperty};
use gondar_core::error::SinkError;
use gondar_core::sink::Sink;

use crate::journal::CallJournal;

/// A sink that records every delivery it receives. Optionally mirrors each
/// call into a shared [`CallJournal`] as `"<id>:<name>"`.
#[derive(Debug)]
pub struct RecordingSink {
    id: &'static str,
    user_properties: bool,
    received: Mutex<Vec<Delivery>>,
    journal: Option<CallJournal>,
}

impl RecordingSink {
    /// Create a recording sink that does not accept user properties.
    #[must_use]
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            user_properties: false,
            received: Mutex::new(Vec::new()),
            journal: None,
        }
    }

    /// Create a recording sink that accepts user properties.
    #[must_use]
    pub fn with_user_properties(id: &'static str) -> Self {
        Self {
            user_properties: true,
            ..Self::new(id)
        }
    }

    /// Mirror every received call into `journal`.
    #[must_use]
    pub fn journaled(mut self, journal: &CallJournal) -> Self {
        self.journal = Some(journal.clone());
        self
    }

    /// Returns a snapshot of all deliveries received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn received(&self) -> Vec<Delivery> {
        self.received.lock().unwrap().clone()
    }

    fn push(&self, delivery: Delivery) {
        if let Some(journal) = &self.journal {
            journal.record(format!("{}:{}", self.id, delivery.name()));
        }
        self.received.lock().unwrap().push(delivery);
    }
}

impl Sink for RecordingSink {
    fn id(&self) -> &'static str {
        self.id
    }

    fn log_occurrence(&self, occurrence: &Occurrence) -> Result<(), SinkError> {
        self.push(Delivery::Occurrence(occurrence.clone()));
        Ok(())
    }

    fn supports_user_properties(&self) -> bool {
        self.user_properties
    }

    fn set_user_property(&self, property: &UserProperty) -> Result<(), SinkError> {
        self.push(Delivery::UserProperty(property.clone()));
        Ok(())
    }
}

/// A sink that always reports itself unavailable. Useful for testing that
/// one failing sink does not block the others.
#[derive(Debug)]
pub struct FailingSink {
    id: &'static str,
}

impl FailingSink {
    /// Create a failing sink.
    #[must_use]
    pub fn new(id: &'static str) -> Self {
        Self { id }
    }
}

impl Sink for FailingSink {
    fn id(&self) -> &'static str {
        self.id
    }

    fn log_occurrence(&self, _occurrence: &Occurrence) -> Result<(), SinkError> {
        Err(SinkError::Unavailable { sink: self.id })
    }

    fn supports_user_properties(&self) -> bool {
        true
    }

    fn set_user_property(&self, _property: &UserProperty) -> Result<(), SinkError> {
        Err(SinkError::Unavailable { sink: self.id })
    }
}
