//! Test backends — recording implementations of the vendor SDK interfaces.

use std::sync::Mutex;

use gondar_core::backend::{AnalyticsBackend, ProductAnalyticsBackend, TelemetryBackend};
use gondar_core::error::SinkError;
use gondar_core::event::TransactionRef;
use gondar_core::parameter::{ScalarMap, TextMap};
use serde_json::Value;

/// A call made to the mobile analytics SDK.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsCall {
    /// `log_event(name, parameters)`.
    LogEvent {
        /// Event name.
        name: String,
        /// Scalar parameters, if any.
        parameters: Option<ScalarMap>,
    },
    /// `set_user_property(value, for_name)`.
    SetUserProperty {
        /// Property value.
        value: Option<String>,
        /// Property name.
        name: String,
    },
}

/// An analytics backend that records every call and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingAnalyticsBackend {
    calls: Mutex<Vec<AnalyticsCall>>,
}

impl RecordingAnalyticsBackend {
    /// Create an empty recording backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all calls made.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<AnalyticsCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl AnalyticsBackend for RecordingAnalyticsBackend {
    fn log_event(&self, name: &str, parameters: Option<&ScalarMap>) -> Result<(), SinkError> {
        self.calls.lock().unwrap().push(AnalyticsCall::LogEvent {
            name: name.to_owned(),
            parameters: parameters.cloned(),
        });
        Ok(())
    }

    fn set_user_property(&self, value: Option<&str>, for_name: &str) -> Result<(), SinkError> {
        self.calls.lock().unwrap().push(AnalyticsCall::SetUserProperty {
            value: value.map(str::to_owned),
            name: for_name.to_owned(),
        });
        Ok(())
    }
}

/// An analytics backend whose SDK was never initialised.
#[derive(Debug)]
pub struct UnavailableAnalyticsBackend;

impl AnalyticsBackend for UnavailableAnalyticsBackend {
    fn log_event(&self, _name: &str, _parameters: Option<&ScalarMap>) -> Result<(), SinkError> {
        Err(SinkError::Unavailable { sink: "analytics" })
    }

    fn set_user_property(&self, _value: Option<&str>, _for_name: &str) -> Result<(), SinkError> {
        Err(SinkError::Unavailable { sink: "analytics" })
    }
}

/// A call made to the product analytics SDK.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductCall {
    /// `track(event, properties)`.
    Track {
        /// Event name.
        event: String,
        /// Scalar properties, if any.
        properties: Option<ScalarMap>,
    },
    /// `set_people_property(property, to)`.
    SetPeopleProperty {
        /// Profile property name.
        property: String,
        /// Profile property value.
        to: Value,
    },
}

/// A product analytics backend that records every call and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingProductBackend {
    calls: Mutex<Vec<ProductCall>>,
}

impl RecordingProductBackend {
    /// Create an empty recording backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all calls made.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<ProductCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProductAnalyticsBackend for RecordingProductBackend {
    fn track(&self, event: &str, properties: Option<&ScalarMap>) -> Result<(), SinkError> {
        self.calls.lock().unwrap().push(ProductCall::Track {
            event: event.to_owned(),
            properties: properties.cloned(),
        });
        Ok(())
    }

    fn set_people_property(&self, property: &str, to: &Value) -> Result<(), SinkError> {
        self.calls.lock().unwrap().push(ProductCall::SetPeopleProperty {
            property: property.to_owned(),
            to: to.clone(),
        });
        Ok(())
    }
}

/// A call made to the telemetry SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryCall {
    /// `signal(name, parameters)`.
    Signal {
        /// Signal name.
        name: String,
        /// Text parameters, if any.
        parameters: Option<TextMap>,
    },
    /// `purchase_completed(transaction)`.
    PurchaseCompleted(TransactionRef),
}

/// A telemetry backend that records every call and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingTelemetryBackend {
    calls: Mutex<Vec<TelemetryCall>>,
}

impl RecordingTelemetryBackend {
    /// Create an empty recording backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all calls made.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<TelemetryCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl TelemetryBackend for RecordingTelemetryBackend {
    fn signal(&self, name: &str, parameters: Option<&TextMap>) -> Result<(), SinkError> {
        self.calls.lock().unwrap().push(TelemetryCall::Signal {
            name: name.to_owned(),
            parameters: parameters.cloned(),
        });
        Ok(())
    }

    fn purchase_completed(&self, transaction: &TransactionRef) -> Result<(), SinkError> {
        self.calls
            .lock()
            .unwrap()
            .push(TelemetryCall::PurchaseCompleted(transaction.clone()));
        Ok(())
    }
}
