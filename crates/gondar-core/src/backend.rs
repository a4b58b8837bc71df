//! Outbound interfaces of the analytics backends.
//!
//! Each trait mirrors the calls one vendor SDK exposes. Implementations are
//! thin bindings; shape conversion happens in the sinks.

use std::fmt;

use serde_json::Value;

use crate::error::SinkError;
use crate::event::TransactionRef;
use crate::parameter::{ScalarMap, TextMap};

/// Mobile analytics SDK.
pub trait AnalyticsBackend: Send + Sync + fmt::Debug {
    /// Logs an event with optional scalar parameters.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the SDK is not initialised or refuses the call.
    fn log_event(&self, name: &str, parameters: Option<&ScalarMap>) -> Result<(), SinkError>;

    /// Sets (or clears, for `None`) a user property.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the SDK is not initialised or refuses the call.
    fn set_user_property(&self, value: Option<&str>, for_name: &str) -> Result<(), SinkError>;
}

/// Product analytics SDK.
pub trait ProductAnalyticsBackend: Send + Sync + fmt::Debug {
    /// Tracks an event with optional scalar properties.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the SDK is not initialised or refuses the call.
    fn track(&self, event: &str, properties: Option<&ScalarMap>) -> Result<(), SinkError>;

    /// Sets a property on the current user's people profile.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the SDK is not initialised or refuses the call.
    fn set_people_property(&self, property: &str, to: &Value) -> Result<(), SinkError>;
}

/// Privacy-focused telemetry SDK. Accepts text parameters only.
pub trait TelemetryBackend: Send + Sync + fmt::Debug {
    /// Sends a named signal.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the SDK is not initialised or refuses the call.
    fn signal(&self, name: &str, parameters: Option<&TextMap>) -> Result<(), SinkError>;

    /// Reports a completed store transaction.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the SDK is not initialised or refuses the call.
    fn purchase_completed(&self, transaction: &TransactionRef) -> Result<(), SinkError>;
}
