//! Console backends — stand-ins for the vendor SDKs that write each call to
//! the log instead of the network.

use gondar_core::backend::{AnalyticsBackend, ProductAnalyticsBackend, TelemetryBackend};
use gondar_core::error::SinkError;
use gondar_core::event::TransactionRef;
use gondar_core::parameter::{ScalarMap, TextMap};
use serde_json::Value;
use tracing::info;

fn render(parameters: Option<&ScalarMap>) -> String {
    parameters.map_or_else(String::new, |map| Value::Object(map.clone()).to_string())
}

/// Logs mobile analytics SDK calls.
#[derive(Debug, Default)]
pub struct ConsoleAnalyticsBackend;

impl AnalyticsBackend for ConsoleAnalyticsBackend {
    fn log_event(&self, name: &str, parameters: Option<&ScalarMap>) -> Result<(), SinkError> {
        info!(backend = "analytics", event = name, parameters = %render(parameters), "log_event");
        Ok(())
    }

    fn set_user_property(&self, value: Option<&str>, for_name: &str) -> Result<(), SinkError> {
        info!(backend = "analytics", property = for_name, value = ?value, "set_user_property");
        Ok(())
    }
}

/// Logs product analytics SDK calls.
#[derive(Debug, Default)]
pub struct ConsoleProductBackend;

impl ProductAnalyticsBackend for ConsoleProductBackend {
    fn track(&self, event: &str, properties: Option<&ScalarMap>) -> Result<(), SinkError> {
        info!(backend = "product", event, properties = %render(properties), "track");
        Ok(())
    }

    fn set_people_property(&self, property: &str, to: &Value) -> Result<(), SinkError> {
        info!(backend = "product", property, value = %to, "people.set");
        Ok(())
    }
}

/// Logs telemetry SDK calls.
#[derive(Debug, Default)]
pub struct ConsoleTelemetryBackend;

impl TelemetryBackend for ConsoleTelemetryBackend {
    fn signal(&self, name: &str, parameters: Option<&TextMap>) -> Result<(), SinkError> {
        info!(backend = "telemetry", signal = name, parameters = ?parameters, "signal");
        Ok(())
    }

    fn purchase_completed(&self, transaction: &TransactionRef) -> Result<(), SinkError> {
        info!(
            backend = "telemetry",
            transaction_id = transaction.transaction_id(),
            product_id = transaction.product_id(),
            "purchase_completed"
        );
        Ok(())
    }
}
