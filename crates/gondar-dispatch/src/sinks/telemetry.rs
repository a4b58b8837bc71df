//! Privacy telemetry SDK sink.

use std::sync::Arc;

use gondar_core::backend::TelemetryBackend;
use gondar_core::delivery::Occurrence;
use gondar_core::error::SinkError;
use gondar_core::parameter::to_text_map;
use gondar_core::sink::Sink;

/// Forwards occurrences as signals with text parameters. An occurrence that
/// carries a transaction reference is reported through `purchase_completed`
/// instead. User properties are not supported.
#[derive(Debug, Clone)]
pub struct TelemetrySink {
    backend: Arc<dyn TelemetryBackend>,
}

impl TelemetrySink {
    /// Sink identifier used in logs.
    pub const ID: &'static str = "telemetry";

    /// Creates a sink over `backend`.
    #[must_use]
    pub fn new(backend: Arc<dyn TelemetryBackend>) -> Self {
        Self { backend }
    }
}

impl Sink for TelemetrySink {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn log_occurrence(&self, occurrence: &Occurrence) -> Result<(), SinkError> {
        if let Some(transaction) = &occurrence.transaction {
            return self.backend.purchase_completed(transaction);
        }
        let parameters = occurrence.parameters.as_ref().map(to_text_map);
        self.backend.signal(&occurrence.name, parameters.as_ref())
    }
}
