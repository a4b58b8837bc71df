//! Mobile analytics SDK sink.

use std::sync::Arc;

use gondar_core::backend::AnalyticsBackend;
use gondar_core::delivery::{Occurrence, UserProperty};
use gondar_core::error::SinkError;
use gondar_core::parameter::to_scalar_map;
use gondar_core::sink::Sink;

/// Forwards occurrences as `log_event` calls with scalar parameters and
/// user properties as `set_user_property` calls.
#[derive(Debug, Clone)]
pub struct AnalyticsSdkSink {
    backend: Arc<dyn AnalyticsBackend>,
}

impl AnalyticsSdkSink {
    /// Sink identifier used in logs.
    pub const ID: &'static str = "analytics";

    /// Creates a sink over `backend`.
    #[must_use]
    pub fn new(backend: Arc<dyn AnalyticsBackend>) -> Self {
        Self { backend }
    }
}

impl Sink for AnalyticsSdkSink {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn log_occurrence(&self, occurrence: &Occurrence) -> Result<(), SinkError> {
        let parameters = occurrence.parameters.as_ref().map(to_scalar_map);
        self.backend.log_event(&occurrence.name, parameters.as_ref())
    }

    fn supports_user_properties(&self) -> bool {
        true
    }

    fn set_user_property(&self, property: &UserProperty) -> Result<(), SinkError> {
        self.backend
            .set_user_property(property.value.as_deref(), &property.name)
    }
}
