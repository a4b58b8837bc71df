//! Product analytics SDK sink.

use std::sync::Arc;

use gondar_core::backend::ProductAnalyticsBackend;
use gondar_core::delivery::{Occurrence, UserProperty};
use gondar_core::error::SinkError;
use gondar_core::parameter::to_scalar_map;
use gondar_core::sink::Sink;
use serde_json::Value;
use tracing::trace;

/// Forwards occurrences as `track` calls with scalar properties.
///
/// People-profile updates are opt-in: by default this sink does not accept
/// user properties.
#[derive(Debug, Clone)]
pub struct ProductAnalyticsSink {
    backend: Arc<dyn ProductAnalyticsBackend>,
    people_properties: bool,
}

impl ProductAnalyticsSink {
    /// Sink identifier used in logs.
    pub const ID: &'static str = "product";

    /// Creates a sink over `backend` with people-property forwarding off.
    #[must_use]
    pub fn new(backend: Arc<dyn ProductAnalyticsBackend>) -> Self {
        Self {
            backend,
            people_properties: false,
        }
    }

    /// Enables or disables forwarding user properties to the people profile.
    #[must_use]
    pub fn with_people_properties(mut self, enabled: bool) -> Self {
        self.people_properties = enabled;
        self
    }
}

impl Sink for ProductAnalyticsSink {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn log_occurrence(&self, occurrence: &Occurrence) -> Result<(), SinkError> {
        let properties = occurrence.parameters.as_ref().map(to_scalar_map);
        self.backend.track(&occurrence.name, properties.as_ref())
    }

    fn supports_user_properties(&self) -> bool {
        self.people_properties
    }

    fn set_user_property(&self, property: &UserProperty) -> Result<(), SinkError> {
        // people.set has no "clear" form.
        let Some(value) = &property.value else {
            trace!(sink = Self::ID, property = %property.name, "skipping unset people property");
            return Ok(());
        };
        self.backend
            .set_people_property(&property.name, &Value::String(value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gondar_core::parameter::Parameters;
    use gondar_test_support::{ProductCall, RecordingProductBackend};
    use serde_json::json;

    fn property(value: Option<&str>) -> UserProperty {
        UserProperty {
            name: "plan".to_owned(),
            value: value.map(str::to_owned),
        }
    }

    #[test]
    fn test_log_occurrence_tracks_with_scalar_properties() {
        // Arrange
        let backend = Arc::new(RecordingProductBackend::new());
        let sink = ProductAnalyticsSink::new(backend.clone());
        let mut parameters = Parameters::new();
        parameters.insert("currency".to_owned(), "USD".into());
        parameters.insert("value".to_owned(), 9.99.into());

        // Act
        sink.log_occurrence(&Occurrence {
            name: "begin_checkout".to_owned(),
            parameters: Some(parameters),
            transaction: None,
        })
        .unwrap();

        // Assert
        let mut expected = serde_json::Map::new();
        expected.insert("currency".to_owned(), json!("USD"));
        expected.insert("value".to_owned(), json!(9.99));
        assert_eq!(
            backend.calls(),
            vec![ProductCall::Track {
                event: "begin_checkout".to_owned(),
                properties: Some(expected),
            }]
        );
    }

    #[test]
    fn test_people_properties_are_off_by_default() {
        let sink = ProductAnalyticsSink::new(Arc::new(RecordingProductBackend::new()));
        assert!(!sink.supports_user_properties());
    }

    #[test]
    fn test_enabled_people_properties_set_profile_value() {
        // Arrange
        let backend = Arc::new(RecordingProductBackend::new());
        let sink = ProductAnalyticsSink::new(backend.clone()).with_people_properties(true);

        // Act
        sink.set_user_property(&property(Some("pro"))).unwrap();

        // Assert
        assert!(sink.supports_user_properties());
        assert_eq!(
            backend.calls(),
            vec![ProductCall::SetPeopleProperty {
                property: "plan".to_owned(),
                to: json!("pro"),
            }]
        );
    }

    #[test]
    fn test_unset_people_property_is_skipped() {
        let backend = Arc::new(RecordingProductBackend::new());
        let sink = ProductAnalyticsSink::new(backend.clone()).with_people_properties(true);

        sink.set_user_property(&property(None)).unwrap();

        assert!(backend.calls().is_empty());
    }
}
