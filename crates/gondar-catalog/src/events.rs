//! Catalog events.

use gondar_core::event::{AnalyticsEvent, TransactionRef, tracking_name};
use gondar_core::parameter::{OptionalParameters, ParameterValue};

use crate::names::{
    EVENT_BEGIN_CHECKOUT, EVENT_PURCHASE, EVENT_SCREEN_VIEW, EVENT_VIEW_CART, PARAM_AFFILIATION,
    PARAM_COUPON, PARAM_CURRENCY, PARAM_ITEMS, PARAM_SCREEN_CLASS, PARAM_SCREEN_NAME,
    PARAM_SHIPPING, PARAM_TAX, PARAM_TRANSACTION_ID, PARAM_VALUE,
};

fn optional_parameters<const N: usize>(
    entries: [(&str, Option<ParameterValue>); N],
) -> OptionalParameters {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

/// Emitted when a screen is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenViewedEvent {
    parameters: OptionalParameters,
}

impl ScreenViewedEvent {
    /// Creates a screen view for the screen called `name`; the name is used
    /// for both the screen class and the screen name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            parameters: optional_parameters([
                (PARAM_SCREEN_CLASS, Some(name.clone().into())),
                (PARAM_SCREEN_NAME, Some(name.into())),
            ]),
        }
    }

    /// Creates a screen view named after the view type `V`.
    #[must_use]
    pub fn for_view<V: ?Sized>() -> Self {
        Self::new(tracking_name::<V>())
    }
}

gondar_core::impl_event!(ScreenViewedEvent: analytics);

impl AnalyticsEvent for ScreenViewedEvent {
    fn name(&self) -> &str {
        EVENT_SCREEN_VIEW
    }

    fn parameters(&self) -> Option<&OptionalParameters> {
        Some(&self.parameters)
    }
}

/// Emitted when checkout begins.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseStartedEvent {
    parameters: Option<OptionalParameters>,
}

impl PurchaseStartedEvent {
    /// Creates a checkout event for an order worth `value` in `currency`.
    #[must_use]
    pub fn new(currency: impl Into<String>, value: f64) -> Self {
        Self {
            parameters: Some(optional_parameters([
                (PARAM_COUPON, None),
                (PARAM_CURRENCY, Some(ParameterValue::String(currency.into()))),
                (PARAM_ITEMS, None),
                (PARAM_VALUE, Some(value.into())),
            ])),
        }
    }

    /// Creates a checkout event without parameters, for stores that do not
    /// expose price details up front.
    #[must_use]
    pub fn empty() -> Self {
        Self { parameters: None }
    }
}

gondar_core::impl_event!(PurchaseStartedEvent: analytics);

impl AnalyticsEvent for PurchaseStartedEvent {
    fn name(&self) -> &str {
        EVENT_BEGIN_CHECKOUT
    }

    fn parameters(&self) -> Option<&OptionalParameters> {
        self.parameters.as_ref()
    }
}

/// Emitted when a purchase completes.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseCompletedEvent {
    parameters: Option<OptionalParameters>,
    transaction: Option<TransactionRef>,
}

impl PurchaseCompletedEvent {
    /// Creates a purchase event without parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: None,
            transaction: None,
        }
    }

    /// Creates a purchase event with order details. Coupon, items, shipping
    /// and tax are declared but left unset.
    #[must_use]
    pub fn with_details(
        affiliation: Option<String>,
        currency: impl Into<String>,
        transaction_id: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            parameters: Some(optional_parameters([
                (PARAM_AFFILIATION, affiliation.map(ParameterValue::from)),
                (PARAM_COUPON, None),
                (PARAM_CURRENCY, Some(ParameterValue::String(currency.into()))),
                (PARAM_ITEMS, None),
                (PARAM_SHIPPING, None),
                (PARAM_TAX, None),
                (PARAM_TRANSACTION_ID, Some(ParameterValue::String(transaction_id.into()))),
                (PARAM_VALUE, Some(value.into())),
            ])),
            transaction: None,
        }
    }

    /// Attaches the store transaction behind this purchase.
    #[must_use]
    pub fn with_transaction(mut self, transaction: TransactionRef) -> Self {
        self.transaction = Some(transaction);
        self
    }
}

impl Default for PurchaseCompletedEvent {
    fn default() -> Self {
        Self::new()
    }
}

gondar_core::impl_event!(PurchaseCompletedEvent: analytics);

impl AnalyticsEvent for PurchaseCompletedEvent {
    fn name(&self) -> &str {
        EVENT_PURCHASE
    }

    fn parameters(&self) -> Option<&OptionalParameters> {
        self.parameters.as_ref()
    }

    fn transaction(&self) -> Option<&TransactionRef> {
        self.transaction.as_ref()
    }
}

/// Emitted when the store is viewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreViewedEvent;

impl StoreViewedEvent {
    /// Creates a store view event.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

gondar_core::impl_event!(StoreViewedEvent: analytics);

impl AnalyticsEvent for StoreViewedEvent {
    fn name(&self) -> &str {
        EVENT_VIEW_CART
    }

    fn parameters(&self) -> Option<&OptionalParameters> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gondar_core::capability::{Capability, classify};
    use gondar_core::delivery::{Delivery, route};
    use gondar_core::event::Event;

    #[derive(Debug)]
    struct HomeView;

    fn sent_parameters(event: &dyn Event) -> Option<gondar_core::parameter::Parameters> {
        match route(event) {
            Delivery::Occurrence(occurrence) => occurrence.parameters,
            other @ Delivery::UserProperty(_) => panic!("expected Occurrence, got {other:?}"),
        }
    }

    #[test]
    fn test_screen_viewed_uses_name_for_class_and_screen() {
        // Arrange
        let event = ScreenViewedEvent::new("Home");

        // Act
        let parameters = sent_parameters(&event).unwrap();

        // Assert
        assert_eq!(event.name(), "screen_view");
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters["screen_class"], ParameterValue::from("Home"));
        assert_eq!(parameters["screen_name"], ParameterValue::from("Home"));
    }

    #[test]
    fn test_screen_viewed_for_view_uses_type_name() {
        let event = ScreenViewedEvent::for_view::<HomeView>();
        assert_eq!(event, ScreenViewedEvent::new("HomeView"));
    }

    #[test]
    fn test_purchase_started_sends_only_set_keys() {
        // Arrange
        let event = PurchaseStartedEvent::new("USD", 9.99);

        // Act
        let parameters = sent_parameters(&event).unwrap();

        // Assert
        assert_eq!(event.name(), "begin_checkout");
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters["currency"], ParameterValue::from("USD"));
        assert_eq!(parameters["value"], ParameterValue::from(9.99));
        assert!(!parameters.contains_key("items"));
        assert!(!parameters.contains_key("coupon"));
    }

    #[test]
    fn test_purchase_started_declares_optional_keys() {
        let event = PurchaseStartedEvent::new("EUR", 1.0);
        let declared = event.parameters().unwrap();
        assert_eq!(declared.get("coupon"), Some(&None));
        assert_eq!(declared.get("items"), Some(&None));
    }

    #[test]
    fn test_empty_purchase_started_has_no_parameters() {
        let event = PurchaseStartedEvent::empty();
        assert!(event.parameters().is_none());
        assert!(sent_parameters(&event).is_none());
    }

    #[test]
    fn test_purchase_completed_with_details_omits_unset_keys() {
        // Arrange
        let event = PurchaseCompletedEvent::with_details(None, "USD", "T-1001", 4.99);

        // Act
        let parameters = sent_parameters(&event).unwrap();

        // Assert
        assert_eq!(event.name(), "purchase");
        assert_eq!(
            parameters.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["currency", "transaction_id", "value"]
        );
        assert_eq!(parameters["transaction_id"], ParameterValue::from("T-1001"));
    }

    #[test]
    fn test_purchase_completed_with_affiliation() {
        let event =
            PurchaseCompletedEvent::with_details(Some("App Store".to_owned()), "USD", "T-1", 1.5);
        let parameters = sent_parameters(&event).unwrap();
        assert_eq!(parameters["affiliation"], ParameterValue::from("App Store"));
    }

    #[test]
    fn test_purchase_completed_carries_transaction() {
        // Arrange
        let transaction = TransactionRef::new(7, "pro.monthly");

        // Act
        let event = PurchaseCompletedEvent::new().with_transaction(transaction.clone());

        // Assert
        assert!(event.parameters().is_none());
        match route(&event) {
            Delivery::Occurrence(occurrence) => {
                assert_eq!(occurrence.transaction, Some(transaction));
            }
            other @ Delivery::UserProperty(_) => panic!("expected Occurrence, got {other:?}"),
        }
    }

    #[test]
    fn test_store_viewed_has_no_parameters() {
        let event = StoreViewedEvent::new();
        assert_eq!(event.name(), "view_cart");
        assert!(sent_parameters(&event).is_none());
    }

    #[test]
    fn test_catalog_events_classify_as_analytics() {
        let events: [&dyn Event; 4] = [
            &ScreenViewedEvent::new("Home"),
            &PurchaseStartedEvent::empty(),
            &PurchaseCompletedEvent::new(),
            &StoreViewedEvent,
        ];
        for event in events {
            assert_eq!(classify(event).capability(), Some(Capability::Analytics));
        }
    }
}
