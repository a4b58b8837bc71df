//! End-to-end tracking: catalog events bound to lifecycle triggers, fanned
//! out to the backend sinks.

use std::sync::Arc;
use std::thread;

use gondar_catalog::{
    PurchaseCompletedEvent, PurchaseStartedEvent, ScreenViewedEvent, StoreViewedEvent,
};
use gondar_core::event::{TransactionRef, UserEvent};
use gondar_core::tracker::Tracker;
use gondar_dispatch::FanOutTracker;
use gondar_dispatch::sinks::{AnalyticsSdkSink, ProductAnalyticsSink, TelemetrySink};
use gondar_lifecycle::{EventTrigger, SignalOutcome, TrackingAttachment, events};
use gondar_test_support::{
    AnalyticsCall, ProductCall, RecordingAnalyticsBackend, RecordingProductBackend,
    RecordingTelemetryBackend, TelemetryCall, UnavailableAnalyticsBackend,
};
use serde_json::json;

struct Backends {
    analytics: Arc<RecordingAnalyticsBackend>,
    product: Arc<RecordingProductBackend>,
    telemetry: Arc<RecordingTelemetryBackend>,
    tracker: Arc<dyn Tracker>,
}

fn backends() -> Backends {
    let analytics = Arc::new(RecordingAnalyticsBackend::new());
    let product = Arc::new(RecordingProductBackend::new());
    let telemetry = Arc::new(RecordingTelemetryBackend::new());
    let tracker = FanOutTracker::builder()
        .sink(AnalyticsSdkSink::new(analytics.clone()))
        .sink(ProductAnalyticsSink::new(product.clone()))
        .sink(TelemetrySink::new(telemetry.clone()))
        .build();
    Backends {
        analytics,
        product,
        telemetry,
        tracker: Arc::new(tracker),
    }
}

fn logged_names(calls: &[AnalyticsCall]) -> Vec<&str> {
    calls
        .iter()
        .filter_map(|call| match call {
            AnalyticsCall::LogEvent { name, .. } => Some(name.as_str()),
            AnalyticsCall::SetUserProperty { .. } => None,
        })
        .collect()
}

#[derive(Debug)]
struct Tier(Option<String>);

gondar_core::impl_event!(Tier: user);

impl UserEvent for Tier {
    fn name(&self) -> &str {
        "tier"
    }

    fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[test]
fn test_screen_view_on_appear_reaches_every_backend() {
    // Arrange
    let backends = backends();
    let mut attachment = TrackingAttachment::new(backends.tracker.clone())
        .track(EventTrigger::Appear, events![ScreenViewedEvent::new("Home")]);

    // Act
    attachment.on_appear();

    // Assert
    let expected = json!({ "screen_class": "Home", "screen_name": "Home" });
    assert_eq!(
        backends.analytics.calls(),
        vec![AnalyticsCall::LogEvent {
            name: "screen_view".to_owned(),
            parameters: expected.as_object().cloned(),
        }]
    );
    assert_eq!(
        backends.product.calls(),
        vec![ProductCall::Track {
            event: "screen_view".to_owned(),
            properties: expected.as_object().cloned(),
        }]
    );
    let telemetry_calls = backends.telemetry.calls();
    let [TelemetryCall::Signal { name, parameters }] = telemetry_calls.as_slice() else {
        panic!("expected a single telemetry signal");
    };
    assert_eq!(name, "screen_view");
    let parameters = parameters.clone().unwrap();
    assert_eq!(parameters.get("screen_name").map(String::as_str), Some("Home"));
}

#[test]
fn test_purchase_started_drops_absent_parameters() {
    // Arrange
    let backends = backends();
    let mut attachment = TrackingAttachment::new(backends.tracker.clone()).track(
        EventTrigger::Appear,
        events![PurchaseStartedEvent::new("USD", 9.99)],
    );

    // Act
    attachment.on_appear();

    // Assert
    assert_eq!(
        backends.analytics.calls(),
        vec![AnalyticsCall::LogEvent {
            name: "begin_checkout".to_owned(),
            parameters: json!({ "currency": "USD", "value": 9.99 }).as_object().cloned(),
        }]
    );
}

#[test]
fn test_guarded_disappear_tracks_nothing() {
    // Arrange
    let backends = backends();
    let mut attachment = TrackingAttachment::new(backends.tracker.clone()).track_given(
        EventTrigger::Disappear,
        || false,
        events![StoreViewedEvent],
    );

    // Act
    let outcome = attachment.on_disappear();

    // Assert
    assert_eq!(outcome, SignalOutcome::Fired { dispatched: 0 });
    assert!(backends.analytics.calls().is_empty());
    assert!(backends.product.calls().is_empty());
    assert!(backends.telemetry.calls().is_empty());
}

#[test]
fn test_duplicate_appear_is_tracked_once() {
    // Arrange
    let backends = backends();
    let mut attachment = TrackingAttachment::new(backends.tracker.clone())
        .track(EventTrigger::Appear, events![ScreenViewedEvent::new("Home")]);

    // Act
    attachment.on_appear();
    attachment.on_appear();

    // Assert
    assert_eq!(logged_names(&backends.analytics.calls()), vec!["screen_view"]);
    assert_eq!(backends.product.calls().len(), 1);
    assert_eq!(backends.telemetry.calls().len(), 1);
}

#[test]
fn test_list_order_is_preserved_per_backend() {
    // Arrange
    let backends = backends();
    let mut attachment = TrackingAttachment::new(backends.tracker.clone()).track(
        EventTrigger::Appear,
        events![
            ScreenViewedEvent::new("Store"),
            StoreViewedEvent,
            PurchaseStartedEvent::empty(),
        ],
    );

    // Act
    attachment.on_appear();

    // Assert
    assert_eq!(
        logged_names(&backends.analytics.calls()),
        vec!["screen_view", "view_cart", "begin_checkout"]
    );
}

#[test]
fn test_purchase_with_transaction_reports_transaction_to_telemetry() {
    // Arrange
    let backends = backends();
    let transaction = TransactionRef::new(42, "pro_monthly");
    let mut attachment = TrackingAttachment::new(backends.tracker.clone()).track(
        EventTrigger::Appear,
        events![PurchaseCompletedEvent::new().with_transaction(transaction.clone())],
    );

    // Act
    attachment.on_appear();

    // Assert
    assert_eq!(logged_names(&backends.analytics.calls()), vec!["purchase"]);
    assert_eq!(
        backends.telemetry.calls(),
        vec![TelemetryCall::PurchaseCompleted(transaction)]
    );
}

#[test]
fn test_user_event_reaches_only_user_property_sinks() {
    // Arrange
    let backends = backends();

    // Act
    backends.tracker.track(&Tier(Some("gold".to_owned())));

    // Assert
    assert_eq!(
        backends.analytics.calls(),
        vec![AnalyticsCall::SetUserProperty {
            value: Some("gold".to_owned()),
            name: "tier".to_owned(),
        }]
    );
    assert!(backends.product.calls().is_empty());
    assert!(backends.telemetry.calls().is_empty());
}

#[test]
fn test_unavailable_backend_does_not_block_others() {
    // Arrange
    let product = Arc::new(RecordingProductBackend::new());
    let tracker: Arc<dyn Tracker> = Arc::new(
        FanOutTracker::builder()
            .sink(AnalyticsSdkSink::new(Arc::new(UnavailableAnalyticsBackend)))
            .sink(ProductAnalyticsSink::new(product.clone()))
            .build(),
    );
    let mut attachment = TrackingAttachment::new(tracker)
        .track(EventTrigger::Disappear, events![StoreViewedEvent]);

    // Act
    let outcome = attachment.on_disappear();

    // Assert
    assert_eq!(outcome, SignalOutcome::Fired { dispatched: 1 });
    assert_eq!(
        product.calls(),
        vec![ProductCall::Track {
            event: "view_cart".to_owned(),
            properties: None,
        }]
    );
}

#[test]
fn test_attachments_on_separate_threads_share_one_tracker() {
    // Arrange
    let backends = backends();
    let screens = ["Home", "Store", "Settings", "Profile"];

    // Act
    thread::scope(|scope| {
        for screen in screens {
            let tracker = backends.tracker.clone();
            scope.spawn(move || {
                let mut attachment = TrackingAttachment::new(tracker)
                    .track(EventTrigger::Appear, events![ScreenViewedEvent::new(screen)]);
                attachment.on_appear();
                attachment.on_appear();
            });
        }
    });

    // Assert
    assert_eq!(backends.analytics.calls().len(), screens.len());
    assert_eq!(backends.product.calls().len(), screens.len());
    assert_eq!(backends.telemetry.calls().len(), screens.len());
}
