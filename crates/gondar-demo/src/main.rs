//! Gondar demo host.
//!
//! Wires the configured backends into a fan-out tracker, installs it as the
//! process-wide default and simulates two screens going through their
//! lifecycles concurrently.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use gondar_catalog::{
    PurchaseCompletedEvent, PurchaseStartedEvent, ScreenViewedEvent, StoreViewedEvent,
};
use gondar_core::event::TransactionRef;
use gondar_core::tracker::Tracker;
use gondar_dispatch::FanOutTracker;
use gondar_dispatch::global::{default_tracker, install_default};
use gondar_dispatch::sinks::{AnalyticsSdkSink, ProductAnalyticsSink, TelemetrySink};
use gondar_lifecycle::{AttachmentArena, EventTrigger, NodeId, TrackingAttachment, events};
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app_events;
mod config;
mod console;

use app_events::{SubscriptionPlan, ThemeChanged};
use config::{DemoConfig, SinkKind};
use console::{ConsoleAnalyticsBackend, ConsoleProductBackend, ConsoleTelemetryBackend};

type SharedArena = Arc<Mutex<AttachmentArena>>;

const FRAME: Duration = Duration::from_millis(16);

fn build_tracker(config: &DemoConfig) -> FanOutTracker {
    config
        .sinks
        .iter()
        .fold(FanOutTracker::builder(), |builder, kind| match kind {
            SinkKind::Analytics => {
                builder.sink(AnalyticsSdkSink::new(Arc::new(ConsoleAnalyticsBackend)))
            }
            SinkKind::Product => builder.sink(
                ProductAnalyticsSink::new(Arc::new(ConsoleProductBackend))
                    .with_people_properties(config.people_properties),
            ),
            SinkKind::Telemetry => {
                builder.sink(TelemetrySink::new(Arc::new(ConsoleTelemetryBackend)))
            }
        })
        .build()
}

async fn signal(arena: &SharedArena, node: NodeId, trigger: EventTrigger) {
    let outcome = arena.lock().await.signal(node, trigger);
    info!(%node, %trigger, ?outcome, "lifecycle signal");
    tokio::time::sleep(FRAME).await;
}

/// A plain screen: appear is delivered twice by the layout pass, and the
/// store event bound to disappear is gated off.
async fn browse(arena: SharedArena, screen: String) {
    let attachment = TrackingAttachment::with_default_tracker()
        .track(EventTrigger::Appear, events![ScreenViewedEvent::new(screen)])
        .track_given(EventTrigger::Disappear, || false, events![StoreViewedEvent]);
    let node = arena.lock().await.attach(attachment);

    signal(&arena, node, EventTrigger::Appear).await;
    signal(&arena, node, EventTrigger::Appear).await;
    signal(&arena, node, EventTrigger::Disappear).await;
    arena.lock().await.detach(node);
}

/// The store screen: checkout starts on appear and the purchase completes
/// when the screen is dismissed.
async fn checkout(arena: SharedArena) {
    let purchase = PurchaseCompletedEvent::with_details(
        Some("App Store".to_owned()),
        "USD",
        "T-1001",
        9.99,
    )
    .with_transaction(TransactionRef::new(1001, "pro_monthly"));
    let attachment = TrackingAttachment::with_default_tracker()
        .track(
            EventTrigger::Appear,
            events![
                ScreenViewedEvent::new("Store"),
                StoreViewedEvent,
                PurchaseStartedEvent::new("USD", 9.99),
            ],
        )
        .track(EventTrigger::Disappear, events![purchase]);
    let node = arena.lock().await.attach(attachment);

    signal(&arena, node, EventTrigger::Appear).await;
    signal(&arena, node, EventTrigger::Disappear).await;
    arena.lock().await.detach(node);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!("Starting Gondar demo");

    // Read configuration from environment.
    let config = DemoConfig::from_env()?;
    let tracker = build_tracker(&config);
    info!(sinks = ?tracker.sink_ids(), people_properties = config.people_properties, "tracker configured");
    install_default(tracker)?;

    // Simulate two screens side by side.
    let arena = SharedArena::default();
    let first = tokio::spawn(browse(Arc::clone(&arena), config.screen.clone()));
    let second = tokio::spawn(checkout(Arc::clone(&arena)));
    first.await?;
    second.await?;

    // Events tracked outside any lifecycle.
    let tracker = default_tracker();
    tracker.track(&ThemeChanged::new("dark"));
    tracker.track(&SubscriptionPlan(Some("pro".to_owned())));
    tracker.track(&SubscriptionPlan(None));

    let attached = arena.lock().await.len();
    info!(attached, "demo finished");
    Ok(())
}
