//! `Sink` adapters for the supported analytics backends.

mod analytics;
mod product;
mod telemetry;

pub use analytics::AnalyticsSdkSink;
pub use product::ProductAnalyticsSink;
pub use telemetry::TelemetrySink;
