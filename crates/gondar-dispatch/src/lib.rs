//! Gondar — fan-out tracker and analytics backend sinks.
//!
//! [`FanOutTracker`] routes each event once and hands the result to every
//! registered sink in order. The sinks in [`sinks`] adapt that neutral
//! payload to the mobile analytics, product analytics and privacy telemetry
//! backends declared in `gondar_core::backend`.

pub mod global;
pub mod sinks;
pub mod tracker;

pub use tracker::{FanOutTracker, FanOutTrackerBuilder};
