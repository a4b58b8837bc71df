//! Gondar — catalog of reserved-schema analytics events.
//!
//! Screen, checkout, purchase and store events using the event and parameter
//! names the mobile analytics SDK reserves.

pub mod events;
pub mod names;

pub use events::{PurchaseCompletedEvent, PurchaseStartedEvent, ScreenViewedEvent, StoreViewedEvent};
