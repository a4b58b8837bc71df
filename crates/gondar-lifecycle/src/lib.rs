//! Gondar — view lifecycle bindings that fire analytics events.
//!
//! A [`TrackingAttachment`] sits on one UI node. It holds the events bound to
//! the node's appear and disappear signals and fires each trigger's events at
//! most once per node, however many times the host repeats the signal.

pub mod arena;
pub mod attachment;
pub mod binding;
pub mod list;
pub mod trigger;

pub use arena::{AttachmentArena, NodeId};
pub use attachment::{SignalOutcome, TrackingAttachment};
pub use binding::TriggerBinding;
pub use list::{EventList, EventListBuilder};
pub use trigger::EventTrigger;
