//! Gondar Core — shared event model and dispatch abstractions.
//!
//! This crate defines the event taxonomy, parameter values, capability
//! classification, the outbound backend interfaces and the `Sink`/`Tracker`
//! seams that every other crate depends on. It talks to no analytics backend
//! itself.

pub mod backend;
pub mod capability;
pub mod delivery;
pub mod error;
pub mod event;
pub mod parameter;
pub mod sink;
pub mod tracker;
