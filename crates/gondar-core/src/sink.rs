//! Backend sink abstraction.

use std::fmt;

use crate::delivery::{Occurrence, UserProperty};
use crate::error::SinkError;

/// A destination the tracker fans deliveries out to.
///
/// Implementations wrap one analytics backend and convert neutral payloads
/// into that backend's native call.
pub trait Sink: Send + Sync + fmt::Debug {
    /// Short identifier used in logs (e.g. `"analytics"`).
    fn id(&self) -> &'static str;

    /// Logs a discrete occurrence.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the backend is unavailable or refuses the call.
    fn log_occurrence(&self, occurrence: &Occurrence) -> Result<(), SinkError>;

    /// Whether this sink accepts user-property updates.
    fn supports_user_properties(&self) -> bool {
        false
    }

    /// Applies a user-property update. Only called when
    /// [`supports_user_properties`](Sink::supports_user_properties) is `true`.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the backend is unavailable or refuses the call.
    fn set_user_property(&self, _property: &UserProperty) -> Result<(), SinkError> {
        Ok(())
    }
}
