//! Event abstractions.
//!
//! Every trackable value implements [`Event`]. Richer shapes are opted into
//! by implementing one of the refined traits and answering the matching
//! capability query, e.g. `as_analytics` returning `Some(self)`. The queries
//! have no default, so an implementor always states which shapes it has;
//! [`impl_event!`](crate::impl_event) writes the answers from a list.
//!
//! ```compile_fail
//! use gondar_core::event::{CustomEvent, Event};
//!
//! #[derive(Debug)]
//! struct LevelUp;
//!
//! impl Event for LevelUp {}
//! impl CustomEvent for LevelUp {}
//! ```

use std::any::type_name;
use std::fmt;

use crate::parameter::{OptionalParameters, Parameters};

/// Trait that all trackable events implement.
pub trait Event: Send + Sync + fmt::Debug {
    /// Stable identifier derived from the concrete type's name.
    fn default_name(&self) -> &'static str {
        short_type_name(std::any::type_name_of_val(self))
    }

    /// Analytics-event view of this value, if it has one.
    fn as_analytics(&self) -> Option<&dyn AnalyticsEvent>;

    /// Custom-event view of this value, if it has one.
    fn as_custom(&self) -> Option<&dyn CustomEvent>;

    /// User-property view of this value, if it has one.
    fn as_user(&self) -> Option<&dyn UserEvent>;
}

/// Implements [`Event`] for a type, answering each capability query from the
/// listed shapes: any of `analytics`, `custom` and `user`. With no list the
/// type is a plain event.
///
/// ```
/// use gondar_core::delivery::{Delivery, route};
/// use gondar_core::event::CustomEvent;
/// use gondar_core::impl_event;
///
/// #[derive(Debug)]
/// struct LevelUp;
///
/// impl CustomEvent for LevelUp {
///     fn name(&self) -> &str {
///         "level_up"
///     }
/// }
///
/// impl_event!(LevelUp: custom);
///
/// assert_eq!(route(&LevelUp).name(), "level_up");
/// ```
///
/// A misspelled shape is rejected:
///
/// ```compile_fail
/// #[derive(Debug)]
/// struct LevelUp;
///
/// gondar_core::impl_event!(LevelUp: custon);
/// ```
#[macro_export]
macro_rules! impl_event {
    (@answer analytics $this:ident analytics $($rest:ident)*) => {
        ::core::option::Option::Some($this)
    };
    (@answer custom $this:ident custom $($rest:ident)*) => {
        ::core::option::Option::Some($this)
    };
    (@answer user $this:ident user $($rest:ident)*) => {
        ::core::option::Option::Some($this)
    };
    (@answer $wanted:ident $this:ident $other:ident $($rest:ident)*) => {
        $crate::impl_event!(@answer $wanted $this $($rest)*)
    };
    (@answer $wanted:ident $this:ident) => {
        ::core::option::Option::None
    };
    (@check analytics) => {};
    (@check custom) => {};
    (@check user) => {};
    (@check $other:ident) => {
        ::core::compile_error!(::core::concat!(
            "unknown event shape `",
            ::core::stringify!($other),
            "`, expected analytics, custom or user"
        ));
    };
    ($ty:ty $(: $($shape:ident),+ $(,)?)?) => {
        $($($crate::impl_event!(@check $shape);)+)?

        impl $crate::event::Event for $ty {
            fn as_analytics(&self) -> ::core::option::Option<&dyn $crate::event::AnalyticsEvent> {
                $crate::impl_event!(@answer analytics self $($($shape)+)?)
            }

            fn as_custom(&self) -> ::core::option::Option<&dyn $crate::event::CustomEvent> {
                $crate::impl_event!(@answer custom self $($($shape)+)?)
            }

            fn as_user(&self) -> ::core::option::Option<&dyn $crate::event::UserEvent> {
                $crate::impl_event!(@answer user self $($($shape)+)?)
            }
        }
    };
}

/// A named occurrence with parameters that are always sent in full.
pub trait CustomEvent: Event {
    /// Event name. Defaults to the derived type name.
    fn name(&self) -> &str {
        self.default_name()
    }

    /// Event parameters.
    fn parameters(&self) -> Option<&Parameters> {
        None
    }
}

/// A user-property update rather than a discrete occurrence.
pub trait UserEvent: Event {
    /// Property name. Defaults to the derived type name.
    fn name(&self) -> &str {
        self.default_name()
    }

    /// New property value; `None` clears the property.
    fn value(&self) -> Option<&str> {
        None
    }
}

/// An event following a backend's reserved analytics schema.
///
/// Parameters may declare keys without values; those are only sent when set.
pub trait AnalyticsEvent: Event {
    /// Reserved event name.
    fn name(&self) -> &str;

    /// Event parameters, with optional values.
    fn parameters(&self) -> Option<&OptionalParameters>;

    /// Backend-specific transaction reference carried by purchase events.
    fn transaction(&self) -> Option<&TransactionRef> {
        None
    }
}

/// Opaque reference to a completed store transaction.
///
/// Only the telemetry sink reads it; every other sink ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRef {
    transaction_id: u64,
    product_id: String,
}

impl TransactionRef {
    /// Creates a transaction reference.
    #[must_use]
    pub fn new(transaction_id: u64, product_id: impl Into<String>) -> Self {
        Self {
            transaction_id,
            product_id: product_id.into(),
        }
    }

    /// Store-assigned transaction identifier.
    #[must_use]
    pub fn transaction_id(&self) -> u64 {
        self.transaction_id
    }

    /// Identifier of the purchased product.
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }
}

/// Short name of `T`, e.g. `HomeView` for `my_app::views::HomeView<Props>`.
#[must_use]
pub fn tracking_name<T: ?Sized>() -> &'static str {
    short_type_name(type_name::<T>())
}

/// Short name of the type of `value`.
#[must_use]
pub fn tracking_name_of<T: ?Sized>(value: &T) -> &'static str {
    short_type_name(std::any::type_name_of_val(value))
}

/// Strips the module path and generic arguments from a path type name.
/// Tuples, arrays, slices, references and pointers are returned unchanged.
fn short_type_name(full: &'static str) -> &'static str {
    if !full.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
        return full;
    }
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
