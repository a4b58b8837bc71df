//! Capability classification.
//!
//! An event may satisfy several refined shapes at once. Dispatch picks one,
//! following [`PRECEDENCE`]: analytics, then custom, then user property. An
//! event with none of them takes the plain path.

use std::fmt;

use crate::event::{AnalyticsEvent, CustomEvent, Event, UserEvent};

/// A refined event shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Reserved-schema analytics event.
    Analytics,
    /// Named event with fully sent parameters.
    Custom,
    /// User-property update.
    UserProperty,
}

/// Order in which capabilities are tried when an event satisfies several.
pub const PRECEDENCE: [Capability; 3] = [
    Capability::Analytics,
    Capability::Custom,
    Capability::UserProperty,
];

impl Capability {
    /// Returns `true` if `event` satisfies this capability.
    #[must_use]
    pub fn is_satisfied_by(self, event: &dyn Event) -> bool {
        match self {
            Self::Analytics => event.as_analytics().is_some(),
            Self::Custom => event.as_custom().is_some(),
            Self::UserProperty => event.as_user().is_some(),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Analytics => "analytics",
            Self::Custom => "custom",
            Self::UserProperty => "user_property",
        };
        f.write_str(name)
    }
}

/// Set of capabilities an event satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    analytics: bool,
    custom: bool,
    user_property: bool,
}

impl CapabilitySet {
    /// Returns `true` if the set contains `capability`.
    #[must_use]
    pub fn contains(self, capability: Capability) -> bool {
        match capability {
            Capability::Analytics => self.analytics,
            Capability::Custom => self.custom,
            Capability::UserProperty => self.user_property,
        }
    }

    /// Returns `true` if the event satisfies no refined capability.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.analytics || self.custom || self.user_property)
    }

    /// Highest-precedence capability in the set.
    #[must_use]
    pub fn primary(self) -> Option<Capability> {
        PRECEDENCE.into_iter().find(|c| self.contains(*c))
    }
}

/// Reports every capability `event` satisfies.
#[must_use]
pub fn capabilities(event: &dyn Event) -> CapabilitySet {
    CapabilitySet {
        analytics: Capability::Analytics.is_satisfied_by(event),
        custom: Capability::Custom.is_satisfied_by(event),
        user_property: Capability::UserProperty.is_satisfied_by(event),
    }
}

/// An event viewed through the single capability dispatch will use.
#[derive(Debug, Clone, Copy)]
pub enum Classified<'a> {
    /// Dispatch as a reserved-schema analytics event.
    Analytics(&'a dyn AnalyticsEvent),
    /// Dispatch as a custom event.
    Custom(&'a dyn CustomEvent),
    /// Dispatch as a user-property update.
    UserProperty(&'a dyn UserEvent),
    /// No refined capability; dispatch under the default name.
    Plain(&'a dyn Event),
}

impl Classified<'_> {
    /// The capability chosen, or `None` for the plain path.
    #[must_use]
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Self::Analytics(_) => Some(Capability::Analytics),
            Self::Custom(_) => Some(Capability::Custom),
            Self::UserProperty(_) => Some(Capability::UserProperty),
            Self::Plain(_) => None,
        }
    }
}

/// Classifies `event` by [`PRECEDENCE`].
#[must_use]
pub fn classify(event: &dyn Event) -> Classified<'_> {
    for capability in PRECEDENCE {
        let classified = match capability {
            Capability::Analytics => event.as_analytics().map(Classified::Analytics),
            Capability::Custom => event.as_custom().map(Classified::Custom),
            Capability::UserProperty => event.as_user().map(Classified::UserProperty),
        };
        if let Some(classified) = classified {
            return classified;
        }
    }
    Classified::Plain(event)
}
