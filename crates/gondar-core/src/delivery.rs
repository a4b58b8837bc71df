//! Backend-neutral outbound payloads.
//!
//! A classified event is routed once into a [`Delivery`]; each sink then
//! converts that into its own native shape.

use crate::capability::{Classified, classify};
use crate::event::{Event, TransactionRef};
use crate::parameter::{Parameters, flatten_optional};

/// A discrete occurrence to log.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    /// Event name.
    pub name: String,
    /// Parameters to send; `None` when there are none.
    pub parameters: Option<Parameters>,
    /// Transaction reference for sinks with a dedicated purchase call.
    pub transaction: Option<TransactionRef>,
}

/// A user-property update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProperty {
    /// Property name.
    pub name: String,
    /// New value; `None` clears the property.
    pub value: Option<String>,
}

/// What a single `track` call asks every sink to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// Log an occurrence.
    Occurrence(Occurrence),
    /// Update a user property.
    UserProperty(UserProperty),
}

impl Delivery {
    /// Name the delivery is sent under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Occurrence(occurrence) => &occurrence.name,
            Self::UserProperty(property) => &property.name,
        }
    }
}

impl From<Classified<'_>> for Delivery {
    fn from(classified: Classified<'_>) -> Self {
        match classified {
            Classified::Analytics(event) => Self::Occurrence(Occurrence {
                name: event.name().to_owned(),
                parameters: event.parameters().and_then(flatten_optional),
                transaction: event.transaction().cloned(),
            }),
            Classified::Custom(event) => Self::Occurrence(Occurrence {
                name: event.name().to_owned(),
                parameters: event.parameters().filter(|p| !p.is_empty()).cloned(),
                transaction: None,
            }),
            Classified::UserProperty(event) => Self::UserProperty(UserProperty {
                name: event.name().to_owned(),
                value: event.value().map(str::to_owned),
            }),
            Classified::Plain(event) => Self::Occurrence(Occurrence {
                name: event.default_name().to_owned(),
                parameters: None,
                transaction: None,
            }),
        }
    }
}

/// Classifies `event` and routes it into a delivery.
#[must_use]
pub fn route(event: &dyn Event) -> Delivery {
    Delivery::from(classify(event))
}
