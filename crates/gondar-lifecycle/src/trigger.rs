//! Lifecycle triggers.

use std::fmt;

/// Lifecycle moment that activates a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTrigger {
    /// The view became visible.
    Appear,
    /// The view went away.
    Disappear,
}

impl fmt::Display for EventTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Appear => f.write_str("appear"),
            Self::Disappear => f.write_str("disappear"),
        }
    }
}
