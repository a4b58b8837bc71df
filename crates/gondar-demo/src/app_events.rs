//! App-specific events defined by the demo host.

use gondar_core::event::{CustomEvent, UserEvent};
use gondar_core::parameter::Parameters;

/// Custom event fired when the user switches colour theme.
#[derive(Debug, Clone)]
pub struct ThemeChanged {
    parameters: Parameters,
}

impl ThemeChanged {
    /// Creates the event for a switch to `theme`.
    #[must_use]
    pub fn new(theme: &str) -> Self {
        let mut parameters = Parameters::new();
        parameters.insert("theme".to_owned(), theme.into());
        Self { parameters }
    }
}

gondar_core::impl_event!(ThemeChanged: custom);

impl CustomEvent for ThemeChanged {
    fn name(&self) -> &str {
        "theme_changed"
    }

    fn parameters(&self) -> Option<&Parameters> {
        Some(&self.parameters)
    }
}

/// User property holding the subscription plan.
#[derive(Debug, Clone)]
pub struct SubscriptionPlan(pub Option<String>);

gondar_core::impl_event!(SubscriptionPlan: user);

impl UserEvent for SubscriptionPlan {
    fn name(&self) -> &str {
        "subscription_plan"
    }

    fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gondar_core::capability::{Capability, classify};

    #[test]
    fn test_demo_events_classify_by_capability() {
        assert_eq!(
            classify(&ThemeChanged::new("dark")).capability(),
            Some(Capability::Custom)
        );
        assert_eq!(
            classify(&SubscriptionPlan(Some("pro".to_owned()))).capability(),
            Some(Capability::UserProperty)
        );
    }
}
