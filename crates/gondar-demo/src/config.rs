//! Gondar demo — configuration read from the environment.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Startup configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `GONDAR_SINKS` names a backend that does not exist.
    #[error("unknown sink {0:?}, expected one of analytics, product, telemetry")]
    UnknownSink(String),

    /// `GONDAR_SINKS` is set but lists no backend.
    #[error("GONDAR_SINKS must name at least one sink")]
    NoSinks,

    /// A boolean variable holds something other than `true` or `false`.
    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Backends the demo can wire into its tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Mobile analytics SDK.
    Analytics,
    /// Product analytics SDK.
    Product,
    /// Telemetry SDK.
    Telemetry,
}

impl SinkKind {
    /// Every backend, in the default delivery order.
    pub const ALL: [Self; 3] = [Self::Analytics, Self::Product, Self::Telemetry];
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Analytics => "analytics",
            Self::Product => "product",
            Self::Telemetry => "telemetry",
        };
        f.write_str(name)
    }
}

impl FromStr for SinkKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analytics" => Ok(Self::Analytics),
            "product" => Ok(Self::Product),
            "telemetry" => Ok(Self::Telemetry),
            other => Err(ConfigError::UnknownSink(other.to_owned())),
        }
    }
}

/// Demo settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Backends to fan out to, in delivery order.
    pub sinks: Vec<SinkKind>,
    /// Whether the product sink forwards user properties to people profiles.
    pub people_properties: bool,
    /// Name of the first simulated screen.
    pub screen: String,
}

impl DemoConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let sinks = match lookup("GONDAR_SINKS") {
            Some(raw) => parse_sinks(&raw)?,
            None => SinkKind::ALL.to_vec(),
        };
        let people_properties = match lookup("GONDAR_PEOPLE_PROPERTIES") {
            Some(raw) => parse_flag("GONDAR_PEOPLE_PROPERTIES", &raw)?,
            None => false,
        };
        let screen = lookup("GONDAR_SCREEN").unwrap_or_else(|| "Home".to_owned());

        Ok(Self {
            sinks,
            people_properties,
            screen,
        })
    }
}

fn parse_sinks(raw: &str) -> Result<Vec<SinkKind>, ConfigError> {
    let mut sinks = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let kind: SinkKind = name.parse()?;
        if !sinks.contains(&kind) {
            sinks.push(kind);
        }
    }
    if sinks.is_empty() {
        return Err(ConfigError::NoSinks);
    }
    Ok(sinks)
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ConfigError::InvalidFlag {
            var,
            value: other.to_owned(),
        }),
    }
}
