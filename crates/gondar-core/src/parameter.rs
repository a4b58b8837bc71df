//! Typed event parameter values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

/// Parameters attached to an event. Keys are unique and iterate in sorted
/// order, so outbound payloads are deterministic.
pub type Parameters = BTreeMap<String, ParameterValue>;

/// Parameters where a key may be declared without a value. A `None` value
/// means "send this key only if set".
pub type OptionalParameters = BTreeMap<String, Option<ParameterValue>>;

/// Scalar map handed to backends that accept heterogeneous value maps.
pub type ScalarMap = serde_json::Map<String, Value>;

/// Text-only map handed to backends that accept string parameters.
pub type TextMap = BTreeMap<String, String>;

/// A single scalar event parameter. Serializes as the bare scalar, the same
/// value [`ParameterValue::to_scalar`] returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// A text value.
    String(String),
    /// A signed integer value.
    Int(i64),
    /// A floating point value.
    Double(#[serde(serialize_with = "double_scalar")] f64),
    /// A boolean flag.
    Bool(bool),
}

impl ParameterValue {
    /// Returns the value as a backend-neutral scalar.
    ///
    /// Integers stay integers. Doubles that have no JSON number form (NaN,
    /// infinities) fall back to their canonical string.
    #[must_use]
    pub fn to_scalar(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Int(i) => Value::Number(Number::from(*i)),
            Self::Double(d) => {
                Number::from_f64(*d).map_or_else(|| Value::String(d.to_string()), Value::Number)
            }
            Self::Bool(b) => Value::Bool(*b),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

// Non-finite doubles go out as their canonical string, like `to_scalar`.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn double_scalar<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Drops every key whose value is absent. Returns `None` when nothing is
/// left.
#[must_use]
pub fn flatten_optional(parameters: &OptionalParameters) -> Option<Parameters> {
    let flattened: Parameters = parameters
        .iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key.clone(), v)))
        .collect();
    (!flattened.is_empty()).then_some(flattened)
}

/// Converts parameters into the scalar map form.
#[must_use]
pub fn to_scalar_map(parameters: &Parameters) -> ScalarMap {
    parameters
        .iter()
        .map(|(key, value)| (key.clone(), value.to_scalar()))
        .collect()
}

/// Converts parameters into the text-only map form.
#[must_use]
pub fn to_text_map(parameters: &Parameters) -> TextMap {
    parameters
        .iter()
        .map(|(key, value)| (key.clone(), value.to_string()))
        .collect()
}
