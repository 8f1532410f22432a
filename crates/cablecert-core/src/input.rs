use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw certifier output: parameter name -> measurement.
pub type ParameterMap = BTreeMap<String, Measurement>;

/// A single reading as exported by a certifier.
///
/// Variant order matters for untagged decoding: `Events` is tried before
/// `Verdict` so that an empty list stays an (empty) event trace, and `Other`
/// comes last so unrecognised shapes (null, booleans, lists of numbers) are
/// kept instead of rejecting the whole export.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Measurement {
    Value(f64),
    Events(Vec<OtdrEvent>),
    Verdict(SubResult),
    Label(String),
    Other(serde_json::Value),
}

impl Measurement {
    /// Numeric reading, if this measurement carries one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Measurement::Value(v) => Some(*v),
            Measurement::Verdict(sub) => sub.value,
            Measurement::Events(_) | Measurement::Label(_) | Measurement::Other(_) => None,
        }
    }

    pub fn as_events(&self) -> Option<&[OtdrEvent]> {
        match self {
            Measurement::Events(events) => Some(events),
            _ => None,
        }
    }

    /// True for a structured sub-result whose own verdict is `FAIL`.
    pub fn is_failed_verdict(&self) -> bool {
        matches!(self, Measurement::Verdict(sub) if sub.result.as_deref() == Some("FAIL"))
    }
}

impl From<f64> for Measurement {
    fn from(v: f64) -> Self {
        Measurement::Value(v)
    }
}

/// Structured per-parameter result, e.g. `{ "value": 34.0, "result": "FAIL" }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SubResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// One discrete event of an OTDR trace.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OtdrEvent {
    #[serde(rename = "type", default = "unknown_event")]
    pub kind: String,
    #[serde(default)]
    pub loss: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflectance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

fn unknown_event() -> String {
    "unknown".to_string()
}

impl OtdrEvent {
    pub fn connector(loss: f64, distance: f64) -> Self {
        Self { kind: "connector".to_string(), loss, reflectance: None, distance: Some(distance) }
    }

    pub fn splice(loss: f64, distance: f64) -> Self {
        Self { kind: "splice".to_string(), loss, reflectance: None, distance: Some(distance) }
    }
}

/// Builds a map of plain numeric readings; mostly a convenience for tests and demos.
pub fn readings<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> ParameterMap {
    pairs.into_iter().map(|(k, v)| (k.to_string(), Measurement::Value(v))).collect()
}
