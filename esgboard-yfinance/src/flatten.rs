//! Flattening of Yahoo's `esgScores` object into a [`SustainabilityRecord`].

use esgboard_core::{Scalar, SustainabilityRecord};
use serde_json::{Map, Value};

/// Flatten the `esgScores` module.
///
/// Formatted-number objects (`{"raw": 24.1, "fmt": "24.1"}`) become their
/// `raw` value and plain scalars pass through. Arrays, nulls and any other
/// nested objects are dropped. Key order is kept.
#[must_use]
pub fn flatten_esg_scores(module: Map<String, Value>) -> SustainabilityRecord {
    module
        .into_iter()
        .filter_map(|(k, v)| flatten_value(v).map(|s| (k, s)))
        .collect()
}

fn flatten_value(v: Value) -> Option<Scalar> {
    match v {
        Value::Bool(b) => Some(Scalar::Bool(b)),
        Value::Number(n) => n.as_f64().map(Scalar::Number),
        Value::String(s) => Some(Scalar::Text(s)),
        Value::Object(mut o) => match o.remove("raw") {
            Some(raw @ (Value::Bool(_) | Value::Number(_) | Value::String(_))) => {
                flatten_value(raw)
            }
            _ => None,
        },
        Value::Null | Value::Array(_) => None,
    }
}
