//! Date Normalization
//!
//! Information Hiding:
//! - Shape detection of the raw dates answer happens once, in `DateInput::from_value`
//! - Resolution to a `NormalizedDateRange` is an exhaustive match over the variants
//! - Loose quoting repair for object-like strings stays internal

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

const START_KEY: &str = "startDate";
const END_KEY: &str = "endDate";

/// Raw dates answer, classified when the caller supplies it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DateInput {
    /// Any string answer, including object-like strings such as `{'startDate': ...}`
    Raw(String),
    /// An object carrying the range under a nested `dates` object
    Nested(Map<String, Value>),
    /// Any other value (numbers, arrays, objects without a nested `dates` object)
    Structured(Value),
}

impl DateInput {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => DateInput::Raw(s),
            Value::Object(mut map) => match map.remove("dates") {
                Some(Value::Object(nested)) => DateInput::Nested(nested),
                Some(other) => {
                    map.insert("dates".to_string(), other);
                    DateInput::Structured(Value::Object(map))
                }
                None => DateInput::Structured(Value::Object(map)),
            },
            other => DateInput::Structured(other),
        }
    }
}

impl From<Value> for DateInput {
    fn from(value: Value) -> Self {
        DateInput::from_value(value)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Raw(s.to_string())
    }
}

/// Canonical `{startDate, endDate}` range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDateRange {
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}

impl NormalizedDateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Same value for both ends of the range
    pub fn single(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            start_date: value.clone(),
            end_date: value,
        }
    }

    /// Read the range out of an object without validating it; absent keys become ""
    fn from_object(map: &Map<String, Value>) -> Self {
        Self {
            start_date: map.get(START_KEY).map(value_text).unwrap_or_default(),
            end_date: map.get(END_KEY).map(value_text).unwrap_or_default(),
        }
    }
}

/// An object-like dates string that could not be parsed; the raw string was used instead
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("could not parse dates '{raw}' as an object ({reason}); using it as both start and end")]
pub struct DateParseAmbiguous {
    pub raw: String,
    pub reason: String,
}

/// Normalized range plus the warning raised while producing it, if any
#[derive(Debug, Clone, PartialEq)]
pub struct DateResolution {
    pub range: NormalizedDateRange,
    pub ambiguity: Option<DateParseAmbiguous>,
}

/// Resolve a dates answer into a range. Pure: equal inputs give equal outputs.
pub fn normalize_dates(input: &DateInput) -> DateResolution {
    match input {
        DateInput::Nested(nested) => DateResolution {
            range: NormalizedDateRange::from_object(nested),
            ambiguity: None,
        },
        DateInput::Raw(raw) if raw.contains(START_KEY) && raw.contains(END_KEY) => {
            match parse_loose_object(raw) {
                Ok(map) => DateResolution {
                    range: NormalizedDateRange::from_object(&map),
                    ambiguity: None,
                },
                Err(reason) => DateResolution {
                    range: NormalizedDateRange::single(raw.as_str()),
                    ambiguity: Some(DateParseAmbiguous {
                        raw: raw.clone(),
                        reason,
                    }),
                },
            }
        }
        DateInput::Raw(raw) => DateResolution {
            range: NormalizedDateRange::single(raw.as_str()),
            ambiguity: None,
        },
        DateInput::Structured(value) => DateResolution {
            range: NormalizedDateRange::single(value.to_string()),
            ambiguity: None,
        },
    }
}

/// Parse a single-quoted object literal such as `{'startDate': '2024-02-01'}`
fn parse_loose_object(raw: &str) -> Result<Map<String, Value>, String> {
    let cleaned = raw.replace('\'', "\"");
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(format!("expected an object, found {}", json_kind(&other))),
        Err(e) => Err(e.to_string()),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(value: Value) -> DateResolution {
        normalize_dates(&DateInput::from_value(value))
    }

    #[test]
    fn test_nested_dates_used_directly() {
        let resolution = resolve(json!({
            "dates": {"startDate": "2024-01-01", "endDate": "2024-01-10"}
        }));
        assert_eq!(
            resolution.range,
            NormalizedDateRange::new("2024-01-01", "2024-01-10")
        );
        assert!(resolution.ambiguity.is_none());
    }

    #[test]
    fn test_nested_dates_missing_keys_default_to_empty() {
        let resolution = resolve(json!({"dates": {"startDate": "2024-03-03"}}));
        assert_eq!(resolution.range.start_date, "2024-03-03");
        assert_eq!(resolution.range.end_date, "");
    }

    #[test]
    fn test_nested_dates_keep_only_range_keys() {
        let resolution = resolve(json!({
            "dates": {"startDate": null, "endDate": 5, "nights": 3}
        }));
        assert_eq!(resolution.range, NormalizedDateRange::new("null", "5"));
        assert_eq!(
            serde_json::to_value(&resolution.range).unwrap(),
            json!({"startDate": "null", "endDate": "5"})
        );
    }

    #[test]
    fn test_single_quoted_object_string_is_parsed() {
        let resolution = resolve(json!("{'startDate': '2024-02-01', 'endDate': '2024-02-05'}"));
        assert_eq!(
            resolution.range,
            NormalizedDateRange::new("2024-02-01", "2024-02-05")
        );
        assert!(resolution.ambiguity.is_none());
    }

    #[test]
    fn test_malformed_object_string_falls_back_with_warning() {
        let raw = "{'startDate': broken";
        let resolution = resolve(json!(raw));
        assert_eq!(resolution.range, NormalizedDateRange::single(raw));

        let ambiguity = resolution.ambiguity.expect("ambiguity should be recorded");
        assert_eq!(ambiguity.raw, raw);
    }

    #[test]
    fn test_malformed_string_with_both_markers_falls_back() {
        let raw = "startDate is june, endDate is july";
        let resolution = resolve(json!(raw));
        assert_eq!(resolution.range, NormalizedDateRange::single(raw));
        assert!(resolution.ambiguity.is_some());
    }

    #[test]
    fn test_plain_string_used_for_both_ends() {
        let resolution = resolve(json!("next weekend"));
        assert_eq!(resolution.range, NormalizedDateRange::single("next weekend"));
        assert!(resolution.ambiguity.is_none());
    }

    #[test]
    fn test_string_with_only_one_marker_is_plain() {
        let resolution = resolve(json!("startDate tomorrow"));
        assert_eq!(
            resolution.range,
            NormalizedDateRange::single("startDate tomorrow")
        );
        assert!(resolution.ambiguity.is_none());
    }

    #[test]
    fn test_other_shapes_are_stringified() {
        let resolution = resolve(json!(20240101));
        assert_eq!(resolution.range, NormalizedDateRange::single("20240101"));

        let resolution = resolve(json!({"startDate": "2024-01-01", "endDate": "2024-01-02"}));
        assert_eq!(
            resolution.range.start_date,
            r#"{"endDate":"2024-01-02","startDate":"2024-01-01"}"#
        );
    }

    #[test]
    fn test_non_object_nested_dates_is_stringified() {
        let input = DateInput::from_value(json!({"dates": "soon"}));
        assert_eq!(input, DateInput::Structured(json!({"dates": "soon"})));
        assert_eq!(
            normalize_dates(&input).range,
            NormalizedDateRange::single(r#"{"dates":"soon"}"#)
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let input = DateInput::from("{'startDate': '2024-02-01', 'endDate': '2024-02-05'}");
        assert_eq!(normalize_dates(&input), normalize_dates(&input));
    }

    #[test]
    fn test_range_serializes_with_camel_case_keys() {
        let range = NormalizedDateRange::new("2024-01-01", "2024-01-10");
        assert_eq!(
            serde_json::to_value(&range).unwrap(),
            json!({"startDate": "2024-01-01", "endDate": "2024-01-10"})
        );
    }
}
