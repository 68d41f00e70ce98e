//! Localizable records: opaque JSON objects handed out by the backend.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One backend object. Keys are kept verbatim; nothing about the shape is
/// assumed beyond "it is a JSON object".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Wrap a JSON value, returning `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Non-localized scalar rendered for display. Strings are returned as-is,
    /// numbers and booleans via their JSON text; anything else is `""`.
    pub fn scalar(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Record identifier, whether the backend sends it as a number or a string.
    pub fn id(&self) -> Option<String> {
        let id = self.scalar("id");
        (!id.is_empty()).then_some(id)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Calendar date of `key`. Accepts `YYYY-MM-DD` and RFC 3339 timestamps.
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        let raw = match self.0.get(key)? {
            Value::String(s) => s.trim(),
            _ => return None,
        };
        if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(d);
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| {
                // Naive timestamps without offset ("2024-05-01T10:00:00").
                raw.get(..10)
                    .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
            })
    }

    /// Nested records under `key` (e.g. menu children, album photos).
    /// Non-object entries are skipped.
    pub fn children(&self, key: &str) -> Vec<Record> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_object().cloned().map(Record))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(v: Value) -> Record {
        Record::from_value(v).unwrap()
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Record::from_value(json!([1, 2])).is_none());
        assert!(Record::from_value(json!("x")).is_none());
        assert!(Record::from_value(json!(null)).is_none());
    }

    #[test]
    fn test_scalar_renders_numbers_and_bools() {
        let r = rec(json!({"id": 7, "open": true, "name": "Lab", "tags": []}));
        assert_eq!(r.scalar("id"), "7");
        assert_eq!(r.scalar("open"), "true");
        assert_eq!(r.scalar("name"), "Lab");
        assert_eq!(r.scalar("tags"), "");
        assert_eq!(r.scalar("missing"), "");
    }

    #[test]
    fn test_id_string_or_number() {
        assert_eq!(rec(json!({"id": 3})).id().as_deref(), Some("3"));
        assert_eq!(rec(json!({"id": "abc"})).id().as_deref(), Some("abc"));
        assert_eq!(rec(json!({})).id(), None);
    }

    #[test]
    fn test_date_formats() {
        let r = rec(json!({
            "a": "2024-05-01",
            "b": "2024-05-02T10:00:00Z",
            "c": "2024-05-03T10:00:00",
            "d": "not a date",
        }));
        assert_eq!(r.date("a"), NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(r.date("b"), NaiveDate::from_ymd_opt(2024, 5, 2));
        assert_eq!(r.date("c"), NaiveDate::from_ymd_opt(2024, 5, 3));
        assert_eq!(r.date("d"), None);
        assert_eq!(r.date("missing"), None);
    }

    #[test]
    fn test_number_parses_strings() {
        let r = rec(json!({"amount": "1500.5", "seats": 20}));
        assert_eq!(r.number("amount"), Some(1500.5));
        assert_eq!(r.number("seats"), Some(20.0));
    }

    #[test]
    fn test_children_skip_non_objects() {
        let r = rec(json!({"children": [{"title": "a"}, 5, {"title": "b"}]}));
        assert_eq!(r.children("children").len(), 2);
        assert!(r.children("nope").is_empty());
    }
}
