//! Normalization of backend response shapes.
//!
//! Endpoints answer with a bare array, a paginated envelope
//! (`{"results": [...], "count": N, "next": url}`), a single object, or
//! nothing at all. Everything is folded into one [`Listing`] at the API
//! boundary so page code never branches on shape.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::record::Record;

/// Canonical page of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Listing {
    pub items: Vec<Record>,
    /// Total count reported by a paginated envelope.
    pub total: Option<u64>,
    /// URL of the next page, when the backend paginates.
    pub next: Option<String>,
}

/// The shapes a response body may take.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    Empty,
    Array(Vec<Value>),
    Paginated {
        results: Vec<Value>,
        count: Option<u64>,
        next: Option<String>,
    },
    Single(Record),
}

impl ResponseShape {
    /// Classify a decoded JSON body.
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Null => Self::Empty,
            Value::Array(items) => Self::Array(items),
            Value::Object(mut map) => match map.remove("results") {
                Some(Value::Array(results)) => Self::Paginated {
                    results,
                    count: map.get("count").and_then(Value::as_u64),
                    next: map
                        .get("next")
                        .and_then(Value::as_str)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                },
                Some(Value::Null) => Self::Paginated {
                    results: Vec::new(),
                    count: map.get("count").and_then(Value::as_u64),
                    next: None,
                },
                Some(other) => {
                    // `results` that is not a list belongs to the record itself.
                    map.insert("results".to_string(), other);
                    Self::Single(Record::new(map))
                }
                None if map.is_empty() => Self::Empty,
                None => Self::Single(Record::new(map)),
            },
            other => {
                warn!("unexpected scalar response body: {other}");
                Self::Empty
            }
        }
    }
}

impl From<ResponseShape> for Listing {
    fn from(shape: ResponseShape) -> Self {
        match shape {
            ResponseShape::Empty => Listing::default(),
            ResponseShape::Array(items) => Listing {
                items: records_of(items),
                total: None,
                next: None,
            },
            ResponseShape::Paginated {
                results,
                count,
                next,
            } => Listing {
                items: records_of(results),
                total: count,
                next,
            },
            ResponseShape::Single(record) => Listing {
                items: vec![record],
                total: None,
                next: None,
            },
        }
    }
}

impl Listing {
    /// Normalize any response body.
    pub fn from_body(body: Value) -> Self {
        ResponseShape::classify(body).into()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// First record, for detail endpoints.
    pub fn first(&self) -> Option<&Record> {
        self.items.first()
    }

    /// Append the items of a following page.
    pub fn extend(&mut self, next_page: Listing) {
        self.items.extend(next_page.items);
        self.next = next_page.next;
        if next_page.total.is_some() {
            self.total = next_page.total;
        }
    }
}

fn records_of(values: Vec<Value>) -> Vec<Record> {
    let total = values.len();
    let records: Vec<Record> = values.into_iter().filter_map(Record::from_value).collect();
    if records.len() < total {
        warn!(
            "dropped {} non-object list item(s) from response",
            total - records.len()
        );
    }
    records
}
