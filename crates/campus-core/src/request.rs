use std::collections::BTreeMap;
use std::fmt;

/// A content GET against the backend: path plus query, in one backend
/// language. Doubles as the request-cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentRequest {
    /// Path relative to the backend host, e.g. `/api/news/`.
    pub path: String,
    /// Query parameters, kept sorted so equal requests compare equal.
    pub params: BTreeMap<String, String>,
    /// Backend language code sent as `lang` and `Accept-Language`.
    pub lang: String,
}

impl ContentRequest {
    pub fn new(path: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: BTreeMap::new(),
            lang: lang.into(),
        }
    }

    /// Add a query parameter; blank values are ignored.
    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.params.insert(key.to_string(), value.trim().to_string());
        }
        self
    }

    /// Query pairs including `lang`, in a stable order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if !self.params.contains_key("lang") {
            pairs.push(("lang".to_string(), self.lang.clone()));
        }
        pairs
    }
}

impl fmt::Display for ContentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?", self.path)?;
        let pairs = self.query_pairs();
        for (i, (k, v)) in pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{k}={v}")?;
        }
        Ok(())
    }
}
