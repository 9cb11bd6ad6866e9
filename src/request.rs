//! The request description produced by a translation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// HTTP method of the translated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered multimap of query-string parameters.
///
/// Key order and per-key value order both follow insertion order. Repeated
/// values under one key are meaningful: a BETWEEN filter emits `gte.` and
/// `lte.` entries under the same column key, and each OR group is its own
/// `or` value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams(IndexMap<String, Vec<String>>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under a key, keeping any earlier values.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// All values appended under `key`, in order.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flattened `(key, value)` pairs in render order. Percent-encoding and
    /// URL assembly are the caller's concern.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }
}

/// A complete translated request: method, resource path, query parameters,
/// optional JSON body and headers. Produced once per call, never mutated
/// after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub method: Method,
    /// Resource path, `/relation`.
    pub path: String,
    pub params: QueryParams,
    /// Compact JSON body, present for INSERT and UPDATE.
    pub body: Option<String>,
    pub headers: IndexMap<String, String>,
}

impl ConversionResult {
    pub(crate) fn new(method: Method, relation: &str) -> Self {
        Self {
            method,
            path: format!("/{relation}"),
            params: QueryParams::new(),
            body: None,
            headers: IndexMap::new(),
        }
    }
}
