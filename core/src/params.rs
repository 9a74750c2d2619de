//! Query-string assembly for API calls.
//!
//! Parameters are collected in call order with optional values. Absent values
//! are dropped at render time, lists are joined with `;`, everything else is
//! stringified. Each scalar and each list element is form-urlencoded on its
//! own so the `;` separator stays literal on the wire.

use std::fmt;

use url::form_urlencoded::byte_serialize;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl ParamValue {
    fn encode(&self) -> String {
        match self {
            ParamValue::List(items) => items
                .iter()
                .map(|item| encode(item))
                .collect::<Vec<_>>()
                .join(";"),
            other => encode(&other.to_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::List(items) => f.write_str(&items.join(";")),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl<S: AsRef<str>> From<&[S]> for ParamValue {
    fn from(value: &[S]) -> Self {
        ParamValue::List(value.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

/// Ordered named parameters for one API call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(&'static str, Option<ParamValue>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<ParamValue>) -> Self {
        self.entries.push((name, Some(value.into())));
        self
    }

    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.entries.push((name, value.map(Into::into)));
        self
    }

    /// Present parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> + '_ {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (*name, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Renders `k1=v1&k2=v2`, skipping absent values.
    pub fn to_query(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}={}", encode(name), value.encode()))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// `base + method`, followed by `?query` when any parameter is present.
pub fn build_url(base: &str, method: &str, params: &Params) -> String {
    let mut url = format!("{base}{method}");
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.to_query());
    }
    url
}

fn encode(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}
