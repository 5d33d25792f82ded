//! Response inputs for classification.
//!
//! The classifier never inspects transport types directly. Callers hand it
//! something implementing [`ResponseMeta`] plus a [`ResponseBody`] decoded
//! ahead of time.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

/// Status and header access for a received response.
pub trait ResponseMeta {
    /// The numeric HTTP status.
    fn status(&self) -> u16;

    /// Looks up a header value, ignoring case. Non UTF-8 values are `None`.
    fn header(&self, name: &str) -> Option<&str>;
}

fn lookup<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

impl<B> ResponseMeta for http::Response<B> {
    fn status(&self) -> u16 {
        self.status().as_u16()
    }

    fn header(&self, name: &str) -> Option<&str> {
        lookup(self.headers(), name)
    }
}

impl ResponseMeta for reqwest::Response {
    fn status(&self) -> u16 {
        self.status().as_u16()
    }

    fn header(&self, name: &str) -> Option<&str> {
        lookup(self.headers(), name)
    }
}

/// A bare status and header map, for callers without a response object.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
}

impl RawResponse {
    /// Creates a response with the given status and no headers.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
        }
    }

    /// Adds a header. Invalid names or values are skipped.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.append(name, value);
            }
            _ => tracing::debug!(header = name, "Skipping invalid header"),
        }
        self
    }
}

impl ResponseMeta for RawResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn header(&self, name: &str) -> Option<&str> {
        lookup(&self.headers, name)
    }
}

/// A decoded response body, sorted by shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResponseBody {
    /// No body, or a falsy one (`null`, `false`, `0`, `""`, `[]`, `{}`).
    #[default]
    Absent,
    /// A non-empty JSON object.
    Mapping(Map<String, Value>),
    /// Any other value, including undecodable text.
    Other(Value),
}

impl ResponseBody {
    /// Sorts an already-decoded JSON value.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => Self::Absent,
            Value::Number(ref n) if n.as_f64() == Some(0.0) => Self::Absent,
            Value::String(ref s) if s.is_empty() => Self::Absent,
            Value::Array(ref items) if items.is_empty() => Self::Absent,
            Value::Object(map) if map.is_empty() => Self::Absent,
            Value::Object(map) => Self::Mapping(map),
            other => Self::Other(other),
        }
    }

    /// Decodes raw body bytes.
    ///
    /// Blank input is `Absent`; text that is not JSON is kept as
    /// `Other(Value::String(..))`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Self::Absent;
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self::from_value(value),
            Err(err) => {
                tracing::debug!(error = %err, "Response body is not JSON");
                Self::Other(Value::String(String::from_utf8_lossy(bytes).into_owned()))
            }
        }
    }

    /// Returns true if there is no body.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Value> for ResponseBody {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
