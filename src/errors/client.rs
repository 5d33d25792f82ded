//! Client exceptions classified from HTTP responses.

use std::fmt;
use thiserror::Error;

/// The kind of a [`ClientException`].
///
/// `Generic` is the base kind used for any status outside the table; every
/// other kind is bound to exactly one HTTP status and one default message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientExceptionKind {
    /// Any status without a dedicated kind.
    Generic,
    /// HTTP 400: malformed request data.
    BadRequest,
    /// HTTP 401: bad credentials.
    Unauthorized,
    /// HTTP 403: credentials lack access to the resource.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// HTTP 413: over the API limits for this time period.
    OverLimit,
    /// HTTP 501: the server does not support the operation.
    HttpNotImplemented,
}

/// Status to kind bindings. Fixed for the lifetime of the process.
pub const STATUS_TABLE: [(u16, ClientExceptionKind); 6] = [
    (400, ClientExceptionKind::BadRequest),
    (401, ClientExceptionKind::Unauthorized),
    (403, ClientExceptionKind::Forbidden),
    (404, ClientExceptionKind::NotFound),
    (413, ClientExceptionKind::OverLimit),
    (501, ClientExceptionKind::HttpNotImplemented),
];

impl ClientExceptionKind {
    /// Looks up the kind bound to a status, falling back to `Generic`.
    pub fn for_status(status: u16) -> Self {
        STATUS_TABLE
            .iter()
            .find(|(code, _)| *code == status)
            .map_or(Self::Generic, |(_, kind)| *kind)
    }

    /// The status this kind is bound to. `None` for `Generic`.
    pub fn http_status(self) -> Option<u16> {
        STATUS_TABLE
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(status, _)| *status)
    }

    /// The message used when none is supplied. `None` for `Generic`.
    pub fn default_message(self) -> Option<&'static str> {
        match self {
            Self::Generic => None,
            Self::BadRequest => Some("Bad request"),
            Self::Unauthorized => Some("Unauthorized"),
            Self::Forbidden => Some("Forbidden"),
            Self::NotFound => Some("Not found"),
            Self::OverLimit => Some("Over limit"),
            Self::HttpNotImplemented => Some("Not Implemented"),
        }
    }

    /// The kind's name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Generic => "ClientException",
            Self::BadRequest => "BadRequest",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "NotFound",
            Self::OverLimit => "OverLimit",
            Self::HttpNotImplemented => "HTTPNotImplemented",
        }
    }
}

impl fmt::Display for ClientExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error built from a classified HTTP response.
///
/// Renders as `"<message> (HTTP <code>)"`, followed by
/// `" (Request-ID: <id>)"` when a non-empty request ID is present. A generic
/// exception without a message renders the status reason phrase in its place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ClientException {
    kind: ClientExceptionKind,
    code: u16,
    message: Option<String>,
    details: Option<String>,
    request_id: Option<String>,
}

impl ClientException {
    /// Creates an exception of the given kind with only a status code.
    pub fn new(kind: ClientExceptionKind, code: u16) -> Self {
        Self::builder(kind, code).build()
    }

    /// Creates a builder for an exception of the given kind.
    pub fn builder(kind: ClientExceptionKind, code: u16) -> ClientExceptionBuilder {
        ClientExceptionBuilder {
            kind,
            code,
            message: None,
            details: None,
            request_id: None,
        }
    }

    /// Creates an exception whose kind is chosen from the status code.
    pub fn from_status(code: u16) -> Self {
        Self::new(ClientExceptionKind::for_status(code), code)
    }

    /// The kind of this exception.
    pub fn kind(&self) -> ClientExceptionKind {
        self.kind
    }

    /// The HTTP status code that produced this exception.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Human-readable summary.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Additional diagnostic text from the response body.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Server correlation ID from the response headers.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns true for 4xx codes.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code)
    }

    /// Returns true for 5xx codes.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }
}

impl fmt::Display for ClientException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} (HTTP {})", message, self.code)?,
            None => write!(f, "{} (HTTP {})", fallback_message(self.code), self.code)?,
        }

        if let Some(request_id) = self.request_id.as_deref().filter(|id| !id.is_empty()) {
            write!(f, " (Request-ID: {})", request_id)?;
        }

        Ok(())
    }
}

// Only reached by the generic kind, which has no default message.
fn fallback_message(code: u16) -> &'static str {
    http::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown error")
}

/// Builder for [`ClientException`].
#[derive(Debug)]
pub struct ClientExceptionBuilder {
    kind: ClientExceptionKind,
    code: u16,
    message: Option<String>,
    details: Option<String>,
    request_id: Option<String>,
}

impl ClientExceptionBuilder {
    /// Sets the message. An empty message keeps the kind's default.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the details.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Sets the request ID.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Sets the request ID if one is present.
    pub fn maybe_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Builds the exception.
    pub fn build(self) -> ClientException {
        let message = self
            .message
            .filter(|m| !m.is_empty())
            .or_else(|| self.kind.default_message().map(str::to_string));

        ClientException {
            kind: self.kind,
            code: self.code,
            message,
            details: self.details,
            request_id: self.request_id,
        }
    }
}
