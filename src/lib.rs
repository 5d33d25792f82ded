//! Cloud API Client Errors
//!
//! The error vocabulary shared by the compute, object storage, CDN and
//! identity clients: payload-free marker errors for failures that never saw
//! an HTTP response, and status-keyed client exceptions built from the
//! responses that did.
//!
//! # Features
//!
//! - **Marker errors**: one closed enum for authentication, storage, CDN and
//!   configuration failures
//! - **Client exceptions**: `BadRequest`, `Unauthorized`, `Forbidden`,
//!   `NotFound`, `OverLimit`, `HTTPNotImplemented` plus a generic fallback
//! - **Classification**: a pure mapping from (status, headers, body) to the
//!   most specific client exception
//! - **Observability**: `tracing` events and an opt-in subscriber setup
//!
//! # Quick Start
//!
//! ```rust
//! use rax_errors::{classify, ClientExceptionKind, RawResponse, ResponseBody};
//!
//! let response = RawResponse::new(404).with_header("x-compute-request-id", "req-42");
//! let body = ResponseBody::from_slice(br#"{"itemNotFound": {"message": "No such server"}}"#);
//!
//! let error = classify(&response, &body);
//! assert_eq!(error.kind(), ClientExceptionKind::NotFound);
//! assert_eq!(error.to_string(), "No such server (HTTP 404) (Request-ID: req-42)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod errors;
pub mod observability;
pub mod response;

// Re-exports for convenience
pub use config::ClassifierConfig;
pub use errors::{
    classify, ClientException, ClientExceptionBuilder, ClientExceptionKind, ErrorMapper,
    MarkerError, RaxError, RaxResult,
};
pub use response::{RawResponse, ResponseBody, ResponseMeta};
