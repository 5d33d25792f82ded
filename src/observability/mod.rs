//! Observability support: structured logging through `tracing`.

pub mod logging;

pub use logging::{log_client_exception, LogFormat, LogLevel, LoggingConfig};
