//! Configuration for response classification.

use http::header::HeaderName;

use crate::errors::{RaxError, RaxResult};

/// Default header carrying the server request ID.
pub const DEFAULT_REQUEST_ID_HEADER: &str = "x-compute-request-id";

/// Default text for `message` and `details` missing from an error body.
pub const DEFAULT_PLACEHOLDER: &str = "n/a";

/// Configuration for the error mapper.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Header the request ID is read from.
    pub request_id_header: HeaderName,
    /// Substitute for missing body fields.
    pub placeholder: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            request_id_header: HeaderName::from_static(DEFAULT_REQUEST_ID_HEADER),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Creates a configuration builder.
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::new()
    }
}

/// Builder for `ClassifierConfig`.
#[derive(Debug, Default)]
pub struct ClassifierConfigBuilder {
    request_id_header: Option<String>,
    placeholder: Option<String>,
}

impl ClassifierConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request ID header name.
    pub fn request_id_header(mut self, name: impl Into<String>) -> Self {
        self.request_id_header = Some(name.into());
        self
    }

    /// Sets the placeholder for missing body fields.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> RaxResult<ClassifierConfig> {
        let request_id_header = match self.request_id_header {
            Some(name) => HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                RaxError::configuration(format!("Invalid request ID header name: {:?}", name))
            })?,
            None => HeaderName::from_static(DEFAULT_REQUEST_ID_HEADER),
        };

        let placeholder = self
            .placeholder
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

        if placeholder.is_empty() {
            return Err(RaxError::configuration("Placeholder cannot be empty"));
        }

        Ok(ClassifierConfig {
            request_id_header,
            placeholder,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = ClassifierConfig::builder().build().unwrap();

        assert_eq!(config.request_id_header.as_str(), DEFAULT_REQUEST_ID_HEADER);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_config_builder_normalizes_header_case() {
        let config = ClassifierConfig::builder()
            .request_id_header("X-OpenStack-Request-ID")
            .build()
            .unwrap();

        assert_eq!(config.request_id_header.as_str(), "x-openstack-request-id");
    }

    #[test]
    fn test_config_builder_invalid_header() {
        let result = ClassifierConfig::builder()
            .request_id_header("not a header")
            .build();
        assert!(matches!(result, Err(RaxError::Configuration { .. })));
    }

    #[test]
    fn test_config_builder_empty_placeholder() {
        let result = ClassifierConfig::builder().placeholder("").build();
        assert!(result.is_err());
    }
}
