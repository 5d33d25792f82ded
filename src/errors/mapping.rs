//! Classification of received responses.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::ClassifierConfig;
use crate::errors::{ClientException, ClientExceptionKind, RaxResult};
use crate::response::{RawResponse, ResponseBody, ResponseMeta};

/// The nested object of a single-entry error body, e.g. the value of
/// `{"itemNotFound": {"message": "...", "details": "...", "code": 404}}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    details: Option<Value>,
}

/// Maps received responses to client exceptions.
#[derive(Debug, Clone, Default)]
pub struct ErrorMapper {
    config: ClassifierConfig,
}

impl ErrorMapper {
    /// Creates a mapper with the given configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Returns the mapper configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies a response and its decoded body.
    ///
    /// Never fails. Statuses outside the table produce the generic kind.
    /// `message` and `details` are only read from a body holding exactly one
    /// entry whose value is an object; missing keys become the placeholder.
    pub fn classify<R>(&self, response: &R, body: &ResponseBody) -> ClientException
    where
        R: ResponseMeta + ?Sized,
    {
        let status = response.status();
        let kind = ClientExceptionKind::for_status(status);
        let request_id = response
            .header(self.config.request_id_header.as_str())
            .map(str::to_string);

        tracing::debug!(
            status = status,
            kind = %kind,
            request_id = request_id.as_deref().unwrap_or("<none>"),
            "Classifying error response"
        );

        let builder = ClientException::builder(kind, status).maybe_request_id(request_id);

        match body {
            ResponseBody::Mapping(map) => match self.extract_fields(map) {
                Some((message, details)) => builder.message(message).details(details).build(),
                None => builder.build(),
            },
            ResponseBody::Absent | ResponseBody::Other(_) => builder.build(),
        }
    }

    /// Reads the body, decodes it and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns `RaxError::Serialization` if the body cannot be read.
    pub async fn classify_reqwest(&self, response: reqwest::Response) -> RaxResult<ClientException> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        let meta = RawResponse { status, headers };
        Ok(self.classify(&meta, &ResponseBody::from_slice(&bytes)))
    }

    fn extract_fields(&self, map: &Map<String, Value>) -> Option<(String, String)> {
        if map.len() > 1 {
            tracing::warn!(
                keys = ?map.keys().collect::<Vec<_>>(),
                "Error body has more than one top-level entry; ignoring its contents"
            );
            return None;
        }

        let placeholder = || self.config.placeholder.clone();
        let (_, error) = map.iter().next()?;

        let detail = match error {
            Value::Object(_) => ErrorDetail::deserialize(error).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "Unreadable error detail");
                ErrorDetail::default()
            }),
            _ => ErrorDetail::default(),
        };

        Some((
            field_text(detail.message).unwrap_or_else(placeholder),
            field_text(detail.details).unwrap_or_else(placeholder),
        ))
    }
}

fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Classifies a response with the default configuration.
pub fn classify<R>(response: &R, body: &ResponseBody) -> ClientException
where
    R: ResponseMeta + ?Sized,
{
    ErrorMapper::default().classify(response, body)
}
