use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when using the Exa API client
#[derive(Debug, Error)]
pub enum ExaError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by Exa
    #[error("API error ({:?}): {}", .0.kind(), .0.message)]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),

    /// Request rejected locally before being sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A polling operation ran past its deadline
    #[error("Timed out after {elapsed:?} waiting for {operation}")]
    Timeout {
        /// What was being waited on (e.g. `webset ws_123`)
        operation: String,
        /// Time spent before giving up
        elapsed: Duration,
    },

    /// A polled resource reached a server-reported failure state
    #[error("{resource} {id} ended in status {status}: {message}")]
    ResourceFailed {
        /// Resource kind (`import`, `research task`, ...)
        resource: &'static str,
        /// Resource id
        id: String,
        /// Terminal status reported by the server
        status: String,
        /// Failure reason reported by the server
        message: String,
    },
}

/// Error category derived from the HTTP status of a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 400: the request failed server-side validation
    Validation,
    /// 401: missing or invalid API key
    Authentication,
    /// 404: the referenced resource does not exist
    NotFound,
    /// 408: the server timed out handling the request
    Timeout,
    /// 429: too many requests
    RateLimit,
    /// 5xx: server-side failure
    Server,
    /// Any other non-success status
    Other,
}

impl ApiErrorKind {
    /// Maps an HTTP status code to its error kind
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        match code {
            400 => Self::Validation,
            401 => Self::Authentication,
            404 => Self::NotFound,
            408 => Self::Timeout,
            429 => Self::RateLimit,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

/// API error object from Exa
///
/// Wire shape: `{message, statusCode, timestamp?, path?}` plus optional
/// per-kind context fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorObject {
    /// HTTP status code
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Timestamp of the error (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Request path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Error type string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Seconds to wait before retrying (rate limits)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    /// Offending field (validation errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Violated constraint (validation errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    /// Missing resource id (not-found errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl ApiErrorObject {
    /// Returns the error kind for this object's status code
    #[must_use]
    pub fn kind(&self) -> ApiErrorKind {
        self.status_code
            .map_or(ApiErrorKind::Other, ApiErrorKind::from_status)
    }
}

impl ExaError {
    /// Determines if this error is retryable
    ///
    /// Retryable errors include rate limits (429), timeouts (408),
    /// conflicts (409) and server errors (5xx).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(obj) => obj
                .status_code
                .is_some_and(crate::retry::is_retryable_status),
            Self::Reqwest(e) => e.is_timeout() || e.is_connect(),
            Self::Config(_)
            | Self::Serde(_)
            | Self::InvalidRequest(_)
            | Self::Timeout { .. }
            | Self::ResourceFailed { .. } => false,
        }
    }

    /// Returns the API error kind, if this is an API error
    #[must_use]
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Api(obj) => Some(obj.kind()),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if this is an API error
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(obj) => obj.status_code,
            _ => None,
        }
    }

    /// Returns the server's retry hint for rate-limited calls
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Api(obj) => obj.retry_after.map(Duration::from_secs),
            _ => None,
        }
    }
}

macro_rules! impl_from_builder_error {
    ($($err:ty),* $(,)?) => {
        $(
            impl From<$err> for ExaError {
                fn from(e: $err) -> Self {
                    Self::InvalidRequest(e.to_string())
                }
            }
        )*
    };
}

impl_from_builder_error!(
    crate::types::websets::CreateWebsetParamsBuilderError,
    crate::types::websets::CreateWebsetSearchParamsBuilderError,
    crate::types::websets::CreateEnrichmentParamsBuilderError,
    crate::types::websets::CreateImportParamsBuilderError,
    crate::types::websets::CreateMonitorParamsBuilderError,
    crate::types::websets::CreateStreamParamsBuilderError,
    crate::types::websets::CreateWebhookParamsBuilderError,
    crate::types::research::ResearchCreateRequestBuilderError,
);

/// Maps a serde deserialization error to an `ExaError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> ExaError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    ExaError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response
///
/// A JSON object body is read field by field, so one field of an unexpected
/// type does not discard the rest. Any other body becomes the message. The
/// `Retry-After` header takes precedence over a `retryAfter` body field.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> ExaError {
    let mut obj = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => ApiErrorObject::from_fields(&fields),
        // Server may return plain text on 5xx; cap body to avoid log/memory bloat
        _ => ApiErrorObject {
            message: String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned(),
            error: Some(format!("http_{}", status.as_u16())),
            ..ApiErrorObject::default()
        },
    };

    obj.status_code = Some(status.as_u16());
    if obj.message.is_empty()
        && let Some(e) = &obj.error
    {
        obj.message.clone_from(e);
    }
    if let Some(secs) = crate::retry::parse_retry_after(headers) {
        obj.retry_after = Some(secs);
    }

    ExaError::Api(obj)
}

impl ApiErrorObject {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        let text = |key: &str| match fields.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        };
        let number = |key: &str| match fields.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };

        Self {
            status_code: number("statusCode").and_then(|n| u16::try_from(n).ok()),
            message: text("message").unwrap_or_default(),
            timestamp: text("timestamp"),
            path: text("path"),
            error: text("error"),
            retry_after: number("retryAfter"),
            field: text("field"),
            constraint: text("constraint"),
            resource_id: text("resourceId"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn api(status: u16, headers: &HeaderMap, body: &str) -> ApiErrorObject {
        match deserialize_api_error(
            StatusCode::from_u16(status).unwrap(),
            headers,
            body.as_bytes(),
        ) {
            ExaError::Api(obj) => obj,
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn status_kind_matrix() {
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::Validation);
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Authentication);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(408), ApiErrorKind::Timeout);
        assert_eq!(ApiErrorKind::from_status(429), ApiErrorKind::RateLimit);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Other);
    }

    #[test]
    fn validation_payload_is_preserved() {
        let obj = api(
            400,
            &HeaderMap::new(),
            r#"{"message":"bad count","statusCode":400,"timestamp":"2025-01-01T00:00:00Z","path":"/websets/v0/websets","field":"search.count","constraint":"min:1"}"#,
        );

        assert_eq!(obj.kind(), ApiErrorKind::Validation);
        assert_eq!(obj.field.as_deref(), Some("search.count"));
        assert_eq!(obj.constraint.as_deref(), Some("min:1"));
        assert_eq!(obj.path.as_deref(), Some("/websets/v0/websets"));
    }

    #[test]
    fn retry_after_header_overrides_body() {
        let mut h = HeaderMap::new();
        h.insert("retry-after", HeaderValue::from_static("30"));
        let obj = api(
            429,
            &h,
            r#"{"message":"slow down","statusCode":429,"retryAfter":5}"#,
        );

        assert_eq!(obj.retry_after, Some(30));
        assert_eq!(
            ExaError::Api(obj).retry_after(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn retry_after_falls_back_to_body() {
        let obj = api(
            429,
            &HeaderMap::new(),
            r#"{"message":"slow down","retryAfter":12}"#,
        );
        assert_eq!(obj.retry_after, Some(12));
        assert_eq!(obj.status_code, Some(429));
    }

    #[test]
    fn error_string_fills_empty_message() {
        let obj = api(401, &HeaderMap::new(), r#"{"error":"Invalid API key"}"#);
        assert_eq!(obj.message, "Invalid API key");
        assert_eq!(obj.kind(), ApiErrorKind::Authentication);
    }

    #[test]
    fn mistyped_field_keeps_the_rest() {
        let obj = api(
            400,
            &HeaderMap::new(),
            r#"{"message":"bad count","statusCode":400,"timestamp":1735689600,"field":"search.count","constraint":"min:1","retryAfter":"7"}"#,
        );

        assert_eq!(obj.message, "bad count");
        assert_eq!(obj.timestamp.as_deref(), Some("1735689600"));
        assert_eq!(obj.field.as_deref(), Some("search.count"));
        assert_eq!(obj.constraint.as_deref(), Some("min:1"));
        assert_eq!(obj.retry_after, Some(7));
    }

    #[test]
    fn json_array_body_is_treated_as_text() {
        let obj = api(502, &HeaderMap::new(), "[1,2]");
        assert_eq!(obj.message, "[1,2]");
        assert_eq!(obj.kind(), ApiErrorKind::Server);
    }

    #[test]
    fn plain_text_body_is_capped() {
        let body = "x".repeat(1000);
        let obj = api(503, &HeaderMap::new(), &body);
        assert_eq!(obj.message.len(), 400);
        assert_eq!(obj.error.as_deref(), Some("http_503"));
        assert!(ExaError::Api(obj).is_retryable());
    }

    #[test]
    fn local_errors_are_not_retryable() {
        let timeout = ExaError::Timeout {
            operation: "webset ws_1".into(),
            elapsed: Duration::from_secs(1),
        };
        assert!(!timeout.is_retryable());
        assert!(timeout.kind().is_none());
        assert!(!ExaError::InvalidRequest("x".into()).is_retryable());
    }
}
