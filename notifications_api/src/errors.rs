//! Error types for the API client.

use std::fmt;

use crate::token::TokenError;
use crate::types::ApiErrorEntry;

/// Message used when neither the server nor the transport gave anything better.
pub const REQUEST_ERROR_MESSAGE: &str = "Request failed";

/// Errors that can occur when building or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request failed at the transport or HTTP layer.
    #[error(transparent)]
    Http(#[from] HttpError),
    /// The API answered with a success status but the body was not valid JSON.
    #[error("{message} (status {})", .response.status)]
    InvalidResponse {
        response: RawResponse,
        message: String,
    },
    /// A required configuration value was empty at construction.
    #[error("Missing {0}")]
    MissingConfig(&'static str),
    /// The configured base URL could not be parsed.
    #[error("Invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// The bearer token could not be minted.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
    /// The request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
    /// A helper was handed data it cannot work with.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A failed request: either an HTTP status >= 400 or no response at all.
///
/// `status_code` is `None` when the transport failed before any response
/// arrived (connection refused, DNS failure, timeout).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpError {
    pub status_code: Option<u16>,
    pub message: String,
    pub errors: Vec<ApiErrorEntry>,
}

impl HttpError {
    /// Builds an error from a response status and its (possibly empty) body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();

        let errors = parsed
            .as_ref()
            .and_then(|v| v.get("errors"))
            .and_then(|v| serde_json::from_value::<Vec<ApiErrorEntry>>(v.clone()).ok())
            .filter(|entries| !entries.is_empty())
            .unwrap_or_else(|| vec![ApiErrorEntry::generic()]);

        let message = parsed
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| {
                errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .filter(|m| !m.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ")
            });
        let message = if message.trim().is_empty() {
            REQUEST_ERROR_MESSAGE.to_string()
        } else {
            message
        };

        Self {
            status_code: Some(status),
            message,
            errors,
        }
    }

    /// Builds an error for a request that never received a response.
    pub fn transport() -> Self {
        Self {
            status_code: None,
            message: REQUEST_ERROR_MESSAGE.to_string(),
            errors: vec![ApiErrorEntry::generic()],
        }
    }

    /// True when no HTTP response was received.
    pub fn is_transport_failure(&self) -> bool {
        self.status_code.is_none()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(status) => write!(f, "{} - {}", status, self.message),
            None => write!(f, "no response - {}", self.message),
        }
    }
}

impl std::error::Error for HttpError {}

/// The undecoded response kept on [`Error::InvalidResponse`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_uses_errors_list() {
        let body = r#"{"errors":[{"error":"ValidationError","message":"to is required"}]}"#;
        let err = HttpError::from_response(400, body);
        assert_eq!(err.status_code, Some(400));
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].error, "ValidationError");
        assert_eq!(err.message, "to is required");
    }

    #[test]
    fn from_response_prefers_top_level_message() {
        let body = r#"{"message":"Invalid token","errors":[{"error":"AuthError","message":"bad"}]}"#;
        let err = HttpError::from_response(403, body);
        assert_eq!(err.message, "Invalid token");
        assert_eq!(err.errors[0].error, "AuthError");
    }

    #[test]
    fn from_response_falls_back_on_garbage() {
        let err = HttpError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status_code, Some(502));
        assert_eq!(err.errors, vec![ApiErrorEntry::generic()]);
        assert_eq!(err.message, REQUEST_ERROR_MESSAGE);
    }

    #[test]
    fn from_response_falls_back_on_malformed_errors() {
        let err = HttpError::from_response(400, r#"{"errors":"nope"}"#);
        assert_eq!(err.errors, vec![ApiErrorEntry::generic()]);
    }

    #[test]
    fn from_response_falls_back_on_empty_errors_list() {
        let err = HttpError::from_response(400, r#"{"errors":[]}"#);
        assert_eq!(err.status_code, Some(400));
        assert_eq!(err.errors, vec![ApiErrorEntry::generic()]);
        assert_eq!(err.message, REQUEST_ERROR_MESSAGE);
        assert_eq!(err.to_string(), "400 - Request failed");
    }

    #[test]
    fn from_response_falls_back_on_blank_messages() {
        let body = r#"{"message":"  ","errors":[{"error":"ValidationError","message":""}]}"#;
        let err = HttpError::from_response(400, body);
        assert_eq!(err.errors[0].error, "ValidationError");
        assert_eq!(err.message, REQUEST_ERROR_MESSAGE);
    }

    #[test]
    fn client_build_error_is_not_a_transport_failure() {
        let err = Error::ClientBuild("tls backend unavailable".to_string());
        assert!(!matches!(err, Error::Http(_)));
        assert_eq!(
            err.to_string(),
            "Failed to build HTTP client: tls backend unavailable"
        );
    }

    #[test]
    fn transport_has_no_status() {
        let err = HttpError::transport();
        assert!(err.is_transport_failure());
        assert_eq!(err.to_string(), "no response - Request failed");
    }

    #[test]
    fn display_includes_status() {
        let err = HttpError::from_response(404, "");
        assert_eq!(err.to_string(), "404 - Request failed");
    }
}
