//! Request and response bodies of the JSON contract.

use serde::{Deserialize, Serialize};

use super::ProcessError;

/// Input for URL processing: `{ "url": ..., "operation": ... }`.
///
/// Missing fields decode as empty strings so they are reported as
/// "URL is required" / "operation is required" rather than decode failures.
/// `operation` stays a plain string until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub operation: String,
}

impl UrlRequest {
    pub fn new(url: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            operation: operation.into(),
        }
    }
}

/// Output of URL processing: `{ "processed_url": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlResponse {
    pub processed_url: String,
}

/// Standard error payload: `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ProcessError> for ErrorResponse {
    fn from(err: &ProcessError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
