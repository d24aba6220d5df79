//! URL canonicalization and redirection processing.
//!
//! Validates `(url, operation)`, parses the URL, applies the selected rewrite
//! rule(s) and serializes the result. Processing is pure: no I/O, no shared
//! state, no clock. A [`UrlProcessor`] only carries the redirect host and can
//! be shared freely across threads.

mod error;
mod operation;
mod rules;
mod types;

pub use error::{ErrorKind, ProcessError};
pub use operation::Operation;
pub use types::{ErrorResponse, UrlRequest, UrlResponse};

use crate::url_model::ParsedUrl;

/// Host written by the redirection rule unless configured otherwise.
pub const DEFAULT_REDIRECT_HOST: &str = "www.byfood.com";

/// Stateless URL processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlProcessor {
    redirect_host: String,
}

impl Default for UrlProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_REDIRECT_HOST)
    }
}

impl UrlProcessor {
    /// Processor that redirects to `redirect_host`.
    ///
    /// The host is not validated here; see `UrlcanonConfig::validate`.
    pub fn new(redirect_host: impl Into<String>) -> Self {
        Self {
            redirect_host: redirect_host.into(),
        }
    }

    pub fn redirect_host(&self) -> &str {
        &self.redirect_host
    }

    /// Processes `url` according to `operation`.
    ///
    /// Checks run in order: empty url, empty operation, unknown operation,
    /// then URL parsing.
    ///
    /// # Examples
    ///
    /// - `("https://BYFOOD.com/food-EXPeriences?query=abc/", "canonical")` → `"https://BYFOOD.com/food-EXPeriences"`
    /// - same URL with `"redirection"` → `"https://www.byfood.com/food-experiences?query=abc/"`
    /// - same URL with `"all"` → `"https://www.byfood.com/food-experiences"`
    pub fn process(&self, url: &str, operation: &str) -> Result<String, ProcessError> {
        let result = self.validate_and_apply(url, operation);
        match &result {
            Ok(processed) => {
                tracing::debug!("processed url op={} in={} out={}", operation, url, processed)
            }
            Err(err) => tracing::warn!("rejected url op={:?} url={:?}: {}", operation, url, err),
        }
        result
    }

    /// Request/response form of [`UrlProcessor::process`].
    pub fn process_request(&self, request: &UrlRequest) -> Result<UrlResponse, ProcessError> {
        let processed_url = self.process(&request.url, &request.operation)?;
        Ok(UrlResponse { processed_url })
    }

    /// Applies `operation` to an already-parsed URL.
    pub fn apply(&self, mut url: ParsedUrl, operation: Operation) -> Result<String, ProcessError> {
        match operation {
            Operation::Canonical => {
                rules::canonicalize(&mut url);
                Ok(url.to_string())
            }
            Operation::Redirection => Ok(rules::redirect(url, &self.redirect_host)),
            Operation::All => {
                rules::canonicalize(&mut url);
                let reparsed = ParsedUrl::parse(&url.to_string())?;
                Ok(rules::redirect(reparsed, &self.redirect_host))
            }
        }
    }

    fn validate_and_apply(&self, url: &str, operation: &str) -> Result<String, ProcessError> {
        if url.is_empty() {
            return Err(ProcessError::MissingUrl);
        }
        let operation: Operation = operation.parse()?;
        let parsed = ParsedUrl::parse(url)?;
        self.apply(parsed, operation)
    }
}

/// Processes `url` with the default redirect host.
pub fn process(url: &str, operation: &str) -> Result<String, ProcessError> {
    UrlProcessor::default().process(url, operation)
}
