//! Processing error type and its mapping onto the HTTP error contract.

use thiserror::Error;

use crate::url_model::ParseError;

/// High-level classification of a processing failure.
///
/// Input-shape kinds are detected before any parsing attempt;
/// `MalformedUrl` comes out of URL decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty `url` or empty `operation`.
    InvalidInput,
    /// `operation` is not one of the recognized names.
    InvalidOperation,
    /// `url` failed structural parsing.
    MalformedUrl,
}

/// Error returned by the URL processor. Always terminal; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error("URL is required")]
    MissingUrl,
    #[error("operation is required")]
    MissingOperation,
    #[error("invalid operation type: {0:?}")]
    InvalidOperation(String),
    #[error("invalid URL format: {0}")]
    MalformedUrl(#[from] ParseError),
}

impl ProcessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProcessError::MissingUrl | ProcessError::MissingOperation => ErrorKind::InvalidInput,
            ProcessError::InvalidOperation(_) => ErrorKind::InvalidOperation,
            ProcessError::MalformedUrl(_) => ErrorKind::MalformedUrl,
        }
    }

    /// HTTP status a hosting handler should answer with.
    ///
    /// Every kind is a client error on the request body, hence 400.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::InvalidInput | ErrorKind::InvalidOperation | ErrorKind::MalformedUrl => 400,
        }
    }
}
