//! Structural URL parse errors.

use thiserror::Error;

/// Why a string could not be decomposed into URL components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing protocol scheme")]
    MissingScheme,
    #[error("first path segment in URL cannot contain colon")]
    ColonInFirstSegment,
    #[error("invalid control character in URL")]
    ControlCharacter,
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),
    #[error("invalid port {0:?} after host")]
    InvalidPort(String),
    #[error("missing ']' in host")]
    MissingBracket,
    #[error("invalid IPv6 literal {0:?}")]
    InvalidIpv6(String),
    #[error("invalid character {0:?} in host name")]
    InvalidHostCharacter(char),
    #[error("invalid userinfo")]
    InvalidUserinfo,
}
