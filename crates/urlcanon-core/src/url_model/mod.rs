//! URL modeling: case-preserving parsing and serialization.
//!
//! Splits a URL into scheme, userinfo, host, port, path, query and fragment
//! without normalizing any of them, so that rewrite rules decide exactly
//! what changes. Structurally malformed input is reported as [`ParseError`].

mod error;
mod escape;
mod host;
mod parse;

pub use error::ParseError;
pub use host::{validate_host, Authority};
pub use parse::ParsedUrl;
