//! The caller-selected rewrite mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ProcessError;

/// Which rewrite rule(s) to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Strip the query and trailing path slashes.
    Canonical,
    /// Force the redirect host and lower-case everything.
    Redirection,
    /// Canonical, then redirection.
    All,
}

impl Operation {
    pub const VARIANTS: [Operation; 3] = [Operation::Canonical, Operation::Redirection, Operation::All];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Canonical => "canonical",
            Operation::Redirection => "redirection",
            Operation::All => "all",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact lower-case match only; `"Canonical"` is rejected.
impl FromStr for Operation {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ProcessError::MissingOperation),
            "canonical" => Ok(Operation::Canonical),
            "redirection" => Ok(Operation::Redirection),
            "all" => Ok(Operation::All),
            other => Err(ProcessError::InvalidOperation(other.to_string())),
        }
    }
}
