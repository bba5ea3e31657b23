//! Publish modes — the built-in bulk propagation strategies.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the built-in bulk publish strategies owned by the repository
/// engine.
///
/// Parsed case-insensitively from request strings; the set is fixed and
/// there is no user-defined mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishMode {
    /// Republish everything, unconditionally.
    Full,
    /// Differential publish: only items the repository detects as changed.
    Smart,
    /// Publish items queued since the last completed run.
    Incremental,
}

impl PublishMode {
    /// The canonical lowercase name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Smart => "smart",
            Self::Incremental => "incremental",
        }
    }
}

impl fmt::Display for PublishMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublishMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "smart" => Ok(Self::Smart),
            "incremental" => Ok(Self::Incremental),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}
