//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Criticality of a log entry, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    #[default]
    Info = 0,
    Warn = 1,
    Error = 2,
    Fatal = 3,
}

impl Severity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// All severities in ascending order of criticality.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
