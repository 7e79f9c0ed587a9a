//! Issue severities and their mapping onto the security-findings scale.

use crate::error::ParseEnumError;
use serde::{Deserialize, Serialize};

/// Severity of an analysis issue, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 5] = [
        Severity::Blocker,
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
        Severity::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
            Severity::Critical => "CRITICAL",
            Severity::Blocker => "BLOCKER",
        }
    }

    /// Report form: first letter capitalized, rest lowercase.
    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Minor => "Minor",
            Severity::Major => "Major",
            Severity::Critical => "Critical",
            Severity::Blocker => "Blocker",
        }
    }

    pub fn to_sast(self) -> SastSeverity {
        match self {
            Severity::Info => SastSeverity::Info,
            Severity::Minor => SastSeverity::Low,
            Severity::Major => SastSeverity::Medium,
            Severity::Critical => SastSeverity::High,
            Severity::Blocker => SastSeverity::Critical,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "minor" => Ok(Severity::Minor),
            "major" => Ok(Severity::Major),
            "critical" => Ok(Severity::Critical),
            "blocker" => Ok(Severity::Blocker),
            _ => Err(ParseEnumError::invalid("Severity", s)),
        }
    }
}

/// Severity scale of the GitLab security-findings schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SastSeverity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl SastSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            SastSeverity::Info => "Info",
            SastSeverity::Low => "Low",
            SastSeverity::Medium => "Medium",
            SastSeverity::High => "High",
            SastSeverity::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for SastSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
