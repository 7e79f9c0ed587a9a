//! Quality-gate verdicts, fail modes and the resulting commit status.

use crate::error::ParseEnumError;
use serde::{Deserialize, Serialize};

/// Verdict of the quality gate computed by the analysis server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityGateStatus {
    Ok,
    Warn,
    Error,
    /// No gate configured for the project.
    #[default]
    None,
}

impl QualityGateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityGateStatus::Ok => "ok",
            QualityGateStatus::Warn => "warn",
            QualityGateStatus::Error => "error",
            QualityGateStatus::None => "none",
        }
    }
}

impl std::fmt::Display for QualityGateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QualityGateStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(QualityGateStatus::Ok),
            "warn" => Ok(QualityGateStatus::Warn),
            "error" => Ok(QualityGateStatus::Error),
            "none" => Ok(QualityGateStatus::None),
            _ => Err(ParseEnumError::invalid("QualityGateStatus", s)),
        }
    }
}

/// Quality gate result for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityGate {
    pub status: QualityGateStatus,
}

impl QualityGate {
    pub fn new(status: QualityGateStatus) -> Self {
        Self { status }
    }
}

/// Which quality-gate verdicts break the build.
///
/// Config values follow the server property: `error`, `warn`, `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailMode {
    /// Only `ERROR` fails.
    #[default]
    #[value(name = "error", alias = "strict")]
    #[serde(rename = "error", alias = "strict")]
    Strict,
    /// `WARN` and `ERROR` fail.
    Warn,
    /// Nothing fails; the gate is advisory.
    None,
}

impl FailMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailMode::Strict => "error",
            FailMode::Warn => "warn",
            FailMode::None => "none",
        }
    }

    pub fn fails_on(&self, status: QualityGateStatus) -> bool {
        match (self, status) {
            (FailMode::None, _) => false,
            (_, QualityGateStatus::Error) => true,
            (FailMode::Warn, QualityGateStatus::Warn) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for FailMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FailMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" | "strict" => Ok(FailMode::Strict),
            "warn" => Ok(FailMode::Warn),
            "none" => Ok(FailMode::None),
            _ => Err(ParseEnumError::invalid("FailMode", s)),
        }
    }
}

/// Binary pass/fail signal published as the commit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitStatus {
    Success,
    Failed,
}

impl CommitStatus {
    /// GitLab commit-status state.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitStatus::Success => "success",
            CommitStatus::Failed => "failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommitStatus::Success)
    }
}

impl std::fmt::Display for CommitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Commit status for a gate verdict under the given fail mode.
pub fn commit_status(status: QualityGateStatus, fail_mode: FailMode) -> CommitStatus {
    if fail_mode.fails_on(status) {
        CommitStatus::Failed
    } else {
        CommitStatus::Success
    }
}
