pub mod code_climate;
pub mod sast;
pub mod terminal;

use crate::error::ParseEnumError;
use crate::rules::ReportIssue;
use serde::{Deserialize, Serialize};

pub trait Reporter {
    fn report(&self, issues: &[ReportIssue]) -> String;
}

/// JSON report flavour published alongside the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum JsonMode {
    /// No JSON report; renders an empty array.
    #[default]
    None,
    /// GitLab security findings.
    Sast,
    /// GitLab Code Quality (Code Climate).
    #[value(name = "codeclimate", alias = "code-quality")]
    #[serde(alias = "CODE-QUALITY")]
    CodeClimate,
}

impl JsonMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonMode::None => "NONE",
            JsonMode::Sast => "SAST",
            JsonMode::CodeClimate => "CODECLIMATE",
        }
    }
}

impl std::fmt::Display for JsonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for JsonMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "none" => Ok(JsonMode::None),
            "sast" => Ok(JsonMode::Sast),
            "codeclimate" | "codequality" => Ok(JsonMode::CodeClimate),
            _ => Err(ParseEnumError::invalid("JsonMode", s)),
        }
    }
}

/// Encode `value` as a JSON string literal, quotes included.
pub(crate) fn json_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
