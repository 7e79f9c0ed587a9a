//! Configuration type definitions.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:9000";

/// Main configuration structure for gitlab-report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report rendering and status configuration.
    pub report: ReportConfig,
}

/// Report configuration; every value can be overridden on the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// JSON report flavour: "NONE", "SAST", "CODECLIMATE".
    pub json_mode: Option<String>,
    /// Quality gate fail mode: "error", "warn", "none".
    pub fail_mode: Option<String>,
    /// Base URL of the analysis server, used to build rule links.
    pub server_url: Option<String>,
}

impl ReportConfig {
    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}
