//! Configuration loading functions.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Config;

pub const CONFIG_FILE_NAMES: [&str; 4] = [
    ".gitlab-report.yaml",
    ".gitlab-report.yml",
    ".gitlab-report.json",
    ".gitlab-report.toml",
];

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                path: path.display().to_string(),
                source: e,
            }),
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.display().to_string(),
                source: e,
            }),
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
                path: path.display().to_string(),
                source: e,
            }),
            _ => Err(ConfigError::UnsupportedFormat(
                path.display().to_string(),
                ext,
            )),
        }
    }

    /// Load configuration from the project directory or global config.
    ///
    /// Search order:
    /// 1. `.gitlab-report.{yaml,yml,json,toml}` in project root
    /// 2. `~/.config/gitlab-report/config.yaml`
    /// 3. Default configuration
    ///
    /// Unreadable files are skipped with a warning.
    pub fn load(project_root: Option<&Path>) -> Self {
        if let Some(root) = project_root {
            for filename in &CONFIG_FILE_NAMES {
                let path = root.join(filename);
                if path.exists() {
                    match Self::from_file(&path) {
                        Ok(config) => {
                            debug!(path = %path.display(), "Loaded project config");
                            return config;
                        }
                        Err(e) => warn!(error = %e, "Skipping config file"),
                    }
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("gitlab-report").join("config.yaml");
            if global_config.exists()
                && let Ok(config) = Self::from_file(&global_config)
            {
                debug!(path = %global_config.display(), "Loaded global config");
                return config;
            }
        }

        Self::default()
    }
}
