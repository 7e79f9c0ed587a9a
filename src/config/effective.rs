//! Effective configuration after merging CLI and config file.

use super::error::ConfigError;
use super::parsers::{parse_fail_mode, parse_json_mode};
use super::types::Config;
use crate::cli::Cli;
use crate::gate::QualityGate;
use crate::output::RenderSettings;

/// Effective run configuration after merging CLI and config file.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub settings: RenderSettings,
    pub server_url: String,
    pub quality_gate: Option<QualityGate>,
}

impl EffectiveConfig {
    /// Merge CLI options with config file settings.
    ///
    /// CLI values take precedence; config provides the fallback, then defaults.
    pub fn from_cli_and_config(cli: &Cli, config: &Config) -> Result<Self, ConfigError> {
        let json_mode = match cli.json_mode {
            Some(mode) => mode,
            None => parse_json_mode(config.report.json_mode.as_deref())?.unwrap_or_default(),
        };

        let fail_mode = match cli.fail_mode {
            Some(mode) => mode,
            None => parse_fail_mode(config.report.fail_mode.as_deref())?.unwrap_or_default(),
        };

        let server_url = cli
            .server_url
            .clone()
            .unwrap_or_else(|| config.report.server_url().to_string());

        Ok(Self {
            settings: RenderSettings {
                json_mode,
                fail_mode,
            },
            server_url,
            quality_gate: cli.quality_gate.map(QualityGate::new),
        })
    }
}
