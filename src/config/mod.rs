//! Configuration layer for gitlab-report.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File loading logic
//! - `parsers`: Typed parsing of string values
//! - `effective`: CLI + config merging

mod effective;
mod error;
mod loading;
mod parsers;
mod types;

pub use effective::EffectiveConfig;
pub use error::ConfigError;
pub use loading::CONFIG_FILE_NAMES;
pub use parsers::{parse_fail_mode, parse_json_mode};
pub use types::{Config, DEFAULT_SERVER_URL, ReportConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.report.json_mode.is_none());
        assert!(config.report.fail_mode.is_none());
        assert_eq!(config.report.server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".gitlab-report.yaml");
        fs::write(
            &config_path,
            r#"
report:
  json_mode: SAST
  fail_mode: warn
  server_url: https://sonar.example.com
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.report.json_mode.as_deref(), Some("SAST"));
        assert_eq!(config.report.fail_mode.as_deref(), Some("warn"));
        assert_eq!(config.report.server_url(), "https://sonar.example.com");
    }

    #[test]
    fn test_load_json_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".gitlab-report.json");
        fs::write(
            &config_path,
            r#"{"report": {"json_mode": "CODECLIMATE", "fail_mode": "none"}}"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.report.json_mode.as_deref(), Some("CODECLIMATE"));
        assert_eq!(config.report.fail_mode.as_deref(), Some("none"));
        assert_eq!(config.report.server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_load_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".gitlab-report.toml");
        fs::write(
            &config_path,
            r#"
[report]
json_mode = "NONE"
fail_mode = "error"
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.report.json_mode.as_deref(), Some("NONE"));
        assert_eq!(config.report.fail_mode.as_deref(), Some("error"));
    }

    #[test]
    fn test_empty_yaml_sections_use_defaults() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        fs::write(&config_path, "report: {}\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert!(config.report.json_mode.is_none());
    }

    #[test]
    fn test_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.ini");
        fs::write(&config_path, "json_mode=SAST").unwrap();

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_, ref ext) if ext == "ini"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::from_file(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        fs::write(&config_path, "report: [unclosed").unwrap();

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseYaml { .. }));
    }

    #[test]
    fn test_load_from_project_root() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".gitlab-report.yml"),
            "report:\n  json_mode: SAST\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()));
        assert_eq!(config.report.json_mode.as_deref(), Some("SAST"));
    }

    #[test]
    fn test_load_prefers_yaml_over_json() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".gitlab-report.yaml"),
            "report:\n  fail_mode: warn\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(".gitlab-report.json"),
            r#"{"report": {"fail_mode": "none"}}"#,
        )
        .unwrap();

        let config = Config::load(Some(dir.path()));
        assert_eq!(config.report.fail_mode.as_deref(), Some("warn"));
    }

    #[test]
    fn test_load_skips_broken_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitlab-report.yaml"), "report: [").unwrap();
        fs::write(
            dir.path().join(".gitlab-report.toml"),
            "[report]\nfail_mode = \"none\"\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()));
        assert_eq!(config.report.fail_mode.as_deref(), Some("none"));
    }
}
