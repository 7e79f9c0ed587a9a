//! Error types for gitlab-report.
//!
//! Aggregation and rendering never fail; errors only come from the edges:
//! reading issue files, loading configuration and parsing enum values.

mod context;

pub use context::{IoOperation, ParseFormat};

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for gitlab-report operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O operation failed.
    #[error("Failed to {operation} {path}: {source}")]
    Io {
        path: PathBuf,
        operation: IoOperation,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with preserved source.
    #[error("Failed to parse {format} in {path}: {source}")]
    Parse {
        path: PathBuf,
        format: ParseFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for gitlab-report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Failure to parse one of the closed enums from its textual form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind} value: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn invalid(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
