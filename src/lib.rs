//! Aggregates static-analysis issues for a merge request and renders them as
//! GitLab report artifacts.
//!
//! - `aggregator`: per-run issue accumulation and counts
//! - `gate`: quality-gate verdicts, fail modes and commit status
//! - `reporter`: SAST, Code Quality and terminal reporters
//! - `output`: the report renderer tying both together
//! - `config`, `input`, `handlers`, `cli`: the command-line driver

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod input;
pub mod output;
pub mod reporter;
pub mod rules;

#[cfg(test)]
pub mod test_utils;

pub use aggregator::{IssueAggregator, SeverityCounter, Summary};
pub use cli::Cli;
pub use config::{Config, ConfigError, EffectiveConfig};
pub use error::{ParseEnumError, ReportError, Result};
pub use gate::{CommitStatus, FailMode, QualityGate, QualityGateStatus, commit_status};
pub use output::{RenderSettings, ReportRenderer};
pub use reporter::{JsonMode, Reporter};
pub use rules::{Issue, ReportIssue, Rule, SastSeverity, Severity};
