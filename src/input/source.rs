//! Issue input files.
//!
//! The upstream analyzer hands issues over as a JSON array; each record
//! carries the issue plus the diff-visibility verdict computed upstream.

use crate::error::{IoOperation, ParseFormat, ReportError, Result};
use crate::rules::{Issue, ReportIssue, Rule, Severity};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;
use url::form_urlencoded;

/// One issue as written by the upstream analyzer.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueRecord {
    #[serde(default)]
    pub key: Option<String>,
    pub component: String,
    #[serde(default)]
    pub line: Option<u32>,
    pub severity: Severity,
    pub message: String,
    pub rule: String,
    #[serde(default = "default_true")]
    pub is_new: bool,
    #[serde(default = "default_true")]
    pub reported: bool,
    /// Repository-relative path; defaults to the component key.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub rule_url: Option<String>,
    #[serde(default)]
    pub rule_name: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub review_link: Option<String>,
}

fn default_true() -> bool {
    true
}

impl IssueRecord {
    /// Build the report entry, deriving the rule link from `server_url` when
    /// the record has none.
    pub fn into_report_issue(self, server_url: &str) -> ReportIssue {
        let rule_url = self
            .rule_url
            .unwrap_or_else(|| rule_url(server_url, &self.rule));
        let rule = self.rule_name.map(|name| Rule {
            key: self.rule.clone(),
            name: Some(name),
            description: None,
        });
        let file = self.file.unwrap_or_else(|| self.component.clone());

        let mut issue = Issue::new(self.component, self.severity, self.message, self.rule)
            .with_new(self.is_new);
        issue.key = self.key;
        issue.line = self.line;

        ReportIssue::new(issue, file)
            .with_rule(rule)
            .with_user(self.user)
            .with_review_link(self.review_link.unwrap_or_default())
            .with_rule_url(rule_url)
            .with_reported(self.reported)
    }
}

/// Link to the rule description page on the analysis server.
pub fn rule_url(server_url: &str, rule_key: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(rule_key.as_bytes()).collect();
    format!(
        "{}/coding_rules#rule_key={}",
        server_url.trim_end_matches('/'),
        encoded
    )
}

/// Parse issue records from JSON text.
pub fn parse_issues(content: &str) -> serde_json::Result<Vec<IssueRecord>> {
    serde_json::from_str(content)
}

/// Read issue records from a JSON file.
pub fn load_issues(path: &Path) -> Result<Vec<IssueRecord>> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        operation: IoOperation::Read,
        source: e,
    })?;

    let records = parse_issues(&content).map_err(|e| ReportError::Parse {
        path: path.to_path_buf(),
        format: ParseFormat::Json,
        source: Box::new(e),
    })?;

    debug!(path = %path.display(), count = records.len(), "Loaded issues");
    Ok(records)
}
