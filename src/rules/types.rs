use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// A single static-analysis finding as supplied by the upstream analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique issue key; some analyzers leave it unset.
    pub key: Option<String>,
    pub component_key: String,
    pub line: Option<u32>,
    pub severity: Severity,
    pub message: String,
    pub rule_key: String,
    pub is_new: bool,
}

impl Issue {
    pub fn new(
        component_key: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        rule_key: impl Into<String>,
    ) -> Self {
        Self {
            key: None,
            component_key: component_key.into(),
            line: None,
            severity,
            message: message.into(),
            rule_key: rule_key.into(),
            is_new: true,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_new(mut self, is_new: bool) -> Self {
        self.is_new = is_new;
        self
    }
}

/// Rule metadata resolved for an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Rule {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            description: None,
        }
    }
}

/// An issue together with everything the report formats need about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportIssue {
    pub issue: Issue,
    pub rule: Option<Rule>,
    pub user: Option<String>,
    pub review_link: String,
    /// Path as shown in reports, relative to the repository root.
    pub file: String,
    pub rule_url: String,
    /// Whether the issue is visible under the active diff policy.
    pub reported: bool,
}

impl ReportIssue {
    pub fn new(issue: Issue, file: impl Into<String>) -> Self {
        Self {
            issue,
            rule: None,
            user: None,
            review_link: String::new(),
            file: file.into(),
            rule_url: String::new(),
            reported: true,
        }
    }

    pub fn with_rule(mut self, rule: Option<Rule>) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_user(mut self, user: Option<String>) -> Self {
        self.user = user;
        self
    }

    pub fn with_review_link(mut self, link: impl Into<String>) -> Self {
        self.review_link = link.into();
        self
    }

    pub fn with_rule_url(mut self, url: impl Into<String>) -> Self {
        self.rule_url = url.into();
        self
    }

    pub fn with_reported(mut self, reported: bool) -> Self {
        self.reported = reported;
        self
    }

    pub fn severity(&self) -> Severity {
        self.issue.severity
    }

    /// Rule key used as the report identifier: resolved rule metadata first,
    /// then the key carried by the issue itself.
    pub fn rule_key(&self) -> &str {
        self.rule
            .as_ref()
            .map(|r| r.key.as_str())
            .unwrap_or(&self.issue.rule_key)
    }
}
