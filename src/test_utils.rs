#[cfg(test)]
pub mod fixtures {
    use crate::rules::{Issue, ReportIssue, Rule, Severity};

    pub const GITLAB_URL: &str = "https://gitlab.com/test/test";

    pub fn create_issue(severity: Severity) -> Issue {
        Issue::new("component", severity, "Issue", "rule")
    }

    pub fn create_report_issue(severity: Severity, reported: bool) -> ReportIssue {
        ReportIssue::new(create_issue(severity), "file")
            .with_review_link(GITLAB_URL)
            .with_rule_url("http://myserver")
            .with_reported(reported)
    }

    /// Issue `123` without a line, as produced for file-level findings.
    pub fn sast_issue() -> ReportIssue {
        let issue =
            Issue::new("component", Severity::Info, "Issue \"NULL\"", "rule").with_key("123");
        ReportIssue::new(issue, "file")
            .with_rule(Some(Rule::new("rule")))
            .with_review_link(GITLAB_URL)
            .with_rule_url("http://myserver")
    }

    /// Issue `456` on line 20.
    pub fn code_climate_issue() -> ReportIssue {
        let issue = Issue::new("component", Severity::Info, "Issue \"NULL\"", "rule")
            .with_key("456")
            .with_line(20);
        ReportIssue::new(issue, "file")
            .with_rule(Some(Rule::new("rule")))
            .with_review_link(GITLAB_URL)
            .with_rule_url("http://myserver")
    }
}
