//! GitLab security-findings (SAST) report.
//!
//! The `vulnerabilities` value is the array text placed between quotes
//! without escaping, and `name`, `description` and the identifier `type` and
//! `name` are the literal text `null`. Downstream parsers depend on this exact
//! shape, so it is kept as is.

use super::Reporter;
use crate::rules::ReportIssue;
use serde::Serialize;

pub const SAST_VERSION: &str = "8.0.1";
const NULL_TEXT: &str = "null";

pub struct SastReporter;

impl SastReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SastReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SastReporter {
    fn report(&self, issues: &[ReportIssue]) -> String {
        let vulnerabilities: Vec<Vulnerability<'_>> =
            issues.iter().map(Vulnerability::from_issue).collect();
        let array = serde_json::to_string(&vulnerabilities)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize SAST: {}"}}"#, e));

        format!(
            r#"{{"version":"{}","vulnerabilities":"{}"}}"#,
            SAST_VERSION, array
        )
    }
}

#[derive(Debug, Serialize)]
struct Vulnerability<'a> {
    id: &'a str,
    category: &'static str,
    name: &'static str,
    description: &'static str,
    identifiers: [Identifier<'a>; 1],
    message: &'a str,
    severity: &'static str,
    solution: &'a str,
    location: VulnerabilityLocation<'a>,
    scanner: Scanner,
}

#[derive(Debug, Serialize)]
struct Identifier<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a str,
    name: &'static str,
}

#[derive(Debug, Serialize)]
struct VulnerabilityLocation<'a> {
    file: &'a str,
    start_line: String,
}

#[derive(Debug, Serialize)]
struct Scanner {
    id: &'static str,
    name: &'static str,
}

impl<'a> Vulnerability<'a> {
    fn from_issue(entry: &'a ReportIssue) -> Self {
        Self {
            id: entry.issue.key.as_deref().unwrap_or(NULL_TEXT),
            category: "sast",
            name: NULL_TEXT,
            description: NULL_TEXT,
            identifiers: [Identifier {
                kind: NULL_TEXT,
                value: entry.rule_key(),
                name: NULL_TEXT,
            }],
            message: &entry.issue.message,
            severity: entry.severity().display_name(),
            solution: &entry.rule_url,
            location: VulnerabilityLocation {
                file: &entry.file,
                start_line: entry.issue.line.unwrap_or(1).to_string(),
            },
            scanner: Scanner {
                id: "codescan",
                name: "CodeScan",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Issue, Rule, Severity};
    use crate::test_utils::fixtures::sast_issue;

    fn vulnerability(id: &str, message: &str, solution: &str, start_line: &str) -> String {
        format!(
            r#"{{"id":"{}","category":"sast","name":"null","description":"null","identifiers":[{{"type":"null","value":"rule","name":"null"}}],"message":"{}","severity":"Info","solution":"{}","location":{{"file":"file","start_line":"{}"}},"scanner":{{"id":"codescan","name":"CodeScan"}}}}"#,
            id, message, solution, start_line
        )
    }

    #[test]
    fn test_no_issues() {
        let output = SastReporter::new().report(&[]);
        assert_eq!(output, r#"{"version":"8.0.1","vulnerabilities":"[]"}"#);
    }

    #[test]
    fn test_one_issue_without_line() {
        let output = SastReporter::new().report(&[sast_issue()]);

        assert_eq!(
            output,
            r#"{"version":"8.0.1","vulnerabilities":"[{"id":"123","category":"sast","name":"null","description":"null","identifiers":[{"type":"null","value":"rule","name":"null"}],"message":"Issue \"NULL\"","severity":"Info","solution":"http://myserver","location":{"file":"file","start_line":"1"},"scanner":{"id":"codescan","name":"CodeScan"}}]"}"#
        );
    }

    #[test]
    fn test_one_issue_with_line() {
        let mut entry = sast_issue();
        entry.issue.line = Some(10);
        let output = SastReporter::new().report(&[entry]);

        assert!(output.contains(r#""location":{"file":"file","start_line":"10"}"#));
    }

    #[test]
    fn test_many_issues_keep_order() {
        let issues: Vec<ReportIssue> = (0..5)
            .map(|i| {
                let issue = Issue::new("component", Severity::Info, "Issue", format!("rule{}", i))
                    .with_key(format!("toto_{}", i));
                ReportIssue::new(issue, "file")
                    .with_rule(Some(Rule::new("rule")))
                    .with_rule_url(format!("http://myserver/rule{}", i))
            })
            .collect();

        let elements: Vec<String> = (0..5)
            .map(|i| {
                vulnerability(
                    &format!("toto_{}", i),
                    "Issue",
                    &format!("http://myserver/rule{}", i),
                    "1",
                )
            })
            .collect();
        let expected = format!(
            r#"{{"version":"8.0.1","vulnerabilities":"[{}]"}}"#,
            elements.join(",")
        );

        assert_eq!(SastReporter::new().report(&issues), expected);
    }

    #[test]
    fn test_multiline_message_escaped() {
        let issue = Issue::new("component", Severity::Info, "Issue\nline1\n\rline2", "rule")
            .with_key("toto");
        let entry = ReportIssue::new(issue, "file")
            .with_rule(Some(Rule::new("rule")))
            .with_rule_url("http://myserver/rule");

        let expected = format!(
            r#"{{"version":"8.0.1","vulnerabilities":"[{}]"}}"#,
            vulnerability("toto", r"Issue\nline1\n\rline2", "http://myserver/rule", "1")
        );
        assert_eq!(SastReporter::new().report(&[entry]), expected);
    }

    #[test]
    fn test_backslash_and_tab_escaped() {
        let issue = Issue::new("component", Severity::Info, "a\\b\tc", "rule")
            .with_key("k")
            .with_line(0);
        let output = SastReporter::new().report(&[ReportIssue::new(issue, "file")]);

        assert!(output.contains(r#""message":"a\\b\tc""#));
        assert!(output.contains(r#""start_line":"0""#));
        assert!(!output.contains('\t'));
    }

    #[test]
    fn test_severity_display_form() {
        let issue = Issue::new("component", Severity::Blocker, "Issue", "rule").with_key("b");
        let output = SastReporter::new().report(&[ReportIssue::new(issue, "file")]);
        assert!(output.contains(r#""severity":"Blocker""#));
    }

    #[test]
    fn test_rule_key_from_issue_without_metadata() {
        let issue = Issue::new("component", Severity::Major, "Issue", "java:S100").with_key("k");
        let output = SastReporter::new().report(&[ReportIssue::new(issue, "file")]);
        assert!(
            output.contains(r#""identifiers":[{"type":"null","value":"java:S100","name":"null"}]"#)
        );
    }

    #[test]
    fn test_missing_key_renders_null_text() {
        let issue = Issue::new("component", Severity::Minor, "Issue", "rule");
        let output = SastReporter::new().report(&[ReportIssue::new(issue, "file")]);
        assert!(output.contains(r#""[{"id":"null","category":"sast""#));
    }
}
