//! GitLab Code Quality report (Code Climate issue subset).

use super::{Reporter, json_string};
use crate::rules::ReportIssue;

pub struct CodeClimateReporter;

impl CodeClimateReporter {
    pub fn new() -> Self {
        Self
    }

    fn format_issue(entry: &ReportIssue) -> String {
        let fingerprint = entry
            .issue
            .key
            .as_deref()
            .map(json_string)
            .unwrap_or_else(|| "null".to_string());
        let line = entry.issue.line.unwrap_or(0);

        // Consumers match on this exact layout, including the spacing around `lines`.
        format!(
            r#"{{"fingerprint":{},"description":{},"location":{{"path":{},"lines": {{ "begin":{},"end":{}}}}}}}"#,
            fingerprint,
            json_string(&entry.issue.message),
            json_string(&entry.file),
            line,
            line
        )
    }
}

impl Default for CodeClimateReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for CodeClimateReporter {
    fn report(&self, issues: &[ReportIssue]) -> String {
        let body: Vec<String> = issues.iter().map(Self::format_issue).collect();
        format!("[{}]", body.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Issue, Severity};
    use crate::test_utils::fixtures::{code_climate_issue, create_report_issue};

    #[test]
    fn test_no_issues() {
        let reporter = CodeClimateReporter::new();
        assert_eq!(reporter.report(&[]), "[]");
    }

    #[test]
    fn test_one_issue() {
        let reporter = CodeClimateReporter::new();
        let output = reporter.report(&[code_climate_issue()]);

        assert_eq!(
            output,
            r#"[{"fingerprint":"456","description":"Issue \"NULL\"","location":{"path":"file","lines": { "begin":20,"end":20}}}]"#
        );
    }

    #[test]
    fn test_issues_without_line() {
        let reporter = CodeClimateReporter::new();
        let issues: Vec<ReportIssue> = (0..5)
            .map(|i| {
                let issue = Issue::new("component", Severity::Info, "Issue", format!("rule{}", i))
                    .with_key(format!("tata_{}", i));
                ReportIssue::new(issue, "file").with_rule_url(format!("http://myserver/rule{}", i))
            })
            .collect();

        let expected: Vec<String> = (0..5)
            .map(|i| {
                format!(
                    r#"{{"fingerprint":"tata_{}","description":"Issue","location":{{"path":"file","lines": {{ "begin":0,"end":0}}}}}}"#,
                    i
                )
            })
            .collect();
        assert_eq!(reporter.report(&issues), format!("[{}]", expected.join(",")));
    }

    #[test]
    fn test_missing_key_renders_bare_null() {
        let reporter = CodeClimateReporter::new();
        let output = reporter.report(&[create_report_issue(Severity::Major, true)]);

        assert!(output.starts_with(r#"[{"fingerprint":null,"description":"Issue""#));
    }

    #[test]
    fn test_multiline_message_escaped() {
        let issue = Issue::new("component", Severity::Info, "Issue\nline1\n\rline2", "rule")
            .with_key("toto");
        let output = CodeClimateReporter::new().report(&[ReportIssue::new(issue, "file")]);

        assert!(output.contains(r#""description":"Issue\nline1\n\rline2""#));
        assert!(!output.contains('\n'));
        assert!(!output.contains('\r'));
    }

    #[test]
    fn test_output_is_valid_json() {
        let output = CodeClimateReporter::new().report(&[code_climate_issue()]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["location"]["lines"]["begin"], 20);
        assert_eq!(parsed[0]["description"], "Issue \"NULL\"");
    }
}
