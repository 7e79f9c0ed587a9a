use crate::aggregator::IssueAggregator;
use crate::rules::{ReportIssue, Severity};
use colored::Colorize;

/// Human-readable run summary, written to stderr by the CLI.
pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn severity_color(&self, severity: Severity) -> colored::ColoredString {
        let label = format!("[{}]", severity);
        match severity {
            Severity::Blocker => label.red().bold(),
            Severity::Critical => label.red(),
            Severity::Major => label.yellow().bold(),
            Severity::Minor => label.cyan(),
            Severity::Info => label.white(),
        }
    }

    fn format_issue(&self, entry: &ReportIssue) -> String {
        let location = match entry.issue.line {
            Some(line) => format!("{}:{}", entry.file, line),
            None => entry.file.clone(),
        };
        let hidden = if entry.reported {
            String::new()
        } else {
            format!(" {}", "(not in diff)".dimmed())
        };
        format!(
            "  {} {} {}: {}{}\n",
            self.severity_color(entry.severity()),
            location,
            entry.rule_key(),
            entry.issue.message.replace(['\n', '\r'], " "),
            hidden
        )
    }

    /// Summarize the aggregated run: counts per severity, then the issues
    /// hidden by the diff policy per severity.
    pub fn report(&self, aggregator: &IssueAggregator) -> String {
        let mut output = String::new();

        let Some(highest) = aggregator.highest_severity() else {
            output.push_str(&format!("{}\n", "No issues found.".green().bold()));
            return output;
        };

        output.push_str(&format!(
            "{} (highest: {})\n",
            format!("{} issue(s) found", aggregator.issue_count()).bold(),
            self.severity_color(highest)
        ));
        for (severity, count) in aggregator.severity_counts().iter() {
            output.push_str(&format!("  {} {}\n", self.severity_color(severity), count));
        }

        if aggregator.not_reported_issue_count() > 0 {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "{} issue(s) not reported on the diff",
                    aggregator.not_reported_issue_count()
                )
                .yellow()
            ));
            for severity in Severity::ALL {
                let hidden = aggregator.not_reported_issues_for_severity(severity);
                if !hidden.is_empty() {
                    output.push_str(&format!(
                        "  {} {}\n",
                        self.severity_color(severity),
                        hidden.len()
                    ));
                }
            }
        }

        if self.verbose {
            output.push('\n');
            for entry in aggregator.issues() {
                output.push_str(&self.format_issue(entry));
            }
        }

        output
    }
}
