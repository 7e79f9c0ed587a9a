//! Issue aggregator accumulating counts for a single analysis run.

use super::summary::{SeverityCounter, Summary};
use crate::rules::{ReportIssue, Severity};
use std::collections::HashMap;
use tracing::debug;

/// Collects processed issues in insertion order and tracks per-severity and
/// per-reportability counts.
#[derive(Debug, Default)]
pub struct IssueAggregator {
    issues: Vec<ReportIssue>,
    by_severity: SeverityCounter,
    not_reported: usize,
    not_reported_by_severity: HashMap<Severity, Vec<ReportIssue>>,
}

impl IssueAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one issue.
    pub fn process(&mut self, entry: ReportIssue) {
        let severity = entry.severity();
        debug!(
            severity = %severity,
            sast_severity = %severity.to_sast(),
            reported = entry.reported,
            file = %entry.file,
            "Processing issue"
        );

        self.by_severity.increment(severity);

        if !entry.reported {
            self.not_reported += 1;
            self.not_reported_by_severity
                .entry(severity)
                .or_default()
                .push(entry.clone());
        }

        self.issues.push(entry);
    }

    /// Record multiple issues in order.
    pub fn process_all(&mut self, entries: impl IntoIterator<Item = ReportIssue>) {
        for entry in entries {
            self.process(entry);
        }
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Number of issues hidden by the diff policy.
    pub fn not_reported_issue_count(&self) -> usize {
        self.not_reported
    }

    pub fn issue_count_for_severity(&self, severity: Severity) -> usize {
        self.by_severity.get(severity)
    }

    /// Issues of the given severity hidden by the diff policy, in processing order.
    pub fn not_reported_issues_for_severity(&self, severity: Severity) -> &[ReportIssue] {
        self.not_reported_by_severity
            .get(&severity)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All processed issues, in processing order.
    pub fn issues(&self) -> &[ReportIssue] {
        &self.issues
    }

    pub fn severity_counts(&self) -> &SeverityCounter {
        &self.by_severity
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Get the highest severity among all issues.
    pub fn highest_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|i| i.severity()).max()
    }

    pub fn summary(&self) -> Summary {
        Summary::from_aggregator(self)
    }
}
