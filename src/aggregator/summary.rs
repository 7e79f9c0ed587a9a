//! Severity counters and run summaries.

use super::collector::IssueAggregator;
use crate::rules::Severity;
use serde::Serialize;
use std::collections::BTreeMap;

/// Count of issues per severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounter {
    counts: BTreeMap<Severity, usize>,
}

impl SeverityCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, severity: Severity) {
        *self.counts.entry(severity).or_default() += 1;
    }

    pub fn get(&self, severity: Severity) -> usize {
        self.counts.get(&severity).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts, most severe first.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        self.counts.iter().rev().map(|(s, c)| (*s, *c))
    }
}

/// Snapshot of an aggregator's counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub not_reported: usize,
    pub blocker: usize,
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub info: usize,
}

impl Summary {
    pub fn from_aggregator(aggregator: &IssueAggregator) -> Self {
        let counts = aggregator.severity_counts();
        Self {
            total: aggregator.issue_count(),
            not_reported: aggregator.not_reported_issue_count(),
            blocker: counts.get(Severity::Blocker),
            critical: counts.get(Severity::Critical),
            major: counts.get(Severity::Major),
            minor: counts.get(Severity::Minor),
            info: counts.get(Severity::Info),
        }
    }

    /// Human-readable breakdown, e.g. `3 issues, with 1 critical, 1 major and 1 info`.
    pub fn describe(&self) -> String {
        if self.total == 0 {
            return "no issues".to_string();
        }

        let noun = if self.total == 1 { "issue" } else { "issues" };
        let parts: Vec<String> = [
            (self.blocker, "blocker"),
            (self.critical, "critical"),
            (self.major, "major"),
            (self.minor, "minor"),
            (self.info, "info"),
        ]
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("{} {}", count, label))
        .collect();

        let breakdown = match parts.split_last() {
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
            None => String::new(),
        };

        format!("{} {}, with {}", self.total, noun, breakdown)
    }
}
