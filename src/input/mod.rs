//! Input layer: loading issues handed over by the upstream analyzer.

pub mod source;

pub use source::{IssueRecord, load_issues, parse_issues, rule_url};
