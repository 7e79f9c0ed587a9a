//! Aggregation layer.
//!
//! Accumulates processed issues for a single analysis run:
//! - Keeps every issue in processing order for rendering
//! - Counts issues per severity
//! - Tracks issues hidden by the diff policy, per severity

pub mod collector;
pub mod summary;

pub use collector::IssueAggregator;
pub use summary::{SeverityCounter, Summary};
