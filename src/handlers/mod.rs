//! CLI command handlers.
//!
//! Kept out of main.rs so they can be unit tested.

mod report;

use std::process::ExitCode;

pub use report::{ReportOutcome, handle_report, run_report};

/// Result type for handler functions that can be tested.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    Success,
    Error(u8),
}

impl From<HandlerResult> for ExitCode {
    fn from(result: HandlerResult) -> Self {
        match result {
            HandlerResult::Success => ExitCode::SUCCESS,
            HandlerResult::Error(code) => ExitCode::from(code),
        }
    }
}
