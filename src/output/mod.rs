//! Output layer.
//!
//! Turns an aggregated run into what the outside world consumes:
//! - JSON report text (none / SAST / Code Quality)
//! - Commit status derived from the quality gate and fail mode
//! - A one-line status description

pub mod renderer;

pub use crate::reporter::{
    JsonMode, Reporter, code_climate::CodeClimateReporter, sast::SastReporter,
    terminal::TerminalReporter,
};

pub use renderer::{RenderSettings, ReportRenderer};
