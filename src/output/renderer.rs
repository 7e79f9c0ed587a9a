//! Report renderer: JSON serialization and commit status for a run.

use crate::aggregator::IssueAggregator;
use crate::gate::{CommitStatus, FailMode, QualityGate, QualityGateStatus, commit_status};
use crate::reporter::{
    JsonMode, Reporter, code_climate::CodeClimateReporter, sast::SastReporter,
};
use tracing::debug;

/// Settings the renderer is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSettings {
    pub json_mode: JsonMode,
    pub fail_mode: FailMode,
}

/// Renders aggregated issues and decides the commit status.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    settings: RenderSettings,
}

impl ReportRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Render the issues in the configured JSON mode.
    pub fn render_configured(&self, aggregator: &IssueAggregator) -> String {
        self.render(aggregator, self.settings.json_mode)
    }

    /// Render the issues in `mode`, in processing order.
    pub fn render(&self, aggregator: &IssueAggregator, mode: JsonMode) -> String {
        debug!(mode = %mode, issues = aggregator.issue_count(), "Rendering report");
        match mode {
            JsonMode::None => "[]".to_string(),
            JsonMode::Sast => SastReporter::new().report(aggregator.issues()),
            JsonMode::CodeClimate => CodeClimateReporter::new().report(aggregator.issues()),
        }
    }

    /// Commit status for the run; a gate that was not computed counts as `NONE`.
    pub fn status(&self, quality_gate: Option<&QualityGate>) -> CommitStatus {
        let gate_status = quality_gate.map(|g| g.status).unwrap_or_default();
        commit_status(gate_status, self.settings.fail_mode)
    }

    /// One-line description accompanying the commit status.
    pub fn status_description(
        &self,
        aggregator: &IssueAggregator,
        quality_gate: Option<&QualityGate>,
    ) -> String {
        let issues = format!("Analysis reported {}", aggregator.summary().describe());
        match quality_gate.map(|g| g.status) {
            None | Some(QualityGateStatus::None) => issues,
            Some(status) => format!("Quality gate {}. {}", status, issues),
        }
    }
}
