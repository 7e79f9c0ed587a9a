//! Report handler: aggregate, render, decide status.

use crate::aggregator::IssueAggregator;
use crate::cli::Cli;
use crate::config::{Config, EffectiveConfig};
use crate::error::{IoOperation, ReportError, Result};
use crate::gate::CommitStatus;
use crate::input::load_issues;
use crate::output::{ReportRenderer, TerminalReporter};
use std::fs;
use std::process::ExitCode;
use tracing::{debug, error, info};

use super::HandlerResult;

/// What a report run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub report: String,
    pub status: CommitStatus,
    pub description: String,
    pub summary: String,
}

/// Load configuration and issues, then render the report.
pub fn run_report(cli: &Cli) -> Result<ReportOutcome> {
    let config = match cli.config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::load(Some(&cli.project_root)),
    };
    let effective = EffectiveConfig::from_cli_and_config(cli, &config)?;
    debug!(
        json_mode = %effective.settings.json_mode,
        fail_mode = %effective.settings.fail_mode,
        "Effective configuration"
    );

    let mut aggregator = IssueAggregator::new();
    for record in load_issues(&cli.input)? {
        aggregator.process(record.into_report_issue(&effective.server_url));
    }

    let renderer = ReportRenderer::new(effective.settings);
    let gate = effective.quality_gate.as_ref();
    let outcome = ReportOutcome {
        report: renderer.render_configured(&aggregator),
        status: renderer.status(gate),
        description: renderer.status_description(&aggregator, gate),
        summary: TerminalReporter::new(cli.verbose).report(&aggregator),
    };

    info!(
        issues = aggregator.issue_count(),
        not_reported = aggregator.not_reported_issue_count(),
        status = %outcome.status,
        "Report built"
    );
    Ok(outcome)
}

/// Handle a report run and map the outcome to a process exit code.
pub fn handle_report(cli: &Cli) -> ExitCode {
    report_result(cli).into()
}

fn report_result(cli: &Cli) -> HandlerResult {
    let outcome = match run_report(cli) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "Report failed");
            eprintln!("{}", e);
            return HandlerResult::Error(2);
        }
    };

    if let Err(e) = write_report(cli, &outcome.report) {
        error!(error = %e, "Failed to write report");
        eprintln!("{}", e);
        return HandlerResult::Error(2);
    }

    if !cli.quiet {
        eprint!("{}", outcome.summary);
        eprintln!("{}: {}", outcome.status, outcome.description);
    }

    match outcome.status {
        CommitStatus::Success => HandlerResult::Success,
        CommitStatus::Failed => HandlerResult::Error(1),
    }
}

fn write_report(cli: &Cli, report: &str) -> Result<()> {
    match cli.output {
        Some(ref path) => fs::write(path, report).map_err(|e| ReportError::Io {
            path: path.clone(),
            operation: IoOperation::Write,
            source: e,
        }),
        None => {
            println!("{}", report);
            Ok(())
        }
    }
}
