use crate::gate::{FailMode, QualityGateStatus};
use crate::reporter::JsonMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gitlab-report",
    version,
    about = "Aggregate analysis issues into GitLab SAST / Code Quality reports",
    long_about = "gitlab-report reads analysis issues from a JSON file, renders the selected GitLab report format and exits non-zero when the quality gate fails the build."
)]
pub struct Cli {
    /// JSON file with the issues to aggregate
    #[arg(required = true)]
    pub input: PathBuf,

    /// JSON report format (overrides config)
    #[arg(short = 'm', long, value_enum)]
    pub json_mode: Option<JsonMode>,

    /// Which quality gate verdicts fail the build (overrides config)
    #[arg(short, long, value_enum)]
    pub fail_mode: Option<FailMode>,

    /// Quality gate verdict of the analysis; omitted when no gate was computed
    #[arg(short = 'g', long, value_enum)]
    pub quality_gate: Option<QualityGateStatus>,

    /// Analysis server base URL used to build rule links (overrides config)
    #[arg(long)]
    pub server_url: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (default: search the project root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project root searched for `.gitlab-report.*`
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Do not print the summary to stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
