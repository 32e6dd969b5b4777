//! Command-line interface.
//!
//! This module defines the clap argument surface and the check command.
//! The flagless invocation prints the human-readable probe lines followed
//! by a final summary; `--json` swaps those for a machine-readable report.

use clap::Parser;

use crate::check::{self, CheckReport, CUDA_PATH_VAR};
use crate::error::Result;
use crate::output::{Output, OutputMode};

/// libdevice-check - CUDA libdevice availability diagnostic.
#[derive(Debug, Parser)]
#[command(name = "libdevice-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output the report as JSON
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Only print the final summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode implied by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Silent
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether libdevice is available.
    pub success: bool,

    /// Exit code to use (0 for available, 1 for not available).
    pub exit_code: i32,
}

impl CommandResult {
    fn from_report(report: &CheckReport) -> Self {
        Self {
            success: report.available,
            exit_code: i32::from(!report.available),
        }
    }
}

/// The check command implementation.
pub struct CheckCommand {
    json: bool,
}

impl CheckCommand {
    /// Create the command from parsed arguments.
    pub fn new(cli: &Cli) -> Self {
        Self { json: cli.json }
    }

    /// Run the availability check and render the outcome.
    pub fn execute(&self, out: &Output) -> Result<CommandResult> {
        let report = check::check();
        self.render(&report, out)?;
        Ok(CommandResult::from_report(&report))
    }

    fn render(&self, report: &CheckReport, out: &Output) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(report)?);
            return Ok(());
        }

        match (&report.base_path, &report.found) {
            (None, _) => out.status(&format!("{} environment variable not set", CUDA_PATH_VAR)),
            (Some(_), Some(path)) => {
                out.status(&format!("Found libdevice at: {}", path.display()));
            }
            (Some(_), None) => {
                out.status(&format!("libdevice not found in {} locations", CUDA_PATH_VAR));
            }
        }

        let summary = if report.available {
            "libdevice is available"
        } else {
            "libdevice is not available"
        };
        out.summary(summary);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parses_no_args() {
        let cli = Cli::parse_from(["libdevice-check"]);
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert!(!cli.debug);
        assert_eq!(cli.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn cli_parses_json_flag() {
        let cli = Cli::parse_from(["libdevice-check", "--json"]);
        assert!(cli.json);
        assert_eq!(cli.output_mode(), OutputMode::Silent);
    }

    #[test]
    fn cli_parses_quiet_flag() {
        let cli = Cli::parse_from(["libdevice-check", "--quiet"]);
        assert!(cli.quiet);
        assert_eq!(cli.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn cli_rejects_json_with_quiet() {
        let parsed = Cli::try_parse_from(["libdevice-check", "--json", "--quiet"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn command_result_success_for_available() {
        let report = CheckReport {
            base_path: Some(PathBuf::from("/usr/local/cuda")),
            candidates: check::candidate_paths(&PathBuf::from("/usr/local/cuda")),
            found: Some(PathBuf::from("/usr/local/cuda/lib64/libdevice.10.bc")),
            available: true,
        };
        let result = CommandResult::from_report(&report);
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure_for_unavailable() {
        let report = CheckReport {
            base_path: None,
            candidates: Vec::new(),
            found: None,
            available: false,
        };
        let result = CommandResult::from_report(&report);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }
}
