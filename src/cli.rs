//! Command-line interface definitions for dupesort.
//!
//! # Example
//!
//! ```bash
//! # Organize a folder, printing a colored report
//! dupesort ~/Downloads
//!
//! # Ask for the folder interactively
//! dupesort
//!
//! # JSON report for scripting
//! dupesort ~/Downloads --output json
//!
//! # Verbose mode for debugging
//! dupesort -v ~/Downloads
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sort a folder's files into per-extension folders and set duplicates aside.
///
/// Every file directly inside PATH is moved into a sub-folder named after its
/// extension. Files whose content matches a file seen earlier in the run go to
/// `Duplicates` instead. Hidden files, files without an extension and
/// sub-folders are left alone.
///
/// Exit codes: 0 when files were processed or the prompt was quit, 1 on
/// error, 2 when there was nothing to process. Re-running on a folder that is
/// already organized exits with 2; that run is still a success.
#[derive(Debug, Parser)]
#[command(name = "dupesort")]
#[command(author, version, about)]
pub struct Cli {
    /// Folder to organize (prompted for when omitted, `~` is expanded)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print only the summary, not one line per file
    #[arg(long)]
    pub no_details: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Configuration file to use instead of the platform default
    #[arg(long, value_name = "FILE", env = "DUPESORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub write_config: bool,

    /// Print errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Output format for the run report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored summary and details for the terminal
    #[default]
    Text,
    /// JSON for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
