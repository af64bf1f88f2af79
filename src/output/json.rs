//! JSON output formatter for organize runs.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "root": "/home/user/Downloads",
//!   "total_files": 5,
//!   "processed_files": 4,
//!   "exit_code": 0,
//!   "exit_code_name": "DS000",
//!   "summary": ["Moved 1 file(s) to /home/user/Downloads/txt"],
//!   "details": ["Moved a.txt to /home/user/Downloads/txt"]
//! }
//! ```

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::ExitCode;
use crate::organizer::{OrganizeStats, Report};

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Folder that was organized
    pub root: String,
    /// Regular files found directly in the folder, hidden ones included
    pub total_files: usize,
    /// Files that went through classification
    pub processed_files: usize,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "DS000")
    pub exit_code_name: String,
    /// One line per destination folder
    pub summary: Vec<String>,
    /// One line per skipped or moved file
    pub details: Vec<String>,
}

impl JsonOutput {
    /// Create a JSON output from a run's stats and report.
    ///
    /// # Example
    ///
    /// ```
    /// use dupesort::error::ExitCode;
    /// use dupesort::organizer::{OrganizeStats, Report};
    /// use dupesort::output::json::JsonOutput;
    /// use std::path::Path;
    ///
    /// let output = JsonOutput::new(
    ///     Path::new("/data"),
    ///     &OrganizeStats::default(),
    ///     &Report::default(),
    ///     ExitCode::NothingToDo,
    /// );
    /// assert_eq!(output.exit_code_name, "DS002");
    /// ```
    #[must_use]
    pub fn new(root: &Path, stats: &OrganizeStats, report: &Report, exit_code: ExitCode) -> Self {
        Self {
            root: root.to_string_lossy().into_owned(),
            total_files: stats.total_files,
            processed_files: stats.processed_files,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
            summary: report.summary.clone(),
            details: report.details.clone(),
        }
    }

    /// Serialize to compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), JsonOutputError> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}
