//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the dupesort application.
///
/// - 0: Success (folder organized, at least one file processed)
/// - 1: General error (unexpected failure)
/// - 2: Nothing to do (no eligible file in the folder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: The folder was organized.
    Success = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
    /// Nothing to do: No non-hidden file sat directly in the folder.
    NothingToDo = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DS000",
            Self::GeneralError => "DS001",
            Self::NothingToDo => "DS002",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DS001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message, including its causes
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{:#}", err),
        }
    }
}
