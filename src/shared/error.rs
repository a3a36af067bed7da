use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - analysis completed (and no paths matched when gating is enabled)
    Success = 0,
    /// Matching paths were found while `--fail-on-paths` was given
    PathsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (data integrity, unresolved reference, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PathsDetected => write!(f, "Paths Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Which end of a path failed to resolve against the declared nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathEndpoint {
    Source,
    Destination,
}

impl fmt::Display for PathEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathEndpoint::Source => write!(f, "source"),
            PathEndpoint::Destination => write!(f, "destination"),
        }
    }
}

/// Application-specific errors for path analysis.
///
/// `DataIntegrity` and `UnresolvedReference` are raised by the analysis
/// engine itself; the remaining variants come from the adapters around it.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Data integrity error: {reason}\n\n💡 Hint: Every edge must start at a node declared in the \"nodes\" list, and node names must be unique")]
    DataIntegrity { reason: String },

    #[error("Unresolved {endpoint} node '{name}' while the {predicate} filter is active\n\n💡 Hint: Declare '{name}' in the \"nodes\" list or disable the {predicate} filter")]
    UnresolvedReference {
        name: String,
        endpoint: PathEndpoint,
        predicate: &'static str,
    },

    #[error("Data file not found: {path}\n\n💡 Hint: {suggestion}")]
    DataFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse data file: {path}\nDetails: {details}\n\n💡 Hint: The file must be a JSON object with \"nodes\" and \"edges\" arrays")]
    DataParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid data path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid data file with --data")]
    InvalidDataPath { path: PathBuf, reason: String },

    /// Validation error for input values and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl AnalysisError {
    /// Machine-readable code used by the HTTP adapter's error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::DataIntegrity { .. } => "DATA_INTEGRITY",
            AnalysisError::UnresolvedReference { .. } => "UNRESOLVED_REFERENCE",
            AnalysisError::Validation { .. } => "VALIDATION",
            AnalysisError::DataFileNotFound { .. }
            | AnalysisError::DataParseError { .. }
            | AnalysisError::FileReadError { .. }
            | AnalysisError::InvalidDataPath { .. }
            | AnalysisError::SecurityError { .. } => "DATA_SOURCE",
            AnalysisError::FileWriteError { .. } => "OUTPUT",
        }
    }

    /// Whether the error describes inconsistent analysis input rather than
    /// an infrastructure failure.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::DataIntegrity { .. }
                | AnalysisError::UnresolvedReference { .. }
                | AnalysisError::Validation { .. }
        )
    }
}
