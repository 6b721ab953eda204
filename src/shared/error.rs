use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A collector that rejects the record is still a successful run; only
/// failures the build has to know about map to a non-zero code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report sent (whatever the HTTP status) or settings saved
    Success = 0,
    /// The wrapped build command failed (`run` subcommand)
    BuildFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (transport failure, unreadable config, file I/O error, etc.)
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
            ExitCode::BuildFailed => write!(f, "Build Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for inventory reporting.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Job configuration not found: {path}\n\n💡 Hint: {suggestion}")]
    JobConfigNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse job configuration: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML using the inventory field names (commonName, primaryOwner, ...)")]
    JobConfigParseError { path: PathBuf, details: String },

    #[error("Failed to read collector settings: {path}\nDetails: {details}\n\n💡 Hint: Run `inventory-reporter configure` to recreate the settings file")]
    SettingsReadError { path: PathBuf, details: String },

    #[error("Failed to write collector settings: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    SettingsWriteError { path: PathBuf, details: String },

    /// Presence checks performed while binding an inventory item
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Connection, write or read failure while talking to the collector
    #[error("Failed to reach inventory collector at {url}\nDetails: {details}\n\n💡 Hint: Check the collector URL and that the service is reachable")]
    Transport { url: String, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
