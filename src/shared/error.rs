use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell a rejected request apart from
/// argument mistakes and genuine failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the screen was rendered or the request was submitted
    Success = 0,
    /// The access request was rejected before submission
    RequestRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unknown app, config error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to the exit code it should produce.
    ///
    /// Only the outermost [`CatalogError`] in the chain is considered.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<CatalogError>() {
            Some(CatalogError::Validation { .. }) | Some(CatalogError::NotRequestable { .. }) => {
                ExitCode::RequestRejected
            }
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RequestRejected => write!(f, "Request Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the app catalog.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hint next to each message.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("App not found: {id}\n\n💡 Hint: Run `app-catalog catalog` to list the available app ids")]
    AppNotFound { id: String },

    #[error("{app} cannot be requested: access is already {status}\n\n💡 Hint: Only apps with status Available accept access requests")]
    NotRequestable { app: String, status: String },

    #[error("Cannot {action} while the request is in the {from} step")]
    InvalidTransition { from: String, action: String },

    /// Validation error for user-supplied values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("The {screen} screen needs a selected app\n\n💡 Hint: Select an app from the catalog first")]
    SelectionMissing { screen: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config file: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        details: String,
        hint: String,
    },
}
