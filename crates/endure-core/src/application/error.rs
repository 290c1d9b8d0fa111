//! Application layer errors.
//!
//! These errors represent failures while walking, copying, reading or
//! writing, not invalid domain values. Those are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A file or directory the operation needs does not exist.
    #[error("No such file or directory: {path}")]
    NotFound { path: PathBuf },

    /// The event pattern could not be compiled.
    #[error("Invalid event pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Adapter state lock poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::NotFound { path } => vec![
                format!("Missing: {}", path.display()),
                "Run the command from the project root".into(),
                "Check templates.base_dir if a template directory is missing".into(),
            ],
            Self::InvalidPattern { .. } => vec![
                "Fix events.pattern in your configuration".into(),
                "The default is emitter\\.emit\\((eventTypes\\.[\\w_]+)".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidPattern { .. } => ErrorCategory::Configuration,
        }
    }
}
