//! Unified error handling for Endure Core.
//!
//! Wraps domain and application errors in one type that carries a display
//! category and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Endure Core operations.
#[derive(Debug, Error, Clone)]
pub enum EndureError {
    /// Errors from the domain layer (invalid values).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (walks, reads, writes).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl EndureError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the error means a required file or directory is absent.
    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type EndureResult<T> = Result<T, EndureError>;
