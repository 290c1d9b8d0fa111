use thiserror::Error;

use crate::error::ErrorCategory;

/// Domain error type.
///
/// Raised when a value object is built from input that can never work,
/// before any filesystem access happens.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Placeholder token cannot be empty")]
    EmptyPlaceholder,

    #[error("Source file extension cannot be empty")]
    EmptyExtension,

    #[error("Invalid label inference mode '{0}' (expected 'nearest' or 'top-level')")]
    InvalidLabelInference(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyPlaceholder => vec![
                "Set scaffold.placeholder to a marker such as {module-name}".into(),
            ],
            Self::EmptyExtension => vec!["Set events.source_extension, e.g. \".js\"".into()],
            Self::InvalidLabelInference(_) => vec![
                "Use events.label_inference = \"nearest\" or \"top-level\"".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
