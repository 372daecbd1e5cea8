//! Application layer errors.
//!
//! These errors represent failures in orchestration, not validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The blueprint cannot express an accepted value.
    #[error("Project rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state could not be locked (poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Dependency lock resolution failed and the run is strict.
    #[error("Dependency lock failed in {path}: {reason}")]
    FinalizationFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::StoreLockError => vec![
                "An internal lock was poisoned by an earlier panic".into(),
                "Try again".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different package name or output directory".into(),
                format!("Remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::RenderingFailed { .. } => vec![
                "The value passed validation but cannot appear in the generated files".into(),
                "Try a conventional value, e.g. --line-length 88".into(),
            ],
            Self::FinalizationFailed { path, .. } => vec![
                "Ensure poetry is installed and on your PATH".into(),
                format!("Retry manually: cd {} && poetry lock", path.display()),
                "Drop --strict-lock to treat this as a warning".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. } => ErrorCategory::Validation,
            Self::FinalizationFailed { .. } => ErrorCategory::Internal,
        }
    }
}
