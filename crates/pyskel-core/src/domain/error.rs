// ============================================================================
// domain/error.rs - VALIDATION AND STRUCTURE ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::config::keys;
use crate::domain::validation::MIN_LINE_LENGTH;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input Validation Errors
    // ========================================================================
    #[error("'{name}' is not a valid Python module name")]
    InvalidName { name: String },

    #[error("line length {value} is below the minimum of {minimum}")]
    TooShort { value: String, minimum: i64 },

    #[error("line length '{raw}' is not an integer")]
    NotAnInteger { raw: String },

    #[error("'{name}' clashes with the generated {name}/ directory")]
    ReservedName { name: String },

    #[error("required configuration key missing: {key}")]
    MissingKey { key: String },

    // ========================================================================
    // Structure Errors
    // ========================================================================
    #[error("Invalid project structure: {0}")]
    InvalidStructure(String),

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name } => vec![
                format!("'{}' cannot be imported as a Python module", name),
                "Start with a letter or underscore".into(),
                "Use only letters, digits and underscores (no '-', '.' or spaces)".into(),
                "Use at least two characters, e.g. pymx, my_pkg, _internal".into(),
            ],
            Self::ReservedName { name } => vec![
                format!("Every generated project already has a top-level {}/ directory", name),
                format!("Pick another name, e.g. {}_pkg", name),
            ],
            Self::TooShort { minimum, .. } => vec![
                format!("flake8 and black are configured with a floor of {} columns", minimum),
                format!("Try: --line-length {}", minimum),
            ],
            Self::NotAnInteger { raw } => vec![
                format!("Could not read '{}' as a whole number", raw),
                format!("Try: --line-length {}", MIN_LINE_LENGTH),
            ],
            Self::MissingKey { key } => {
                let mut out = vec![format!("Provide a value for '{}'", key)];
                if key == keys::PACKAGE_NAME || key == keys::LINE_LENGTH {
                    out.push(format!("Try: --set {}=<value>", key));
                }
                out
            }
            _ => vec!["This is likely a bug in the project blueprint".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::TooShort { .. }
            | Self::NotAnInteger { .. }
            | Self::ReservedName { .. }
            | Self::MissingKey { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
