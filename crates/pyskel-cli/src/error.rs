//! Errors the `pyskel` binary reports, and how they reach the terminal.
//!
//! Every failure ends in one [`Exit`] status. Rejected generation values
//! exit 2 and promise that nothing was written; a strict lock failure exits
//! 1 but leaves the generated files in place, and the report says so.

use std::error::Error as _;
use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use pyskel_core::{
    application::ApplicationError,
    error::{ErrorCategory, PyskelError},
};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Validation, generation or lock failure from the core.
    #[error("{0}")]
    Core(#[from] PyskelError),

    /// `pyskel finalize` was pointed at something that is not a directory.
    #[error("Project directory not found: {}", .path.display())]
    ProjectDirNotFound { path: PathBuf },

    /// Unknown key, unreadable or unwritable configuration.
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// The terminal went away or refused input mid-prompt.
    #[error("prompt failed: {message}")]
    Prompt { message: String },
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        Self::Io {
            context: "cannot write output".into(),
            source,
        }
    }
}

/// Wrap an I/O failure with what pyskel was doing at the time.
pub fn io_error(context: impl Into<String>) -> impl FnOnce(io::Error) -> CliError {
    let context = context.into();
    move |source| CliError::Io { context, source }
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    Internal = 1,
    Rejected = 2,
    NotFound = 3,
    Config = 4,
}

impl CliError {
    pub fn exit(&self) -> Exit {
        match self {
            Self::Core(e) => match e.category() {
                ErrorCategory::Validation => Exit::Rejected,
                ErrorCategory::Configuration => Exit::Config,
                ErrorCategory::Internal => Exit::Internal,
            },
            Self::ProjectDirNotFound { .. } => Exit::NotFound,
            Self::Config { .. } => Exit::Config,
            Self::Io { .. } => Exit::Internal,
            Self::Prompt { .. } => Exit::Rejected,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit() as u8
    }

    /// What happened to the filesystem, when the operator cannot tell from
    /// the message alone.
    fn aftermath(&self) -> Option<&'static str> {
        match self {
            Self::Core(PyskelError::Application(ApplicationError::FinalizationFailed {
                ..
            })) => Some("The generated files were kept; only the lock step failed."),
            Self::Core(e) if e.is_validation() => Some("Nothing was written."),
            _ => None,
        }
    }

    fn hints(&self) -> Vec<String> {
        match self {
            Self::Core(e) => e.suggestions(),
            Self::ProjectDirNotFound { path } => vec![
                format!("No directory at '{}'", path.display()),
                "Pass the root of a generated project, e.g. pyskel finalize ./pymx".into(),
            ],
            Self::Config { .. } => vec![
                "Show the active file with: pyskel config path".into(),
                "Recreate the defaults with: pyskel init --force".into(),
            ],
            Self::Io { .. } => vec!["Check permissions on the paths involved".into()],
            Self::Prompt { .. } => vec![
                "Run with --no-input to skip prompts".into(),
                "Supply values with --answers FILE or --set KEY=VALUE".into(),
            ],
        }
    }

    /// Full message for stderr: headline, aftermath, causes with
    /// `verbose`, then hints.
    pub fn report(&self, color: bool, verbose: bool) -> String {
        let headline = match self.exit() {
            Exit::Rejected => "rejected:",
            Exit::NotFound => "not found:",
            Exit::Config => "config error:",
            Exit::Internal => "error:",
        };

        let mut out = String::new();
        if color {
            let _ = writeln!(out, "{} {}", headline.red().bold(), self);
        } else {
            let _ = writeln!(out, "{headline} {self}");
        }

        if let Some(note) = self.aftermath() {
            let _ = writeln!(out, "  {note}");
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(out, "  caused by: {err}");
                cause = err.source();
            }
        }

        for hint in self.hints() {
            if color {
                let _ = writeln!(out, "  {} {hint}", "hint:".yellow());
            } else {
                let _ = writeln!(out, "  hint: {hint}");
            }
        }

        out
    }

    /// Rejected input is the operator's business, so it logs at WARN.
    pub fn log(&self) {
        match self.exit() {
            Exit::Rejected | Exit::NotFound => {
                tracing::warn!(exit = self.exit_code(), error = %self, "command rejected")
            }
            Exit::Config | Exit::Internal => {
                tracing::error!(exit = self.exit_code(), error = %self, "command failed")
            }
        }
    }
}
