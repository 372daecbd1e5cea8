//! Post-generation finalizer.
//!
//! Runs the dependency manager's lock step once inside a freshly generated
//! project. A failed lock is a warning unless the finalizer is strict.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, LockResolver, LockRun},
    },
    error::PyskelResult,
};

/// What happened during finalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FinalizeOutcome {
    /// The lock step succeeded and left its artifact behind.
    Locked { lock_file: PathBuf },
    /// The lock step failed; generation itself still stands.
    Failed { reason: String, run: LockRun },
    /// Finalization was disabled for this run.
    Skipped,
}

impl FinalizeOutcome {
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked { .. })
    }

    /// Warning text for a failed lock, if any.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Failed { reason, .. } => Some(format!("dependency lock failed: {reason}")),
            _ => None,
        }
    }
}

/// Runs a [`LockResolver`] against a project root and checks its artifact.
pub struct Finalizer {
    resolver: Box<dyn LockResolver>,
    filesystem: Box<dyn Filesystem>,
    strict: bool,
}

impl Finalizer {
    pub fn new(resolver: Box<dyn LockResolver>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            resolver,
            filesystem,
            strict: false,
        }
    }

    /// Treat a failed lock as an error instead of a warning.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Run the lock step and report what happened. Never fails.
    #[instrument(skip_all, fields(root = %project_root.display()))]
    pub fn finalize(&self, project_root: &Path) -> FinalizeOutcome {
        let run = self.resolver.resolve(project_root);
        let lock_file = project_root.join(self.resolver.lock_file_name());

        if !run.success() {
            let reason = match run.exit_code {
                Some(code) => format!("`{}` exited with status {}", run.command, code),
                None => format!("`{}` did not run to completion", run.command),
            };
            warn!(command = %run.command, exit_code = ?run.exit_code, "lock step failed");
            return FinalizeOutcome::Failed { reason, run };
        }

        if !self.filesystem.exists(&lock_file) {
            let reason = format!(
                "`{}` succeeded but {} was not created",
                run.command,
                lock_file.display()
            );
            warn!(lock_file = %lock_file.display(), "lock artifact missing");
            return FinalizeOutcome::Failed { reason, run };
        }

        info!(lock_file = %lock_file.display(), "dependencies locked");
        FinalizeOutcome::Locked { lock_file }
    }

    /// [`finalize`](Self::finalize), then apply the strictness policy.
    pub fn run(&self, project_root: &Path) -> PyskelResult<FinalizeOutcome> {
        let outcome = self.finalize(project_root);

        match (&outcome, self.strict) {
            (FinalizeOutcome::Failed { reason, .. }, true) => {
                Err(ApplicationError::FinalizationFailed {
                    path: project_root.to_path_buf(),
                    reason: reason.clone(),
                }
                .into())
            }
            _ => Ok(outcome),
        }
    }
}
