//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pyskel-adapters` crate provides implementations.

use std::path::Path;

use serde::Serialize;

use crate::domain::{GenerationConfig, ProjectStructure};
use crate::error::PyskelResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pyskel_adapters::filesystem::LocalFilesystem` (production)
/// - `pyskel_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PyskelResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> PyskelResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> PyskelResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> PyskelResult<()>;
}

/// Port for turning a validated config into a concrete project plan.
///
/// Implemented by:
/// - `pyskel_adapters::renderer::PythonBlueprint` (built-in Python project)
#[cfg_attr(test, mockall::automock)]
pub trait ProjectRenderer: Send + Sync {
    /// Render the project that `config` describes, rooted at `project_root`.
    fn render(
        &self,
        config: &GenerationConfig,
        project_root: &Path,
    ) -> PyskelResult<ProjectStructure>;
}

/// Outcome of one invocation of the external lock command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockRun {
    /// Human-readable command line, for diagnostics.
    pub command: String,
    /// Process exit code; `None` if the process could not be spawned or was
    /// killed by a signal.
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr.
    pub output: String,
}

impl LockRun {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Port for the external dependency manager's lock step.
///
/// Implemented by:
/// - `pyskel_adapters::lock::CommandLockResolver` (runs `poetry lock`)
#[cfg_attr(test, mockall::automock)]
pub trait LockResolver: Send + Sync {
    /// Resolve and lock dependencies inside `project_root`.
    ///
    /// A command that fails or cannot be started is reported through
    /// [`LockRun`], not as an error.
    fn resolve(&self, project_root: &Path) -> LockRun;

    /// File name of the artifact a successful run leaves in the root.
    fn lock_file_name(&self) -> String;
}
