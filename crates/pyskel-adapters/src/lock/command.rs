//! Runs the dependency manager's lock command as a child process.

use std::path::Path;
use std::process::{Command, Stdio};

use pyskel_core::application::ports::{LockResolver, LockRun};
use tracing::{debug, instrument};

/// Command run when none is configured.
pub const DEFAULT_LOCK_COMMAND: [&str; 2] = ["poetry", "lock"];

/// Artifact `poetry lock` leaves in the project root.
pub const POETRY_LOCK_FILE: &str = "poetry.lock";

/// [`LockResolver`] backed by an external program.
///
/// The program runs with the project root as its working directory and
/// no stdin. Its stdout and stderr are captured together.
#[derive(Debug, Clone)]
pub struct CommandLockResolver {
    program: String,
    args: Vec<String>,
    lock_file: String,
}

impl CommandLockResolver {
    /// `poetry lock`, producing `poetry.lock`.
    pub fn poetry() -> Self {
        Self {
            program: DEFAULT_LOCK_COMMAND[0].to_string(),
            args: DEFAULT_LOCK_COMMAND[1..].iter().map(|s| s.to_string()).collect(),
            lock_file: POETRY_LOCK_FILE.to_string(),
        }
    }

    /// Build from an argv-style command line. An empty command falls back
    /// to `poetry lock`.
    pub fn from_command<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parts = command.into_iter().map(Into::into);
        match parts.next() {
            Some(program) if !program.trim().is_empty() => Self {
                program,
                args: parts.collect(),
                lock_file: POETRY_LOCK_FILE.to_string(),
            },
            _ => Self::poetry(),
        }
    }

    /// Override the artifact name checked after a successful run.
    pub fn with_lock_file(mut self, name: impl Into<String>) -> Self {
        self.lock_file = name.into();
        self
    }

    /// The command line as a single display string.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for CommandLockResolver {
    fn default() -> Self {
        Self::poetry()
    }
}

impl LockResolver for CommandLockResolver {
    #[instrument(skip(self), fields(command = %self.command_line()))]
    fn resolve(&self, project_root: &Path) -> LockRun {
        let command = self.command_line();

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_root)
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(out) => {
                let mut combined = String::from_utf8_lossy(&out.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&out.stderr));
                debug!(status = ?out.status.code(), "lock command finished");
                LockRun {
                    command,
                    exit_code: out.status.code(),
                    output: combined,
                }
            }
            Err(e) => {
                debug!(error = %e, "lock command could not be started");
                LockRun {
                    command,
                    exit_code: None,
                    output: format!("Command error: {e}"),
                }
            }
        }
    }

    fn lock_file_name(&self) -> String {
        self.lock_file.clone()
    }
}
