//! Dependency lock adapters.

mod command;

pub use command::{CommandLockResolver, DEFAULT_LOCK_COMMAND, POETRY_LOCK_FILE};
