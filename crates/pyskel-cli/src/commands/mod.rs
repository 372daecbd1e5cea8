//! Subcommand handlers. Each one translates arguments into core calls and
//! renders the result; no business logic lives here.

pub mod completions;
pub mod config;
pub mod finalize;
pub mod generate;
pub mod init;
pub mod validate;
mod values;

use pyskel_adapters::{CommandLockResolver, LocalFilesystem};
use pyskel_core::application::Finalizer;

use crate::config::AppConfig;

/// Finalizer running the configured lock command.
fn build_finalizer(config: &AppConfig, strict: bool) -> Finalizer {
    let resolver = CommandLockResolver::from_command(config.finalize.command.iter().cloned());
    Finalizer::new(Box::new(resolver), Box::new(LocalFilesystem::new())).strict(strict)
}
