//! Application layer for pyskel.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService, Finalizer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{FinalizeOutcome, Finalizer, GenerationReport, GenerationService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, LockResolver, LockRun, ProjectRenderer};

pub use error::ApplicationError;
