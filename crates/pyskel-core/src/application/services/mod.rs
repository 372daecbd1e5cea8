//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "lock dependencies".

pub mod finalizer;
pub mod generation_service;

pub use finalizer::{FinalizeOutcome, Finalizer};
pub use generation_service::{GenerationReport, GenerationService};
