//! Core domain layer for pyskel.
//!
//! Pure logic: the generation config, the validation gate, and the
//! rendered project structure. Filesystem access, rendering and the lock
//! step are reached through ports defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, process, or network calls
//! - **Pure validation**: the gate is a function of its config only

pub mod config;
pub mod entities;
pub mod error;
pub mod validation;

pub use config::{GenerationConfig, keys};

pub use entities::{
    DirectoryToCreate, FileToWrite, FsEntry, Permissions, ProjectStructure, RenderContext,
};

pub use error::{DomainError, ErrorCategory};

pub use validation::{
    ConfigCheck, DomainValidator, LineLengthCheck, MIN_LINE_LENGTH, PackageNameCheck,
    RESERVED_PACKAGE_NAMES, ReservedNameCheck, ValidationGate, canonical_line_length,
    validate_line_length, validate_package_name,
};
