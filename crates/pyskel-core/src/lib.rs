//! pyskel Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pyskel
//! Python project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pyskel-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GenerationService, Finalizer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ProjectRenderer, Lock...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     pyskel-adapters (Infrastructure)    │
//! │ (LocalFilesystem, PythonBlueprint, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (GenerationConfig, ValidationGate, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pyskel_core::prelude::*;
//!
//! let config = GenerationConfig::default().with(keys::PACKAGE_NAME, "pymx");
//!
//! let service = GenerationService::new(renderer, filesystem)
//!     .with_finalizer(Finalizer::new(resolver, lock_filesystem));
//! let report = service.generate(&config, "./output")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FinalizeOutcome, Finalizer, GenerationReport, GenerationService,
        ports::{Filesystem, LockResolver, LockRun, ProjectRenderer},
    };
    pub use crate::domain::{
        ConfigCheck, GenerationConfig, ProjectStructure, RenderContext, ValidationGate, keys,
        validate_line_length, validate_package_name,
    };
    pub use crate::error::{PyskelError, PyskelResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
