//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `pyskel-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ProjectRenderer`: Blueprint rendering
//!   - `LockResolver`: Dependency lock step
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, LockResolver, LockRun, ProjectRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockLockResolver, MockProjectRenderer};
