//! pyskel adapters - infrastructure implementations of the core ports.
//!
//! - [`filesystem`]: local and in-memory [`Filesystem`](pyskel_core::application::ports::Filesystem)
//! - [`renderer`]: the built-in [`PythonBlueprint`]
//! - [`lock`]: [`CommandLockResolver`] running `poetry lock`
//! - [`answers`]: TOML answers files

pub mod answers;
pub mod filesystem;
pub mod lock;
pub mod renderer;

pub use answers::{load_answers, parse_answers};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use lock::CommandLockResolver;
pub use renderer::PythonBlueprint;
