//! Project renderers.

mod blueprint;
mod files;

pub use blueprint::PythonBlueprint;
