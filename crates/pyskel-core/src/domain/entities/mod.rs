pub mod common;
pub mod project_structure;
pub mod render_context;

pub use common::Permissions;
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use render_context::RenderContext;
