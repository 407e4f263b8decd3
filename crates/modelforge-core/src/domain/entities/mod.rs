pub mod file_tree;
pub mod project_structure;
pub mod system_model;

pub use crate::domain::DomainError;
pub use file_tree::{FileTree, FileTreeItem};
pub use project_structure::ProjectStructure;
pub use system_model::SystemModel;
