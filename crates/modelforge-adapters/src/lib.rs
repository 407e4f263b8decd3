//! Infrastructure adapters for ModelForge.
//!
//! This crate implements the ports defined in `modelforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod bom;
pub mod filesystem;
pub mod model_loader;

// Re-export commonly used adapters
pub use bom::MarkdownBomGenerator;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use model_loader::{FileModelSource, ModelFormat};
