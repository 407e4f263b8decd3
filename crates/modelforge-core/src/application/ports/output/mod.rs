//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `modelforge-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::SystemModel;
use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modelforge_adapters::filesystem::LocalFilesystem` (production)
/// - `modelforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> ForgeResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}

/// Port for reading a [`SystemModel`] from storage.
///
/// Implemented by:
/// - `modelforge_adapters::model_loader::FileModelSource` (JSON / TOML files)
pub trait ModelSource: Send + Sync {
    fn load(&self, path: &Path) -> ForgeResult<SystemModel>;
}

/// Port for the bill-of-materials collaborator.
///
/// Infallible: a generator that has nothing to say returns a short
/// placeholder document rather than an error.
///
/// Implemented by:
/// - `modelforge_adapters::bom::MarkdownBomGenerator`
#[cfg_attr(test, mockall::automock)]
pub trait BomGenerator: Send + Sync {
    /// Markdown summary of the technologies implied by the model.
    fn generate(&self, model: &SystemModel) -> String;
}
