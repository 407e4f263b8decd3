//! Application layer for ModelForge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CompileService, ExportService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation logic itself. All of that lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CompileService, ExportService, WriteSummary};

// Re-export port traits (for adapter implementation)
pub use ports::{BomGenerator, Filesystem, ModelSource};

pub use error::ApplicationError;
