//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "compile a model" or "write the output".

pub mod compile_service;
pub mod export_service;

pub use compile_service::CompileService;
pub use export_service::{ExportService, WriteSummary};
