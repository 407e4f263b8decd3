//! ModelForge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers of the
//! model-to-artifact compiler: it turns an abstract system description
//! (entities, endpoints, pages, infrastructure choices) into a deterministic
//! tree of generated project files.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          modelforge-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (CompileService, ExportService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ModelSource, BomGenerator) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    modelforge-adapters (Infrastructure) │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  naming, type_map, schema, route_tree,  │
//! │  diagram, artifacts, FileTree           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use modelforge_core::prelude::*;
//!
//! struct NoBom;
//! impl BomGenerator for NoBom {
//!     fn generate(&self, _: &SystemModel) -> String {
//!         String::new()
//!     }
//! }
//!
//! let model: SystemModel = serde_json::from_str("{}").unwrap();
//! let tree = CompileService::new(Box::new(NoBom)).compile(&model);
//! assert!(tree.find("README.md").is_some());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CompileService, ExportService, WriteSummary,
        ports::{BomGenerator, Filesystem, ModelSource},
    };
    pub use crate::domain::{
        DomainValidator, Entity, Field, FieldType, FileTree, FileTreeItem, Page, RouteNode,
        SystemModel,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
