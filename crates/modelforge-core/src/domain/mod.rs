// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for ModelForge.
//!
//! Pure compilation logic: no I/O, no shared state, no async. Everything
//! that touches the outside world (model files, the output directory, the
//! bill-of-materials collaborator) goes through ports defined in the
//! application layer.
//!
//! ## Data flow
//!
//! ```text
//! SystemModel ──► naming (IdentifierTable) ──┬─► schema ─────┐
//!                                            ├─► route_tree ─┼─► artifacts ─► FileTree
//!                                            └─► diagram ◄───┘   (server files feed the
//!                                                                 component diagram)
//! ```
// Public API - what the world sees
pub mod artifacts;
pub mod diagram;
pub mod entities;
pub mod error;
pub mod naming;
pub mod route_tree;
pub mod schema;
pub mod type_map;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    file_tree::{FileTree, FileTreeItem},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    system_model::{
        ApiCall, ArtifactOverride, ComponentSpec, Endpoint, Entity, Field, Infrastructure, Page,
        ProjectInfo, Relationship, StateSpec, SystemModel,
    },
};

pub use error::{DomainError, ErrorCategory};
pub use naming::{EntityIdents, IdentifierTable};
pub use route_tree::{RouteNode, build_tree, materialize_files, merge_pages};
pub use value_objects::{FieldType, OnDelete, RelationKind};

pub use validation::DomainValidator;
