// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Compilation itself never fails; these errors come from the edges of the
/// domain (parsing wizard tags, lowering a generated tree for export).
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid artifact path: {path}")]
    InvalidArtifactPath { path: String },

    #[error("Duplicate path in generated tree: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Generated tree is empty")]
    EmptyStructure,

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("No artifact at '{path}'")]
    ArtifactNotFound { path: String },

    #[error("'{path}' is a folder, not a file")]
    NotAFile { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModel(msg) => vec![
                "Check the model file produced by the wizard".into(),
                format!("Details: {msg}"),
            ],
            Self::ArtifactNotFound { path } => vec![
                format!("Nothing was generated at '{path}'"),
                "Try: modelforge tree <MODEL> to list generated artifacts".into(),
            ],
            Self::NotAFile { path } => vec![
                format!("'{path}' is a folder"),
                "Pick one of the files listed by: modelforge tree <MODEL>".into(),
            ],
            Self::InvalidArtifactPath { path } | Self::DuplicatePath { path } => vec![
                format!("Generated path '{path}' cannot be written safely"),
                "Rename the page, component or backend file that produces it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModel(_)
            | Self::InvalidArtifactPath { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::ArtifactNotFound { .. } | Self::NotAFile { .. } => ErrorCategory::NotFound,
            Self::EmptyStructure => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
