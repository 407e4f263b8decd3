//! Application layer errors.
//!
//! These errors represent failures at the edges (reading models, writing
//! output), not in compilation. Compilation itself cannot fail.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The model file could not be read or parsed.
    #[error("Failed to load model from {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    /// The model file extension is not one we can parse.
    #[error("Unsupported model format: {path}")]
    UnsupportedModelFormat { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Output already exists and overwriting was not requested.
    #[error("Output already exists at {path}")]
    OutputExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModelLoad { path, reason } => vec![
                format!("Could not read model: {}", path.display()),
                format!("Parser said: {reason}"),
                "Models are JSON (.json) or TOML (.toml) files exported by the wizard".into(),
            ],
            Self::UnsupportedModelFormat { path } => vec![
                format!("Unrecognised extension: {}", path.display()),
                "Rename the file to .json or .toml".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("Already exists: {}", path.display()),
                "Use --force to overwrite".into(),
                "Or choose a different output location".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Partially written output may remain at {}", path.display()),
                "Remove it manually before retrying".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelLoad { .. } | Self::UnsupportedModelFormat { .. } => {
                ErrorCategory::Validation
            }
            Self::OutputExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_exists_suggests_force() {
        let err = ApplicationError::OutputExists {
            path: PathBuf::from("out"),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn model_load_mentions_formats() {
        let err = ApplicationError::ModelLoad {
            path: PathBuf::from("m.json"),
            reason: "expected value at line 1".into(),
        };
        assert!(err.to_string().contains("m.json"));
        assert!(err.suggestions().iter().any(|s| s.contains(".toml")));
    }
}
