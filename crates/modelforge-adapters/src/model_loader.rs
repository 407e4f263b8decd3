//! File-based model loader.
//!
//! Reads a [`SystemModel`] exported by the wizard. The format is chosen by
//! file extension:
//!
//! | Extension | Parser |
//! |-----------|--------|
//! | `.json`   | `serde_json` |
//! | `.toml`   | `toml` |
//!
//! Keys are the wizard's camelCase names in both formats. Unknown keys are
//! ignored, and any collection may be omitted.
//!
//! # `model.toml` example
//!
//! ```toml
//! [project]
//! name = "Corner Shop"
//!
//! [[entities]]
//! id = "e1"
//! name = "Order"
//! timestamps = true
//!
//! [[entities.fields]]
//! name = "totalAmount"
//! type = "Float"
//! required = true
//! ```

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::{debug, instrument};

use modelforge_core::{
    application::{ApplicationError, ports::ModelSource},
    domain::SystemModel,
    error::ForgeResult,
};

/// Serialization format of a model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Json,
    Toml,
}

impl ModelFormat {
    /// Format implied by a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
    }
}

impl FromStr for ModelFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(format!("unknown model format '{other}'")),
        }
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Toml => "toml",
        })
    }
}

/// Parse model text in the given format.
///
/// `origin` is only used in error messages.
pub fn parse_model(text: &str, format: ModelFormat, origin: &Path) -> ForgeResult<SystemModel> {
    let parsed = match format {
        ModelFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        ModelFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
    };

    parsed.map_err(|reason| {
        ApplicationError::ModelLoad {
            path: origin.to_path_buf(),
            reason,
        }
        .into()
    })
}

/// [`ModelSource`] reading JSON or TOML files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileModelSource;

impl FileModelSource {
    pub fn new() -> Self {
        Self
    }
}

impl ModelSource for FileModelSource {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> ForgeResult<SystemModel> {
        let format = ModelFormat::from_path(path).ok_or_else(|| {
            ApplicationError::UnsupportedModelFormat {
                path: PathBuf::from(path),
            }
        })?;

        let text = fs::read_to_string(path).map_err(|e| ApplicationError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let model = parse_model(&text, format, path)?;
        debug!(
            %format,
            entities = model.entities().len(),
            screens = model.screens().len(),
            prototype_pages = model.prototype_pages().len(),
            "Model loaded"
        );
        Ok(model)
    }
}
