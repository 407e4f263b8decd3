//! Command handlers.
//!
//! Each handler translates parsed arguments into calls on the core services
//! and renders the result. Shared wiring lives here.

use std::path::Path;

use tracing::{debug, instrument, warn};

use modelforge_adapters::{FileModelSource, MarkdownBomGenerator};
use modelforge_core::prelude::*;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod compile;
pub mod completions;
pub mod config;
pub mod export;
pub mod init;
pub mod routes;
pub mod show;
pub mod tree;

/// Load a model file and fill its infrastructure gaps from config.
#[instrument(skip(config))]
pub fn load_model(path: &Path, config: &AppConfig) -> CliResult<SystemModel> {
    if !path.exists() {
        return Err(CliError::ModelNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut model = FileModelSource::new().load(path)?;
    config.defaults.apply_to(&mut model);
    debug!(system = %model.name(), "Model ready");
    Ok(model)
}

/// Compile with the production collaborators.
pub fn compile_model(model: &SystemModel) -> FileTree {
    CompileService::new(Box::new(MarkdownBomGenerator::new())).compile(model)
}

/// Load and compile in one step. Model warnings are logged, never fatal.
pub fn load_and_compile(path: &Path, config: &AppConfig) -> CliResult<(SystemModel, FileTree)> {
    let model = load_model(path, config)?;
    for warning in DomainValidator::model_warnings(&model) {
        warn!("{warning}");
    }
    let tree = compile_model(&model);
    Ok((model, tree))
}
