//! `modelforge show`: print one artifact, e.g. to pipe a diagram into a
//! renderer.

use tracing::debug;

use modelforge_core::error::ForgeError;

use crate::{cli::ShowArgs, config::AppConfig, error::CliResult, output::OutputManager};

use super::load_and_compile;

pub fn execute(args: ShowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (_, tree) = load_and_compile(&args.model.model, &config)?;
    let content = tree
        .file_content(args.artifact.trim_matches('/'))
        .map_err(ForgeError::from)?;
    debug!(artifact = %args.artifact, bytes = content.len(), "Showing artifact");
    output.data(content)?;
    Ok(())
}
