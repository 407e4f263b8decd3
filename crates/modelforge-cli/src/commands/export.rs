//! `modelforge export`: write one artifact to a chosen file.

use tracing::instrument;

use modelforge_adapters::LocalFilesystem;
use modelforge_core::prelude::*;

use crate::{cli::ExportArgs, config::AppConfig, error::CliResult, output::OutputManager};

use super::load_and_compile;

#[instrument(skip_all, fields(artifact = %args.artifact))]
pub fn execute(args: ExportArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (_, tree) = load_and_compile(&args.model.model, &config)?;

    let service = ExportService::new(Box::new(LocalFilesystem::new()));
    let bytes = service.export_artifact(
        &tree,
        args.artifact.trim_matches('/'),
        &args.to,
        args.force,
    )?;

    output.success(&format!(
        "Exported {} to {} ({bytes} bytes)",
        args.artifact,
        args.to.display()
    ))?;
    Ok(())
}
