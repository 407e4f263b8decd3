//! Implementation of the `modelforge compile` command.
//!
//! Responsibility: load the model, compile it, and write the tree through
//! [`ExportService`]. No compilation logic lives here.

use serde::Serialize;
use tracing::{info, instrument};

use modelforge_adapters::LocalFilesystem;
use modelforge_core::prelude::*;

use crate::{
    cli::{CompileArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::load_and_compile;

#[derive(Debug, Serialize)]
struct CompileReport<'a> {
    system: &'a str,
    root: String,
    files: usize,
    directories: usize,
    bytes: usize,
    dry_run: bool,
}

/// Execute the `modelforge compile` command.
///
/// 1. Load the model (config defaults fill infrastructure gaps)
/// 2. Compile it
/// 3. `--dry-run`: list what would be written and stop
/// 4. Write the tree, rolling back on failure
#[instrument(skip_all, fields(model = %args.model.model.display()))]
pub fn execute(args: CompileArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (model, tree) = load_and_compile(&args.model.model, &config)?;

    let root = args
        .output
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());
    let force = args.force || config.export.force;

    let service = ExportService::new(Box::new(LocalFilesystem::new()));

    if args.dry_run {
        let plan = service.plan(&tree, &root)?;
        let bytes: usize = plan.files().map(|f| f.size()).sum();

        if output.format() == OutputFormat::Json {
            return Ok(output.json(&CompileReport {
                system: model.name(),
                root: root.display().to_string(),
                files: plan.files().count(),
                directories: plan.directories().count(),
                bytes,
                dry_run: true,
            })?);
        }

        output.info(&format!(
            "Dry run: would write {} files ({bytes} bytes) under {}",
            plan.files().count(),
            root.display(),
        ))?;
        for file in plan.files() {
            output.print(&format!("  {}", file.path.display()))?;
        }
        return Ok(());
    }

    output.header(&format!("Compiling '{}'...", model.name()))?;
    info!(root = %root.display(), force, "Writing output");

    let summary = service.write_tree(&tree, &root, force)?;

    if output.format() == OutputFormat::Json {
        return Ok(output.json(&CompileReport {
            system: model.name(),
            root: summary.root.display().to_string(),
            files: summary.files,
            directories: summary.directories,
            bytes: summary.bytes,
            dry_run: false,
        })?);
    }

    output.success(&format!(
        "Wrote {} files to {}",
        summary.files,
        summary.root.display()
    ))?;
    output.print("")?;
    output.print("Start with:")?;
    output.print(&format!(
        "  {}",
        summary.root.join("README.md").display()
    ))?;

    Ok(())
}
