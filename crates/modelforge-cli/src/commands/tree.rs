//! `modelforge tree`: the reader view of a compiled model.

use owo_colors::OwoColorize;

use modelforge_core::prelude::*;

use crate::{
    cli::{OutputFormat, TreeArgs, TreeFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::load_and_compile;

pub fn execute(args: TreeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (_, tree) = load_and_compile(&args.model.model, &config)?;

    let format = match output.format() {
        OutputFormat::Json => TreeFormat::Json,
        _ => args.format.unwrap_or(config.output.tree_format),
    };

    match format {
        TreeFormat::Json => output.json(&tree)?,
        TreeFormat::Tree => output.data(&render(&tree, output.supports_color()))?,
    }
    Ok(())
}

/// Box-drawing rendering; folders end in `/`.
pub fn render(tree: &FileTree, color: bool) -> String {
    let mut out = String::new();
    let items = tree.items();
    for (i, item) in items.iter().enumerate() {
        render_item(item, "", i + 1 == items.len(), color, &mut out);
    }
    out
}

fn render_item(item: &FileTreeItem, prefix: &str, last: bool, color: bool, out: &mut String) {
    let branch = if last { "└── " } else { "├── " };
    let label = if item.is_folder() {
        let name = format!("{}/", item.name());
        if color {
            name.blue().bold().to_string()
        } else {
            name
        }
    } else {
        item.name().to_string()
    };

    out.push_str(prefix);
    out.push_str(branch);
    out.push_str(&label);
    out.push('\n');

    let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
    let children = item.children();
    for (i, child) in children.iter().enumerate() {
        render_item(child, &child_prefix, i + 1 == children.len(), color, out);
    }
}
