//! `modelforge routes`: the navigable route tree built from the merged
//! prototype pages and screens.

use modelforge_core::domain::{Page, RouteNode, build_tree, merge_pages};

use crate::{
    cli::{OutputFormat, RoutesArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::load_model;

pub fn execute(args: RoutesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let model = load_model(&args.model.model, &config)?;
    let pages = merge_pages(model.prototype_pages(), model.screens());
    let tree = build_tree(pages.iter().map(|p| (p.path.as_str(), p)));

    if output.format() == OutputFormat::Json {
        output.json(&tree)?;
    } else if pages.is_empty() {
        output.info("No pages defined")?;
    } else {
        output.data(&render(&tree))?;
    }
    Ok(())
}

/// One line per node: full path, page name if the node is a page, and a
/// `(dynamic)` marker for parameter segments.
pub fn render(tree: &RouteNode<&Page>) -> String {
    let mut lines: Vec<(String, String)> = Vec::new();
    let mut stack: Vec<String> = Vec::new();

    tree.walk(|depth, node| {
        if node.is_root() {
            if let Some(page) = node.metadata() {
                lines.push(("/".into(), page.display_name()));
            }
            return;
        }

        stack.truncate(depth - 1);
        stack.push(node.segment().to_string());
        let path = format!("/{}", stack.join("/"));

        let mut label = node
            .metadata()
            .map(|page| page.display_name())
            .unwrap_or_default();
        if node.is_dynamic() {
            if !label.is_empty() {
                label.push(' ');
            }
            label.push_str("(dynamic)");
        }
        lines.push((path, label));
    });

    let width = lines.iter().map(|(path, _)| path.len()).max().unwrap_or(0);
    lines
        .into_iter()
        .map(|(path, label)| {
            if label.is_empty() {
                format!("{path}\n")
            } else {
                format!("{path:<width$}  {label}\n")
            }
        })
        .collect()
}
