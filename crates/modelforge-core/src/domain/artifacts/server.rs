//! `server/`: precomputed backend files, or a single placeholder.

use tracing::warn;

use super::{CompileContext, file, ts_string};
use crate::domain::entities::file_tree::FileTreeItem;

/// Placeholder emitted when no backend files were precomputed.
pub const PLACEHOLDER_FILE: &str = "index.ts";

pub fn server(ctx: &CompileContext<'_>) -> FileTreeItem {
    let backend = ctx.model.overrides().and_then(|o| o.backend_files());

    let children = match backend {
        Some(files) => flatten(files.iter().map(|(path, code)| (path.as_str(), code.as_str()))),
        None => vec![file(PLACEHOLDER_FILE, placeholder(ctx))],
    };

    FileTreeItem::folder("server", children)
}

/// Last non-empty path segment (`src/users/user.service.ts` →
/// `user.service.ts`).
pub fn base_name(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\']).find(|s| !s.is_empty())
}

/// Flatten `(path, code)` pairs to base file names.
///
/// Directory structure is discarded. When two paths share a base name the
/// later one replaces the earlier one in place and a warning is logged.
pub fn flatten<'a, I>(files: I) -> Vec<FileTreeItem>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out: Vec<(&'a str, FileTreeItem)> = Vec::new();

    for (path, code) in files {
        let Some(name) = base_name(path) else {
            warn!(path, "Skipping backend file without a file name");
            continue;
        };

        let item = file(name, code);
        match out.iter_mut().find(|(_, existing)| existing.name() == name) {
            Some((previous, slot)) => {
                warn!(
                    file = name,
                    replaced = *previous,
                    by = path,
                    "Backend file names collide after flattening"
                );
                *previous = path;
                *slot = item;
            }
            None => out.push((path, item)),
        }
    }

    out.into_iter().map(|(_, item)| item).collect()
}

fn placeholder(ctx: &CompileContext<'_>) -> String {
    let name = ctx.model.name();
    let mut out = format!("// Server entry point for {name}.\n\n");

    let tables: Vec<&str> = ctx.idents.entries().iter().map(|i| i.table.as_str()).collect();
    out.push_str(&format!(
        "export const resources = [{}];\n\n",
        tables
            .iter()
            .map(|t| ts_string(t))
            .collect::<Vec<_>>()
            .join(", ")
    ));

    out.push_str(&format!(
        "export function start(port = 3000): void {{\n  console.log(`{} listening on ${{port}}`);\n}}\n",
        name.replace('`', "'")
    ));
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::entities::system_model::{ArtifactOverride, Entity, SystemModel};

    #[test]
    fn base_name_drops_directories() {
        assert_eq!(base_name("src/users/user.service.ts"), Some("user.service.ts"));
        assert_eq!(base_name("index.ts"), Some("index.ts"));
        assert_eq!(base_name("a\\b.ts"), Some("b.ts"));
        assert_eq!(base_name("dir/"), Some("dir"));
        assert_eq!(base_name("//"), None);
    }

    #[test]
    fn collisions_keep_later_path() {
        let items = flatten([("a/index.ts", "first"), ("b/util.ts", "u"), ("c/index.ts", "second")]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name(), "index.ts");
        assert_eq!(items[0].content(), Some("second"));
        assert_eq!(items[1].name(), "util.ts");
    }

    #[test]
    fn placeholder_without_overrides() {
        let model = SystemModel {
            entities: Some(vec![Entity {
                name: "Order".into(),
                ..Entity::default()
            }]),
            ..SystemModel::default()
        };
        let folder = server(&CompileContext::new(&model));
        assert_eq!(folder.children().len(), 1);
        let content = folder.child(PLACEHOLDER_FILE).and_then(FileTreeItem::content).unwrap();
        assert!(content.contains("export const resources = [\"orders\"];"));
    }

    #[test]
    fn override_files_replace_placeholder() {
        let mut files = BTreeMap::new();
        files.insert("src/order.controller.ts".to_string(), "// c".to_string());
        files.insert("src/order.service.ts".to_string(), "// s".to_string());
        let model = SystemModel {
            artifacts: Some(ArtifactOverride {
                backend_files: Some(files),
                ..ArtifactOverride::default()
            }),
            ..SystemModel::default()
        };
        let folder = server(&CompileContext::new(&model));
        let names: Vec<_> = folder.children().iter().map(FileTreeItem::name).collect();
        assert_eq!(names, vec!["order.controller.ts", "order.service.ts"]);
        assert!(folder.child(PLACEHOLDER_FILE).is_none());
    }
}
