//! Section generators for the compiled artifact tree.
//!
//! Each submodule turns a [`CompileContext`] into one top-level folder:
//!
//! | Module | Folder |
//! |--------|--------|
//! | [`documentation`] | `documentation/` |
//! | [`database`] | `database/` |
//! | [`server`] | `server/` |
//! | [`client`] | `client/` (`app/`, `components/`, `hooks/`) |
//!
//! Root files (`.gitignore`, `README.md`) live here. Ordering and the
//! bill-of-materials collaborator are handled by the compile service.

pub mod client;
pub mod database;
pub mod documentation;
pub mod server;

use crate::domain::{
    entities::{file_tree::FileTreeItem, system_model::Page, system_model::SystemModel},
    naming::IdentifierTable,
    route_tree::merge_pages,
};

/// Everything derived once per compile and shared by the sections.
#[derive(Debug, Clone)]
pub struct CompileContext<'a> {
    pub model: &'a SystemModel,
    pub idents: IdentifierTable,
    /// Prototype pages merged with screens.
    pub pages: Vec<Page>,
}

impl<'a> CompileContext<'a> {
    pub fn new(model: &'a SystemModel) -> Self {
        Self {
            model,
            idents: IdentifierTable::build(model.entities()),
            pages: merge_pages(model.prototype_pages(), model.screens()),
        }
    }
}

/// Highlighting label for a generated file name.
pub fn language_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or_default();
    match extension {
        "md" => "markdown",
        "mmd" => "mermaid",
        "prisma" => "prisma",
        "sql" => "sql",
        "json" => "json",
        "ts" | "tsx" => "typescript",
        "js" | "jsx" | "mjs" | "cjs" => "javascript",
        "py" => "python",
        "rs" => "rust",
        "go" => "go",
        "yml" | "yaml" => "yaml",
        "toml" => "toml",
        _ => "text",
    }
}

/// File whose language label follows from its name.
pub fn file(name: impl Into<String>, content: impl Into<String>) -> FileTreeItem {
    let name = name.into();
    let language = language_for(&name);
    FileTreeItem::file(name, content, language)
}

/// Quoted, escaped string literal usable in generated TypeScript.
pub fn ts_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

pub fn gitignore() -> FileTreeItem {
    FileTreeItem::file(
        ".gitignore",
        "node_modules/\n.next/\ndist/\ncoverage/\n.env\n.env.local\n*.log\n",
        "text",
    )
}

pub fn readme(ctx: &CompileContext<'_>) -> FileTreeItem {
    let model = ctx.model;
    let mut out = format!("# {}\n\n", model.name());
    if !model.description().is_empty() {
        out.push_str(model.description());
        out.push_str("\n\n");
    }
    out.push_str(
        "## Layout\n\n\
         | Folder | Contents |\n\
         |--------|----------|\n\
         | `documentation/` | Vision, tech stack, API reference, diagrams, schemas |\n\
         | `database/` | Schema, initial migration, seed data |\n\
         | `server/` | Backend sources |\n\
         | `client/` | Pages, components, data hooks |\n\n",
    );
    out.push_str(&format!(
        "## Getting started\n\n```bash\nnpm install\nnpx prisma migrate dev --schema database/schema.prisma\nnpm run dev\n```\n\n\
         Database provider: `{}`\n",
        model.database()
    ));
    file("README.md", out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::system_model::ProjectInfo;

    #[test]
    fn languages_follow_extensions() {
        assert_eq!(language_for("schema.prisma"), "prisma");
        assert_eq!(language_for("page.tsx"), "typescript");
        assert_eq!(language_for("a.controller.js"), "javascript");
        assert_eq!(language_for("Makefile"), "text");
    }

    #[test]
    fn ts_strings_are_escaped() {
        assert_eq!(ts_string("it's \"ok\""), r#""it's \"ok\"""#);
    }

    #[test]
    fn readme_names_the_system() {
        let model = SystemModel {
            project: Some(ProjectInfo {
                name: Some("Shop".into()),
                description: Some("Sells things".into()),
            }),
            ..SystemModel::default()
        };
        let ctx = CompileContext::new(&model);
        let readme = readme(&ctx);
        let content = readme.content().unwrap();
        assert!(content.starts_with("# Shop\n\nSells things\n"));
        assert!(content.contains("`postgresql`"));
    }

    #[test]
    fn context_merges_pages_once() {
        let model = SystemModel {
            screens: Some(vec![Page {
                path: "/".into(),
                ..Page::default()
            }]),
            ..SystemModel::default()
        };
        let ctx = CompileContext::new(&model);
        assert_eq!(ctx.pages.len(), 1);
        assert!(ctx.idents.is_empty());
    }
}
