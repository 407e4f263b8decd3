//! Markdown bill-of-materials generator.
//!
//! Summarises the technology choices a model implies: one table row per
//! layer, the packages each choice pulls in, and a count of what the model
//! declares. Output only depends on the model, so repeated compiles produce
//! identical documents.

use std::fmt::Write as _;

use modelforge_core::{application::ports::BomGenerator, domain::SystemModel};

const DEFAULT_FRONTEND: &str = "Next.js";
const DEFAULT_BACKEND: &str = "Express";
const DEFAULT_HOSTING: &str = "Unspecified";

/// Node packages pulled in by the database provider.
fn database_packages(provider: &str) -> &'static [&'static str] {
    match provider.to_ascii_lowercase().as_str() {
        "postgresql" | "postgres" => &["pg"],
        "mysql" | "mariadb" => &["mysql2"],
        "sqlite" => &["better-sqlite3"],
        "mongodb" => &["mongodb"],
        "sqlserver" => &["tedious"],
        _ => &[],
    }
}

fn frontend_packages(frontend: &str) -> &'static [&'static str] {
    match frontend.to_ascii_lowercase().as_str() {
        "next.js" | "nextjs" | "next" => &["next", "react", "react-dom"],
        "react" => &["react", "react-dom"],
        "vue" | "vue.js" => &["vue"],
        "svelte" | "sveltekit" => &["svelte"],
        _ => &[],
    }
}

fn backend_packages(backend: &str) -> &'static [&'static str] {
    match backend.to_ascii_lowercase().as_str() {
        "express" | "express.js" => &["express"],
        "fastify" => &["fastify"],
        "nestjs" | "nest.js" => &["@nestjs/core", "@nestjs/common"],
        "koa" => &["koa"],
        _ => &[],
    }
}

fn label<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(default)
}

/// [`BomGenerator`] rendering a Markdown table.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownBomGenerator;

impl MarkdownBomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl BomGenerator for MarkdownBomGenerator {
    fn generate(&self, model: &SystemModel) -> String {
        let infra = model.infrastructure();
        let frontend = label(infra.and_then(|i| i.frontend.as_deref()), DEFAULT_FRONTEND);
        let backend = label(infra.and_then(|i| i.backend.as_deref()), DEFAULT_BACKEND);
        let hosting = label(infra.and_then(|i| i.hosting.as_deref()), DEFAULT_HOSTING);
        let database = model.database();

        let mut out = format!("# Bill of Materials: {}\n\n", model.name());

        out.push_str("| Layer | Choice |\n|-------|--------|\n");
        for (layer, choice) in [
            ("Frontend", frontend),
            ("Backend", backend),
            ("Database", database),
            ("Hosting", hosting),
        ] {
            let _ = writeln!(out, "| {layer} | {choice} |");
        }

        let mut packages: Vec<&str> = frontend_packages(frontend)
            .iter()
            .chain(backend_packages(backend))
            .chain(database_packages(database))
            .copied()
            .collect();
        if !model.entities().is_empty() {
            packages.push("prisma");
            packages.push("@prisma/client");
        }
        packages.dedup();

        out.push_str("\n## Packages\n\n");
        if packages.is_empty() {
            out.push_str("No packages inferred.\n");
        } else {
            for package in &packages {
                let _ = writeln!(out, "- `{package}`");
            }
        }

        out.push_str("\n## Scope\n\n");
        for (what, count) in [
            ("Entities", model.entities().len()),
            (
                "Fields",
                model.entities().iter().map(|e| e.fields().len()).sum(),
            ),
            ("Endpoints", model.endpoints().len()),
            ("Screens", model.screens().len()),
            ("Prototype pages", model.prototype_pages().len()),
        ] {
            let _ = writeln!(out, "- {what}: {count}");
        }

        out
    }
}
