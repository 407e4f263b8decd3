//! `documentation/`: prose summaries, diagrams and both schema targets.
//!
//! Override slots (sequence diagram, component diagram, schema) are copied
//! verbatim when set; everything else is generated.

use super::{CompileContext, file};
use crate::domain::{
    diagram::{component_diagram, entity_relationship_diagram, sequence_diagram},
    entities::{file_tree::FileTreeItem, system_model::Page},
    route_tree::build_tree,
    schema::{prisma_project_for, sql_project_for},
};

/// Build the folder. `server` is the already generated server section;
/// `bill_of_materials` comes from the bill-of-materials collaborator.
pub fn documentation(
    ctx: &CompileContext<'_>,
    server: &FileTreeItem,
    bill_of_materials: String,
) -> FileTreeItem {
    let overrides = ctx.model.overrides();
    let entities = ctx.model.entities();

    let sequence = overrides
        .and_then(|o| o.sequence_diagram())
        .map(str::to_string)
        .unwrap_or_else(|| sequence_diagram(&ctx.idents));

    let component = overrides
        .and_then(|o| o.component_diagram())
        .map(str::to_string)
        .unwrap_or_else(|| {
            let files = server.children().iter().filter(|c| c.is_file()).map(FileTreeItem::name);
            component_diagram(files, &ctx.idents)
        });

    let prisma = overrides
        .and_then(|o| o.schema())
        .map(str::to_string)
        .unwrap_or_else(|| prisma_project_for(entities, &ctx.idents, ctx.model.database()));

    FileTreeItem::folder(
        "documentation",
        vec![
            file("vision.md", vision(ctx)),
            file("tech-stack.md", tech_stack(ctx)),
            file("bill-of-materials.md", bill_of_materials),
            file("api-reference.md", api_reference(ctx)),
            file("routes.md", routes(&ctx.pages)),
            file(
                "entity-relationships.mmd",
                entity_relationship_diagram(entities, &ctx.idents),
            ),
            file("sequence-diagram.mmd", sequence),
            file("component-diagram.mmd", component),
            file("schema.prisma", prisma),
            file("schema.sql", sql_project_for(entities, &ctx.idents)),
        ],
    )
}

fn vision(ctx: &CompileContext<'_>) -> String {
    let model = ctx.model;
    let description = match model.description() {
        "" => "_No description provided._",
        d => d,
    };

    let mut out = format!("# {}\n\n{description}\n\n## Scope\n\n", model.name());
    out.push_str(&format!("- Entities: {}\n", model.entities().len()));
    out.push_str(&format!("- API endpoints: {}\n", model.endpoints().len()));
    out.push_str(&format!("- Pages: {}\n", ctx.pages.len()));

    if !ctx.idents.is_empty() {
        out.push_str("\n## Core entities\n\n");
        for (entity, ids) in model.entities().iter().zip(ctx.idents.entries()) {
            match entity.description.as_str() {
                "" => out.push_str(&format!("- **{}**\n", ids.pascal)),
                d => out.push_str(&format!("- **{}**: {d}\n", ids.pascal)),
            }
        }
    }
    out
}

fn tech_stack(ctx: &CompileContext<'_>) -> String {
    let model = ctx.model;
    let infra = model.infrastructure();
    let label = |value: Option<&String>| -> String {
        value
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .unwrap_or("Not specified")
            .to_string()
    };

    let rows = [
        ("Frontend", label(infra.and_then(|i| i.frontend.as_ref()))),
        ("Backend", label(infra.and_then(|i| i.backend.as_ref()))),
        ("Database", model.database().to_string()),
        ("Hosting", label(infra.and_then(|i| i.hosting.as_ref()))),
        ("Font family", model.font_family().to_string()),
        ("Primary colour", format!("`{}`", model.primary_color())),
    ];

    let mut out = String::from("# Tech Stack\n\n| Layer | Choice |\n|-------|--------|\n");
    for (layer, choice) in rows {
        out.push_str(&format!("| {layer} | {choice} |\n"));
    }
    out
}

fn api_reference(ctx: &CompileContext<'_>) -> String {
    let endpoints = ctx.model.endpoints();
    let mut out = String::from("# API Reference\n\n");
    if endpoints.is_empty() {
        out.push_str("_No endpoints defined._\n");
        return out;
    }

    for endpoint in endpoints {
        let method = endpoint.method.trim().to_ascii_uppercase();
        out.push_str(&format!("## `{method} {}`\n\n", endpoint.path));
        if !endpoint.description.is_empty() {
            out.push_str(&format!("{}\n\n", endpoint.description));
        }
        out.push_str(&format!(
            "- Auth required: {}\n",
            if endpoint.auth_required { "yes" } else { "no" }
        ));
        if let Some(ids) = endpoint
            .primary_entity_id
            .as_deref()
            .and_then(|id| ctx.idents.by_id(id))
        {
            out.push_str(&format!("- Entity: `{}`\n", ids.pascal));
        }
        out.push('\n');

        for (title, body) in [
            ("Request body", endpoint.request_body.as_deref()),
            ("Success response", endpoint.success_response.as_deref()),
        ] {
            if let Some(body) = body.filter(|b| !b.trim().is_empty()) {
                out.push_str(&format!("{title}:\n\n```json\n{}\n```\n\n", body.trim_end()));
            }
        }
    }
    out
}

/// Navigable page hierarchy, dynamic segments marked.
fn routes(pages: &[Page]) -> String {
    let mut out = String::from("# Routes\n\n");
    if pages.is_empty() {
        out.push_str("_No pages defined._\n");
        return out;
    }

    let tree = build_tree(pages.iter().map(|p| (p.path.as_str(), p)));
    tree.walk(|depth, node| {
        let label = if node.is_root() {
            "/".to_string()
        } else if node.is_dynamic() {
            format!("{} (dynamic)", node.segment())
        } else {
            node.segment().to_string()
        };
        let indent = "  ".repeat(depth);
        match node.metadata() {
            Some(page) if page.description().is_empty() => {
                out.push_str(&format!("{indent}- `{label}`: {}\n", page.display_name()));
            }
            Some(page) => out.push_str(&format!(
                "{indent}- `{label}`: {} ({})\n",
                page.display_name(),
                page.description()
            )),
            None => out.push_str(&format!("{indent}- `{label}`\n")),
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        artifacts::server::server as server_section,
        entities::system_model::{ArtifactOverride, Endpoint, Entity, SystemModel},
    };

    fn docs(model: &SystemModel) -> FileTreeItem {
        let ctx = CompileContext::new(model);
        let server = server_section(&ctx);
        documentation(&ctx, &server, "# BOM\n".into())
    }

    fn content<'a>(folder: &'a FileTreeItem, name: &str) -> &'a str {
        folder.child(name).and_then(FileTreeItem::content).unwrap()
    }

    #[test]
    fn fixed_file_set() {
        let folder = docs(&SystemModel::default());
        let names: Vec<_> = folder.children().iter().map(FileTreeItem::name).collect();
        assert_eq!(
            names,
            vec![
                "vision.md",
                "tech-stack.md",
                "bill-of-materials.md",
                "api-reference.md",
                "routes.md",
                "entity-relationships.mmd",
                "sequence-diagram.mmd",
                "component-diagram.mmd",
                "schema.prisma",
                "schema.sql",
            ]
        );
        assert_eq!(content(&folder, "bill-of-materials.md"), "# BOM\n");
        assert!(content(&folder, "api-reference.md").contains("_No endpoints defined._"));
    }

    #[test]
    fn overrides_are_verbatim() {
        let model = SystemModel {
            artifacts: Some(ArtifactOverride {
                sequence_diagram: Some("SEQ".into()),
                component_diagram: Some("COMP".into()),
                schema: Some("SCHEMA".into()),
                backend_files: None,
            }),
            entities: Some(vec![Entity {
                name: "Order".into(),
                ..Entity::default()
            }]),
            ..SystemModel::default()
        };
        let folder = docs(&model);
        assert_eq!(content(&folder, "sequence-diagram.mmd"), "SEQ");
        assert_eq!(content(&folder, "component-diagram.mmd"), "COMP");
        assert_eq!(content(&folder, "schema.prisma"), "SCHEMA");
        assert!(content(&folder, "schema.sql").contains("CREATE TABLE orders"));
    }

    #[test]
    fn component_diagram_reads_server_files() {
        let model = SystemModel {
            entities: Some(vec![Entity {
                name: "Order".into(),
                ..Entity::default()
            }]),
            ..SystemModel::default()
        };
        let folder = docs(&model);
        let diagram = content(&folder, "component-diagram.mmd");
        assert!(diagram.contains("  Index[\"index.ts\"]\n"));
        assert!(diagram.contains("OrderController --> OrderService"));
    }

    #[test]
    fn api_reference_lists_endpoints() {
        let model = SystemModel {
            entities: Some(vec![Entity {
                id: "e1".into(),
                name: "Order".into(),
                ..Entity::default()
            }]),
            endpoints: Some(vec![Endpoint {
                method: "post".into(),
                path: "/api/orders".into(),
                description: "Create an order".into(),
                auth_required: true,
                request_body: Some("{\"total\": 1}".into()),
                primary_entity_id: Some("e1".into()),
                ..Endpoint::default()
            }]),
            ..SystemModel::default()
        };
        let api = content(&docs(&model), "api-reference.md").to_string();
        assert!(api.contains("## `POST /api/orders`"));
        assert!(api.contains("- Auth required: yes"));
        assert!(api.contains("- Entity: `Order`"));
        assert!(api.contains("```json\n{\"total\": 1}\n```"));
        assert!(!api.contains("Success response"));
    }

    #[test]
    fn routes_mark_dynamic_segments() {
        let pages = vec![
            Page {
                path: "/".into(),
                ..Page::default()
            },
            Page {
                path: "/orders/[id]".into(),
                description: Some("One order".into()),
                ..Page::default()
            },
        ];
        let out = routes(&pages);
        assert!(out.contains("- `/`: Home\n"));
        assert!(out.contains("  - `orders`\n"));
        assert!(out.contains("    - `[id] (dynamic)`: Id (One order)\n"));
    }
}
