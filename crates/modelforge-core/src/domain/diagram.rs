//! Mermaid diagrams derived from the compiled model.
//!
//! Node names come from the shared [`IdentifierTable`] and from the server
//! files the compiler already produced, never from a second derivation.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::{
    entities::system_model::Entity,
    naming::{IdentifierTable, to_pascal_case, to_snake_case},
};

/// Node whose presence switches on the service → notification edges.
pub const NOTIFICATION_NODE: &str = "NotificationService";

/// Create round trip for the first entity.
pub fn sequence_diagram(idents: &IdentifierTable) -> String {
    let mut out = String::from("sequenceDiagram\n");
    for participant in ["Client", "Controller", "Service", "Database"] {
        out.push_str(&format!("  participant {participant}\n"));
    }
    out.push('\n');

    match idents.first() {
        Some(first) => {
            let table = &first.table;
            out.push_str(&format!("  Client->>Controller: POST /api/{table}\n"));
            out.push_str("  Controller->>Service: create(payload)\n");
            out.push_str(&format!("  Service->>Database: INSERT INTO {table}\n"));
            out.push_str("  Database-->>Service: created row\n");
            out.push_str(&format!("  Service-->>Controller: {}\n", first.pascal));
            out.push_str("  Controller-->>Client: 201 Created\n");
        }
        None => out.push_str("  Note over Client,Database: No entities defined\n"),
    }

    out
}

/// Mermaid node id for a server file name (`order.controller.ts` →
/// `OrderController`).
pub fn file_node_id(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    to_pascal_case(stem)
}

/// One node per server file stem, controller → service edges per entity.
pub fn component_diagram<'a, I>(server_files: I, idents: &IdentifierTable) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::from("graph TD\n");

    let mut seen = HashSet::new();
    for file in server_files {
        let id = file_node_id(file);
        if id.is_empty() || !seen.insert(id.clone()) {
            continue;
        }
        out.push_str(&format!("  {id}[\"{file}\"]\n"));
    }

    if idents.is_empty() {
        return out;
    }

    out.push('\n');
    for ids in idents.entries() {
        out.push_str(&format!("  {} --> {}\n", ids.controller, ids.service));
    }

    if seen.contains(NOTIFICATION_NODE) {
        for ids in idents.entries() {
            out.push_str(&format!("  {} --> {NOTIFICATION_NODE}\n", ids.service));
        }
    }

    out
}

/// Entities with their columns, plus one line per resolvable relationship.
pub fn entity_relationship_diagram(entities: &[Entity], idents: &IdentifierTable) -> String {
    let mut out = String::from("erDiagram\n");

    for (entity, ids) in entities.iter().zip(idents.entries()) {
        if ids.pascal.is_empty() {
            continue;
        }
        out.push_str(&format!("  {} {{\n", ids.pascal));
        out.push_str("    UUID id PK\n");
        for field in entity.fields() {
            let name = to_snake_case(&field.name).replace(' ', "_");
            let marker = if field.unique { " UK" } else { "" };
            out.push_str(&format!("    {} {name}{marker}\n", field.field_type.as_str()));
        }
        out.push_str("  }\n");
    }

    for entity in entities {
        for rel in entity.relationships() {
            // Dangling ids are skipped rather than drawn to phantom nodes.
            let (Some(from), Some(to)) = (
                idents.by_id(&rel.from_entity_id),
                idents.by_id(&rel.to_entity_id),
            ) else {
                continue;
            };
            out.push_str(&format!(
                "  {} {} {} : \"{} ({})\"\n",
                from.pascal,
                rel.kind.er_connector(),
                to.pascal,
                rel.kind.as_str(),
                rel.on_delete.as_str(),
            ));
        }
    }

    out
}
