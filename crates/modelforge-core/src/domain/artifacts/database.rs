//! `database/`: schema, initial migration, one seed file per entity.

use std::collections::HashSet;

use serde_json::{Map, Number, Value};
use tracing::warn;
use uuid::Uuid;

use super::{CompileContext, file};
use crate::domain::{
    entities::{file_tree::FileTreeItem, system_model::Entity, system_model::Field},
    naming::{EntityIdents, to_snake_case},
    schema::{prisma_project_for, sql_project_for},
    value_objects::FieldType,
};

const EXAMPLE_DATE: &str = "2024-01-01";
const EXAMPLE_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// Empty when the model has no entities.
pub fn database(ctx: &CompileContext<'_>) -> FileTreeItem {
    let entities = ctx.model.entities();
    if entities.is_empty() {
        return FileTreeItem::empty_folder("database");
    }

    let schema = ctx
        .model
        .overrides()
        .and_then(|o| o.schema())
        .map(str::to_string)
        .unwrap_or_else(|| prisma_project_for(entities, &ctx.idents, ctx.model.database()));

    let migration = sql_project_for(entities, &ctx.idents);

    let mut seen = HashSet::new();
    let seeds = entities
        .iter()
        .zip(ctx.idents.entries())
        .filter(|(entity, ids)| {
            let fresh = seen.insert(ids.seed_file.clone());
            if !fresh {
                warn!(
                    entity = %entity.name,
                    seed = %ids.seed_file,
                    "Seed file already generated for another entity; keeping the first"
                );
            }
            fresh
        })
        .map(|(entity, ids)| file(ids.seed_file.clone(), seed_file(entity, ids)))
        .collect();

    FileTreeItem::folder(
        "database",
        vec![
            file("schema.prisma", schema),
            FileTreeItem::folder("migrations", vec![file("0001_init.sql", migration)]),
            FileTreeItem::folder("seeds", seeds),
        ],
    )
}

/// A one-element JSON array holding an example row.
///
/// Values are derived from the field definitions only, so the same entity
/// always yields the same record.
pub fn seed_file(entity: &Entity, ids: &EntityIdents) -> String {
    let mut row = Map::new();
    row.insert(
        "id".into(),
        Value::String(stable_uuid(&ids.table).to_string()),
    );

    for field in entity.fields() {
        let column = to_snake_case(&field.name);
        let value = example_value(field, &format!("{}.{column}", ids.table));
        row.insert(column, value);
    }

    if entity.timestamps {
        row.insert("created_at".into(), Value::String(EXAMPLE_TIMESTAMP.into()));
        row.insert("updated_at".into(), Value::String(EXAMPLE_TIMESTAMP.into()));
    }
    if entity.soft_deletes {
        row.insert("deleted_at".into(), Value::Null);
    }

    format!("{:#}\n", Value::Array(vec![Value::Object(row)]))
}

fn stable_uuid(name: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}

fn example_value(field: &Field, qualified: &str) -> Value {
    if let Some(default) = field.default_value() {
        return typed_default(field.field_type, default);
    }

    match field.field_type {
        FieldType::String => Value::String(format!("Example {}", field.name)),
        FieldType::Text => Value::String("Lorem ipsum dolor sit amet.".into()),
        FieldType::Integer => Value::from(1),
        FieldType::Float => Number::from_f64(9.99).map_or(Value::Null, Value::Number),
        FieldType::Boolean => Value::Bool(true),
        FieldType::Date => Value::String(EXAMPLE_DATE.into()),
        FieldType::DateTime => Value::String(EXAMPLE_TIMESTAMP.into()),
        FieldType::Json => Value::Object(Map::new()),
        FieldType::Uuid => Value::String(stable_uuid(qualified).to_string()),
        FieldType::Unknown => Value::String("example".into()),
    }
}

/// Defaults are authored as text; numbers and booleans are parsed back so
/// the seed row type-checks against the schema. Unparseable input is kept
/// as a string.
fn typed_default(field_type: FieldType, raw: &str) -> Value {
    let parsed = match field_type {
        FieldType::Integer => raw.parse::<i64>().ok().map(Value::from),
        FieldType::Float => raw
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        FieldType::Boolean => raw.parse::<bool>().ok().map(Value::Bool),
        FieldType::Json => serde_json::from_str(raw).ok(),
        _ => None,
    };
    parsed.unwrap_or_else(|| Value::String(raw.to_string()))
}
