//! Field type → target schema type lookup.
//!
//! Two static tables, one per schema target. [`FieldType::Unknown`] maps to
//! each target's generic text type, so an entity with an unrecognised field
//! type still produces a schema.

use crate::domain::value_objects::FieldType;

/// Generic relational text type.
pub const SQL_FALLBACK: &str = "TEXT";
/// Generic model-language text type.
pub const PRISMA_FALLBACK: &str = "String";

/// Relational column type for a field type.
pub const fn sql_type(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::String => "VARCHAR(255)",
        FieldType::Text => "TEXT",
        FieldType::Integer => "INTEGER",
        FieldType::Float => "DECIMAL(10, 2)",
        FieldType::Boolean => "BOOLEAN",
        FieldType::Date => "DATE",
        FieldType::DateTime => "TIMESTAMP",
        FieldType::Json => "JSONB",
        FieldType::Uuid => "UUID",
        FieldType::Unknown => SQL_FALLBACK,
    }
}

/// A model-language scalar plus an optional native storage attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrismaType {
    pub name: &'static str,
    /// e.g. `@db.Uuid`
    pub attribute: Option<&'static str>,
}

impl PrismaType {
    const fn plain(name: &'static str) -> Self {
        Self {
            name,
            attribute: None,
        }
    }
}

/// Model-language type for a field type.
pub const fn prisma_type(field_type: FieldType) -> PrismaType {
    match field_type {
        FieldType::String | FieldType::Text => PrismaType::plain("String"),
        FieldType::Integer => PrismaType::plain("Int"),
        FieldType::Float => PrismaType::plain("Float"),
        FieldType::Boolean => PrismaType::plain("Boolean"),
        FieldType::Date | FieldType::DateTime => PrismaType::plain("DateTime"),
        FieldType::Json => PrismaType::plain("Json"),
        FieldType::Uuid => PrismaType {
            name: "String",
            attribute: Some("@db.Uuid"),
        },
        FieldType::Unknown => PrismaType::plain(PRISMA_FALLBACK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_table() {
        assert_eq!(sql_type(FieldType::String), "VARCHAR(255)");
        assert_eq!(sql_type(FieldType::Float), "DECIMAL(10, 2)");
        assert_eq!(sql_type(FieldType::Uuid), "UUID");
        assert_eq!(sql_type(FieldType::Unknown), "TEXT");
    }

    #[test]
    fn prisma_table() {
        assert_eq!(prisma_type(FieldType::Integer).name, "Int");
        assert_eq!(prisma_type(FieldType::Date).name, "DateTime");
        assert_eq!(prisma_type(FieldType::Unknown), PrismaType::plain("String"));
    }

    #[test]
    fn uuid_carries_storage_attribute() {
        let t = prisma_type(FieldType::Uuid);
        assert_eq!(t.name, "String");
        assert_eq!(t.attribute, Some("@db.Uuid"));
    }
}
