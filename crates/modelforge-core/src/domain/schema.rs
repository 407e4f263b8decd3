//! Schema generation for both targets: relational DDL and the Prisma-style
//! model language.
//!
//! Text is assembled through two small typed builders,
//! [`SqlTableBuilder`] and [`PrismaModelBuilder`], so every interpolated
//! piece has a known role (column, constraint, attribute) instead of being
//! spliced into a format string.
//!
//! ## Known limitation
//!
//! Relationships are not emitted by either target. Whole-project output can
//! therefore describe entities whose conceptual links exist only in the
//! model.

use crate::domain::{
    entities::system_model::{DEFAULT_DATABASE, Entity, Field},
    naming::{EntityIdents, IdentifierTable, to_camel_case, to_snake_case},
    type_map::{prisma_type, sql_type},
};

// ============================================================================
// Relational DDL
// ============================================================================

/// Default clause of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnDefault {
    /// Quoted literal, e.g. `DEFAULT 'pending'`.
    Literal(String),
    /// Raw SQL expression, e.g. `DEFAULT CURRENT_TIMESTAMP`.
    Expression(&'static str),
}

/// One column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlColumn {
    pub name: String,
    pub sql_type: &'static str,
    pub primary_key: bool,
    pub not_null: bool,
    pub unique: bool,
    pub default: Option<ColumnDefault>,
}

impl SqlColumn {
    pub fn new(name: impl Into<String>, sql_type: &'static str) -> Self {
        Self {
            name: name.into(),
            sql_type,
            primary_key: false,
            not_null: false,
            unique: false,
            default: None,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn not_null(mut self, yes: bool) -> Self {
        self.not_null = yes;
        self
    }

    pub fn unique(mut self, yes: bool) -> Self {
        self.unique = yes;
        self
    }

    pub fn default(mut self, default: Option<ColumnDefault>) -> Self {
        self.default = default;
        self
    }

    fn render(&self) -> String {
        let mut line = format!("\"{}\" {}", self.name, self.sql_type);
        if self.primary_key {
            line.push_str(" PRIMARY KEY");
        }
        if self.not_null {
            line.push_str(" NOT NULL");
        }
        if self.unique {
            line.push_str(" UNIQUE");
        }
        match &self.default {
            Some(ColumnDefault::Literal(value)) => {
                line.push_str(&format!(" DEFAULT '{}'", value.replace('\'', "''")));
            }
            Some(ColumnDefault::Expression(expr)) => {
                line.push_str(&format!(" DEFAULT {expr}"));
            }
            None => {}
        }
        line
    }
}

/// Builds one `CREATE TABLE` statement plus its indexes.
#[derive(Debug, Clone)]
pub struct SqlTableBuilder {
    table: String,
    columns: Vec<SqlColumn>,
    indexes: Vec<String>,
}

impl SqlTableBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            indexes: Vec::new(),
        }
    }

    pub fn column(mut self, column: SqlColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add `CREATE INDEX idx_<table>_<column>`.
    pub fn index(mut self, column: impl Into<String>) -> Self {
        self.indexes.push(column.into());
        self
    }

    pub fn build(&self) -> String {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("  {}", c.render()))
            .collect();

        let mut out = format!("CREATE TABLE {} (\n", self.table);
        out.push_str(&columns.join(",\n"));
        out.push_str("\n);\n");

        if !self.indexes.is_empty() {
            out.push('\n');
            for column in &self.indexes {
                out.push_str(&format!(
                    "CREATE INDEX idx_{table}_{column} ON {table} (\"{column}\");\n",
                    table = self.table,
                ));
            }
        }

        out
    }
}

/// DDL for one entity.
pub fn generate_sql(entity: &Entity) -> String {
    sql_for(entity, &EntityIdents::of(entity))
}

/// DDL for one entity using names from a prebuilt identifier table.
pub fn sql_for(entity: &Entity, idents: &EntityIdents) -> String {
    let mut table = SqlTableBuilder::new(&idents.table).column(
        SqlColumn::new("id", "UUID")
            .primary_key()
            .default(Some(ColumnDefault::Expression("gen_random_uuid()"))),
    );

    for field in entity.fields() {
        table = table.column(sql_column(field));
    }

    if entity.timestamps {
        for name in ["created_at", "updated_at"] {
            table = table.column(
                SqlColumn::new(name, "TIMESTAMP")
                    .not_null(true)
                    .default(Some(ColumnDefault::Expression("CURRENT_TIMESTAMP"))),
            );
        }
    }

    if entity.soft_deletes {
        table = table.column(SqlColumn::new("deleted_at", "TIMESTAMP"));
    }

    for field in entity.indexed_fields() {
        table = table.index(to_snake_case(&field.name));
    }

    table.build()
}

fn sql_column(field: &Field) -> SqlColumn {
    SqlColumn::new(to_snake_case(&field.name), sql_type(field.field_type))
        .not_null(field.required)
        .unique(field.unique)
        .default(
            field
                .default_value()
                .map(|v| ColumnDefault::Literal(v.to_string())),
        )
}

/// DDL for every entity, in model order.
pub fn generate_sql_project(entities: &[Entity]) -> String {
    sql_project_for(entities, &IdentifierTable::build(entities))
}

pub fn sql_project_for(entities: &[Entity], idents: &IdentifierTable) -> String {
    entities
        .iter()
        .zip(idents.entries())
        .map(|(entity, ids)| sql_for(entity, ids))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Model language
// ============================================================================

/// One field line inside a `model` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrismaField {
    pub name: String,
    pub type_name: &'static str,
    pub optional: bool,
    pub attributes: Vec<String>,
}

impl PrismaField {
    pub fn new(name: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            name: name.into(),
            type_name,
            optional: false,
            attributes: Vec::new(),
        }
    }

    pub fn optional(mut self, yes: bool) -> Self {
        self.optional = yes;
        self
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    fn render(&self) -> String {
        let mut line = format!(
            "{} {}{}",
            self.name,
            self.type_name,
            if self.optional { "?" } else { "" }
        );
        for attribute in &self.attributes {
            line.push(' ');
            line.push_str(attribute);
        }
        line
    }
}

/// Builds one `model <Name> { ... }` block.
#[derive(Debug, Clone)]
pub struct PrismaModelBuilder {
    name: String,
    fields: Vec<PrismaField>,
    block_attributes: Vec<String>,
}

impl PrismaModelBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            block_attributes: Vec::new(),
        }
    }

    pub fn field(mut self, field: PrismaField) -> Self {
        self.fields.push(field);
        self
    }

    /// Add `@@index([<field>])` at the end of the block.
    pub fn index(mut self, field: impl Into<String>) -> Self {
        self.block_attributes
            .push(format!("@@index([{}])", field.into()));
        self
    }

    pub fn build(&self) -> String {
        let mut out = format!("model {} {{\n", self.name);
        for field in &self.fields {
            out.push_str("  ");
            out.push_str(&field.render());
            out.push('\n');
        }
        if !self.block_attributes.is_empty() {
            out.push('\n');
            for attribute in &self.block_attributes {
                out.push_str("  ");
                out.push_str(attribute);
                out.push('\n');
            }
        }
        out.push_str("}\n");
        out
    }
}

/// Model-language block for one entity.
pub fn generate_prisma(entity: &Entity) -> String {
    prisma_for(entity, &EntityIdents::of(entity))
}

pub fn prisma_for(entity: &Entity, idents: &EntityIdents) -> String {
    let mut model = PrismaModelBuilder::new(&idents.pascal).field(
        PrismaField::new("id", "String")
            .attribute("@id")
            .attribute("@default(uuid())"),
    );

    for field in entity.fields() {
        model = model.field(prisma_field(field));
    }

    if entity.timestamps {
        model = model
            .field(PrismaField::new("createdAt", "DateTime").attribute("@default(now())"))
            .field(PrismaField::new("updatedAt", "DateTime").attribute("@updatedAt"));
    }

    if entity.soft_deletes {
        model = model.field(PrismaField::new("deletedAt", "DateTime").optional(true));
    }

    for field in entity.indexed_fields() {
        model = model.index(to_camel_case(&field.name));
    }

    model.build()
}

fn prisma_field(field: &Field) -> PrismaField {
    let mapped = prisma_type(field.field_type);
    let mut out = PrismaField::new(to_camel_case(&field.name), mapped.name).optional(!field.required);

    if let Some(attribute) = mapped.attribute {
        out = out.attribute(attribute);
    }
    if field.unique {
        out = out.attribute("@unique");
    }
    if let Some(value) = field.default_value() {
        let literal = if field.field_type.has_bare_literals() {
            value.to_string()
        } else {
            format!("\"{}\"", value.replace('"', "\\\""))
        };
        out = out.attribute(format!("@default({literal})"));
    }

    out
}

/// `generator` + `datasource` header for a provider (`postgresql` if empty).
pub fn prisma_header(provider: &str) -> String {
    let provider = if provider.trim().is_empty() {
        DEFAULT_DATABASE
    } else {
        provider
    };
    format!(
        "generator client {{\n  provider = \"prisma-client-js\"\n}}\n\n\
         datasource db {{\n  provider = \"{provider}\"\n  url      = env(\"DATABASE_URL\")\n}}\n"
    )
}

/// Header plus one block per entity, in model order.
pub fn generate_prisma_project(entities: &[Entity], provider: &str) -> String {
    prisma_project_for(entities, &IdentifierTable::build(entities), provider)
}

pub fn prisma_project_for(entities: &[Entity], idents: &IdentifierTable, provider: &str) -> String {
    let mut out = prisma_header(provider);
    for (entity, ids) in entities.iter().zip(idents.entries()) {
        out.push('\n');
        out.push_str(&prisma_for(entity, ids));
    }
    out
}
