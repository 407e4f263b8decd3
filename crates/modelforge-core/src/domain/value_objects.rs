//! Domain value objects: FieldType, RelationKind, OnDelete.
//!
//! # Design
//!
//! These are pure value types: `Copy` and compared by value.
//! Each has a canonical wire string (the tag the wizard writes into the
//! model) and a lenient parser. Unrecognised tags never fail deserialization:
//! they land on a catch-all variant and the generators fall back to generic
//! output for it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── FieldType ────────────────────────────────────────────────────────────────

/// Abstract column type authored in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldType {
    #[default]
    String,
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "UUID")]
    Uuid,
    /// Any tag this compiler does not recognise.
    #[serde(other)]
    Unknown,
}

impl FieldType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Text => "Text",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Json => "JSON",
            Self::Uuid => "UUID",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether default values of this type are written without quotes.
    pub const fn has_bare_literals(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Boolean)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" => Ok(Self::String),
            "text" => Ok(Self::Text),
            "integer" | "int" => Ok(Self::Integer),
            "float" | "decimal" => Ok(Self::Float),
            "boolean" | "bool" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "datetime" => Ok(Self::DateTime),
            "json" => Ok(Self::Json),
            "uuid" => Ok(Self::Uuid),
            other => Err(DomainError::InvalidModel(format!(
                "unknown field type: {other}"
            ))),
        }
    }
}

// ── RelationKind ─────────────────────────────────────────────────────────────

/// Cardinality of a relationship between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RelationKind {
    #[serde(rename = "1:1")]
    OneToOne,
    #[default]
    #[serde(rename = "1:N")]
    OneToMany,
    #[serde(rename = "N:N")]
    ManyToMany,
    #[serde(other)]
    Unknown,
}

impl RelationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneToOne => "1:1",
            Self::OneToMany => "1:N",
            Self::ManyToMany => "N:N",
            Self::Unknown => "?",
        }
    }

    /// Mermaid `erDiagram` cardinality connector.
    pub const fn er_connector(&self) -> &'static str {
        match self {
            Self::OneToOne => "||--||",
            Self::OneToMany => "||--o{",
            Self::ManyToMany => "}o--o{",
            Self::Unknown => "||..||",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── OnDelete ─────────────────────────────────────────────────────────────────

/// Referential action when the parent row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OnDelete {
    Cascade,
    #[serde(rename = "Set Null")]
    SetNull,
    #[default]
    Restrict,
    #[serde(other)]
    Unknown,
}

impl OnDelete {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cascade => "Cascade",
            Self::SetNull => "Set Null",
            Self::Restrict => "Restrict",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OnDelete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
