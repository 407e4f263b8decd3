//! Identifier casing transforms and the per-compile identifier table.
//!
//! Every generator that needs an entity-derived name (table names, model
//! names, controller/service nodes, seed file names) reads it from
//! [`EntityIdents`], which is derived in exactly one place. The diagram
//! generator links nodes by these names, so two derivations drifting apart
//! would silently produce edges to nodes that do not exist.
//!
//! ## Casing rules
//!
//! | Function | `"totalAmount"` | `"order item"` | `""` |
//! |----------|-----------------|----------------|------|
//! | [`to_snake_case`]  | `total_amount` | `order item` | `""` |
//! | [`to_pascal_case`] | `TotalAmount`  | `OrderItem`  | `""` |
//! | [`to_camel_case`]  | `totalAmount`  | `orderItem`  | `""` |
//!
//! All functions are total: they never panic, whatever the input.

use std::collections::BTreeMap;

use super::entities::system_model::Entity;

/// Insert `_` before each ASCII uppercase letter, lowercase it, and strip any
/// leading underscores.
///
/// Only uppercase letters are treated as boundaries; spaces and hyphens pass
/// through untouched.
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out.trim_start_matches('_').to_string()
}

/// Uppercase the first alphanumeric character after every run of
/// non-alphanumeric characters (and at the start), then drop the
/// non-alphanumerics.
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;

    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            at_boundary = true;
            continue;
        }
        if at_boundary {
            out.push(c.to_ascii_uppercase());
            at_boundary = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// [`to_pascal_case`] with the first character lowercased.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(pascal.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Naive English plural: appends `s`.
///
/// Irregular plurals (`person` → `persons`, `category` → `categorys`) are a
/// known limitation of the generated naming scheme.
pub fn pluralize(s: &str) -> String {
    format!("{s}s")
}

/// Every name derived from one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityIdents {
    /// Entity name as authored.
    pub original: String,
    /// `OrderItem`
    pub pascal: String,
    /// `orderItem`
    pub camel: String,
    /// `order_item`
    pub snake: String,
    /// `order_items`
    pub table: String,
    /// `OrderItemController`
    pub controller: String,
    /// `OrderItemService`
    pub service: String,
    /// `order_items.json`
    pub seed_file: String,
}

impl EntityIdents {
    /// Derive all names for an entity name.
    pub fn derive(name: &str) -> Self {
        let pascal = to_pascal_case(name);
        let snake = to_snake_case(name);
        let table = pluralize(&snake);

        Self {
            original: name.to_string(),
            camel: to_camel_case(name),
            controller: format!("{pascal}Controller"),
            service: format!("{pascal}Service"),
            seed_file: format!("{table}.json"),
            pascal,
            snake,
            table,
        }
    }

    /// Derive names for an [`Entity`].
    pub fn of(entity: &Entity) -> Self {
        Self::derive(&entity.name)
    }
}

/// Identifier table populated once per compile, in entity order.
///
/// Lookups by entity id are used to resolve relationship endpoints.
#[derive(Debug, Clone, Default)]
pub struct IdentifierTable {
    entries: Vec<EntityIdents>,
    by_id: BTreeMap<String, usize>,
}

impl IdentifierTable {
    pub fn build(entities: &[Entity]) -> Self {
        let mut table = Self::default();
        for entity in entities {
            let index = table.entries.len();
            table.entries.push(EntityIdents::of(entity));
            if !entity.id.is_empty() {
                table.by_id.entry(entity.id.clone()).or_insert(index);
            }
        }
        table
    }

    pub fn entries(&self) -> &[EntityIdents] {
        &self.entries
    }

    pub fn first(&self) -> Option<&EntityIdents> {
        self.entries.first()
    }

    pub fn get(&self, index: usize) -> Option<&EntityIdents> {
        self.entries.get(index)
    }

    pub fn by_id(&self, id: &str) -> Option<&EntityIdents> {
        self.by_id.get(id).and_then(|&i| self.entries.get(i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
