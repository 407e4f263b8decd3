use std::collections::HashMap;

use crate::domain::{
    entities::SystemModel,
    naming::{IdentifierTable, to_snake_case},
    route_tree::route_key,
};

/// Centralized domain validation.
///
/// Model checks never reject a model: compilation is fail-open, so they
/// only report things that will produce surprising output.
pub struct DomainValidator;

impl DomainValidator {
    /// Human-readable warnings about the model, in a stable order.
    pub fn model_warnings(model: &SystemModel) -> Vec<String> {
        let mut warnings = Vec::new();
        let idents = IdentifierTable::build(model.entities());

        let mut tables: HashMap<&str, &str> = HashMap::new();
        for (entity, ids) in model.entities().iter().zip(idents.entries()) {
            if ids.pascal.is_empty() {
                warnings.push(format!(
                    "Entity '{}' has no usable name characters",
                    entity.name
                ));
                continue;
            }
            if let Some(previous) = tables.insert(ids.table.as_str(), entity.name.as_str()) {
                warnings.push(format!(
                    "Entities '{previous}' and '{}' both map to table '{}'",
                    entity.name, ids.table
                ));
            }

            let mut columns: HashMap<String, &str> = HashMap::new();
            for field in entity.fields() {
                let column = to_snake_case(&field.name);
                if let Some(previous) = columns.insert(column.clone(), field.name.as_str()) {
                    warnings.push(format!(
                        "Fields '{previous}' and '{}' of '{}' both map to column '{column}'",
                        field.name, entity.name
                    ));
                }
            }

            for rel in entity.relationships() {
                for id in [&rel.from_entity_id, &rel.to_entity_id] {
                    if idents.by_id(id).is_none() {
                        warnings.push(format!(
                            "Relationship on '{}' references unknown entity id '{id}'",
                            entity.name
                        ));
                    }
                }
            }
        }

        for page in model.prototype_pages().iter().chain(model.screens()) {
            if page.path.trim().is_empty() {
                warnings.push(format!(
                    "Page '{}' has an empty path and renders at the app root",
                    page.display_name()
                ));
            } else if !page.path.starts_with('/') {
                warnings.push(format!(
                    "Page path '{}' is treated as '/{}'",
                    page.path,
                    route_key(&page.path)
                ));
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::system_model::{Entity, Field, Page, Relationship};

    #[test]
    fn clean_model_has_no_warnings() {
        assert!(DomainValidator::model_warnings(&SystemModel::default()).is_empty());
    }

    #[test]
    fn reports_colliding_names() {
        let field = |name: &str| Field {
            name: name.into(),
            ..Field::default()
        };
        let model = SystemModel {
            entities: Some(vec![
                Entity {
                    name: "OrderItem".into(),
                    fields: Some(vec![field("totalAmount"), field("TotalAmount")]),
                    ..Entity::default()
                },
                Entity {
                    name: "orderItem".into(),
                    ..Entity::default()
                },
            ]),
            ..SystemModel::default()
        };
        let warnings = DomainValidator::model_warnings(&model);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("column 'total_amount'"));
        assert!(warnings[1].contains("table 'order_items'"));
    }

    #[test]
    fn reports_dangling_relationships_and_odd_paths() {
        let model = SystemModel {
            entities: Some(vec![Entity {
                id: "a".into(),
                name: "A".into(),
                relationships: Some(vec![Relationship {
                    from_entity_id: "a".into(),
                    to_entity_id: "zzz".into(),
                    ..Relationship::default()
                }]),
                ..Entity::default()
            }]),
            screens: Some(vec![Page {
                path: "orders/list".into(),
                ..Page::default()
            }]),
            ..SystemModel::default()
        };
        let warnings = DomainValidator::model_warnings(&model);
        assert!(warnings.iter().any(|w| w.contains("'zzz'")));
        assert!(warnings.iter().any(|w| w.contains("treated as '/orders/list'")));
    }
}
