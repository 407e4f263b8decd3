//! The abstract system description authored by the wizard.
//!
//! The compiler treats a [`SystemModel`] as an immutable snapshot. Every
//! collection and sub-object the wizard may omit is an explicit `Option`;
//! the accessor methods turn an absent value into an empty slice or a
//! documented default, so generators never need to special-case "missing".
//!
//! Field names follow the wizard's JSON (`camelCase`).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::{FieldType, OnDelete, RelationKind};

/// Database provider used when the model does not name one.
pub const DEFAULT_DATABASE: &str = "postgresql";
/// Font family used when the model does not name one.
pub const DEFAULT_FONT_FAMILY: &str = "Inter";
/// Primary colour used when the model does not name one.
pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";

/// Root of the model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<Endpoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screens: Option<Vec<Page>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prototype_pages: Option<Vec<Page>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<Infrastructure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<ArtifactOverride>,
}

impl SystemModel {
    pub fn name(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or("Untitled System")
    }

    pub fn description(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.description.as_deref())
            .unwrap_or_default()
    }

    pub fn entities(&self) -> &[Entity] {
        self.entities.as_deref().unwrap_or_default()
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        self.endpoints.as_deref().unwrap_or_default()
    }

    pub fn screens(&self) -> &[Page] {
        self.screens.as_deref().unwrap_or_default()
    }

    pub fn prototype_pages(&self) -> &[Page] {
        self.prototype_pages.as_deref().unwrap_or_default()
    }

    pub fn database(&self) -> &str {
        self.infra(|i| i.database.as_deref())
            .unwrap_or(DEFAULT_DATABASE)
    }

    pub fn font_family(&self) -> &str {
        self.infra(|i| i.font_family.as_deref())
            .unwrap_or(DEFAULT_FONT_FAMILY)
    }

    pub fn primary_color(&self) -> &str {
        self.infra(|i| i.primary_color.as_deref())
            .unwrap_or(DEFAULT_PRIMARY_COLOR)
    }

    pub fn infrastructure(&self) -> Option<&Infrastructure> {
        self.infrastructure.as_ref()
    }

    pub fn overrides(&self) -> Option<&ArtifactOverride> {
        self.artifacts.as_ref()
    }

    fn infra<'a>(
        &'a self,
        f: impl FnOnce(&'a Infrastructure) -> Option<&'a str>,
    ) -> Option<&'a str> {
        self.infrastructure
            .as_ref()
            .and_then(f)
            .filter(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInfo {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A data entity (one table / one model block).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entity {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamps: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub soft_deletes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<Relationship>>,
}

impl Entity {
    pub fn fields(&self) -> &[Field] {
        self.fields.as_deref().unwrap_or_default()
    }

    pub fn relationships(&self) -> &[Relationship] {
        self.relationships.as_deref().unwrap_or_default()
    }

    pub fn indexed_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields().iter().filter(|f| f.indexed)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub field_type: FieldType,
    #[serde(deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub indexed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validations: Option<Vec<String>>,
}

impl Field {
    /// The default value, ignoring empty strings the wizard leaves behind.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref().filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Relationship {
    #[serde(deserialize_with = "null_as_default")]
    pub from_entity_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub to_entity_id: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: RelationKind,
    #[serde(deserialize_with = "null_as_default")]
    pub on_delete: OnDelete,
}

/// An API route description. Consumed by documentation only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoint {
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auth_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_entity_id: Option<String>,
}

/// A UI route. Used for both plain screens and prototype pages.
///
/// Everything except `path` is optional so that a prototype page and a
/// screen describing the same path can be merged field by field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Page {
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ComponentSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Vec<StateSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_calls: Option<Vec<ApiCall>>,
}

impl Page {
    /// Explicit name, or one derived from the last path segment.
    ///
    /// `/` becomes `Home`; `/orders/[id]` becomes `Id`.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        let last = self.path.split('/').rfind(|s| !s.is_empty());
        match last {
            Some(segment) => {
                let pascal = crate::domain::naming::to_pascal_case(segment);
                if pascal.is_empty() { "Page".into() } else { pascal }
            }
            None => "Home".into(),
        }
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn components(&self) -> &[ComponentSpec] {
        self.components.as_deref().unwrap_or_default()
    }

    pub fn state(&self) -> &[StateSpec] {
        self.state.as_deref().unwrap_or_default()
    }

    pub fn api_calls(&self) -> &[ApiCall] {
        self.api_calls.as_deref().unwrap_or_default()
    }

    /// Fill every unset field from `fallback`; fields already set win.
    pub fn fill_from(mut self, fallback: &Page) -> Self {
        self.name = self.name.or_else(|| fallback.name.clone());
        self.description = self.description.or_else(|| fallback.description.clone());
        self.layout = self.layout.or_else(|| fallback.layout.clone());
        self.code = self.code.or_else(|| fallback.code.clone());
        self.components = self.components.or_else(|| fallback.components.clone());
        self.state = self.state.or_else(|| fallback.state.clone());
        self.api_calls = self.api_calls.or_else(|| fallback.api_calls.clone());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Vec<String>>,
}

impl ComponentSpec {
    pub fn props(&self) -> &[String] {
        self.props.as_deref().unwrap_or_default()
    }
}

/// A piece of local page state (`const [name, setName] = useState(...)`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
}

/// A request a page issues in response to a UI trigger.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiCall {
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub endpoint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trigger: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_error: Option<String>,
}

/// Infrastructure choices made in the wizard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Infrastructure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosting: Option<String>,
}

/// Precomputed artifacts. Any slot that is set replaces the freshly
/// generated content for the same slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtifactOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_diagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_diagram: Option<String>,
    /// Full model-language schema text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Backend source files keyed by their path in the original project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_files: Option<BTreeMap<String, String>>,
}

impl ArtifactOverride {
    pub fn sequence_diagram(&self) -> Option<&str> {
        non_blank(self.sequence_diagram.as_deref())
    }

    pub fn component_diagram(&self) -> Option<&str> {
        non_blank(self.component_diagram.as_deref())
    }

    pub fn schema(&self) -> Option<&str> {
        non_blank(self.schema.as_deref())
    }

    pub fn backend_files(&self) -> Option<&BTreeMap<String, String>> {
        self.backend_files.as_ref().filter(|m| !m.is_empty())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reads an explicit `null` as the type's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_a_valid_model() {
        let model: SystemModel = serde_json::from_str("{}").unwrap();
        assert!(model.entities().is_empty());
        assert!(model.screens().is_empty());
        assert_eq!(model.database(), DEFAULT_DATABASE);
        assert_eq!(model.name(), "Untitled System");
    }

    #[test]
    fn null_collections_behave_as_empty() {
        let model: SystemModel =
            serde_json::from_str(r#"{"entities": null, "prototypePages": null}"#).unwrap();
        assert!(model.entities().is_empty());
        assert!(model.prototype_pages().is_empty());
    }

    #[test]
    fn nested_nulls_behave_as_unset() {
        let json = r#"{
            "entities": [{
                "id": null, "name": null, "fields": null, "relationships": null,
                "timestamps": null
            }, {
                "name": "Order",
                "fields": [{"name": "total", "type": null, "required": null}]
            }],
            "endpoints": [{"method": null, "path": null}],
            "screens": [{"path": null, "components": [{"name": null}]}]
        }"#;
        let model: SystemModel = serde_json::from_str(json).unwrap();

        let blank = &model.entities()[0];
        assert!(blank.name.is_empty());
        assert!(blank.fields().is_empty());
        assert!(!blank.timestamps);

        let field = &model.entities()[1].fields()[0];
        assert_eq!(field.field_type, FieldType::default());
        assert!(!field.required);

        assert!(model.endpoints()[0].path.is_empty());
        assert!(model.screens()[0].path.is_empty());
        assert!(model.screens()[0].components()[0].name.is_empty());
    }

    #[test]
    fn wizard_json_deserializes() {
        let json = r##"{
            "project": {"name": "Shop", "description": "A shop"},
            "entities": [{
                "id": "e1", "name": "Order", "timestamps": true,
                "fields": [{"name": "totalAmount", "type": "Float", "required": true}]
            }],
            "infrastructure": {"database": "mysql", "primaryColor": "#ff0000"}
        }"##;
        let model: SystemModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.name(), "Shop");
        assert_eq!(model.entities()[0].fields()[0].field_type, FieldType::Float);
        assert!(model.entities()[0].timestamps);
        assert_eq!(model.database(), "mysql");
        assert_eq!(model.primary_color(), "#ff0000");
        assert_eq!(model.font_family(), DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn blank_infrastructure_values_use_defaults() {
        let model = SystemModel {
            infrastructure: Some(Infrastructure {
                database: Some("  ".into()),
                ..Infrastructure::default()
            }),
            ..SystemModel::default()
        };
        assert_eq!(model.database(), DEFAULT_DATABASE);
    }

    #[test]
    fn page_display_name_from_path() {
        let root = Page {
            path: "/".into(),
            ..Page::default()
        };
        let nested = Page {
            path: "/dashboard/user-settings".into(),
            ..Page::default()
        };
        assert_eq!(root.display_name(), "Home");
        assert_eq!(nested.display_name(), "UserSettings");
    }

    #[test]
    fn fill_from_keeps_set_fields() {
        let proto = Page {
            path: "/a".into(),
            description: Some("proto".into()),
            ..Page::default()
        };
        let screen = Page {
            path: "/a".into(),
            description: Some("screen".into()),
            layout: Some("sidebar".into()),
            ..Page::default()
        };
        let merged = proto.fill_from(&screen);
        assert_eq!(merged.description(), "proto");
        assert_eq!(merged.layout.as_deref(), Some("sidebar"));
    }
}
