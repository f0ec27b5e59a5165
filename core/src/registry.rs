#![deny(missing_docs)]

//! # Model Registry
//!
//! Stores model definitions and produces their JSON schema on demand.
//!
//! Models are registered explicitly, either from typed [`ModelDefinition`]s,
//! from YAML / JSON documents, from raw JSON schemas or from any
//! `utoipa::ToSchema` type. No reflection is involved: a model is resolved
//! by name through [`ModelRegistry::read_model`].

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use utoipa::{PartialSchema, ToSchema};

/// Internal type hint attached to every schema produced by `read_model`.
pub const TYPE_HINT_KEY: &str = "x-rust-type";

/// The storage type of a model property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// Text.
    String,
    /// Floating point number.
    Number,
    /// Whole number.
    Integer,
    /// Boolean flag.
    Boolean,
    /// Timestamp, serialized as an RFC 3339 string.
    Date,
    /// Free-form object.
    Object,
    /// Array; the item type comes from [`PropertyDefinition::items`].
    Array,
    /// Any JSON value.
    Any,
}

impl PropertyType {
    fn schema(self) -> Map<String, Value> {
        let mut out = Map::new();
        match self {
            PropertyType::String => {
                out.insert("type".to_string(), json!("string"));
            }
            PropertyType::Number => {
                out.insert("type".to_string(), json!("number"));
            }
            PropertyType::Integer => {
                out.insert("type".to_string(), json!("integer"));
            }
            PropertyType::Boolean => {
                out.insert("type".to_string(), json!("boolean"));
            }
            PropertyType::Date => {
                out.insert("type".to_string(), json!("string"));
                out.insert("format".to_string(), json!("date-time"));
            }
            PropertyType::Object => {
                out.insert("type".to_string(), json!("object"));
            }
            PropertyType::Array => {
                out.insert("type".to_string(), json!("array"));
            }
            PropertyType::Any => {}
        }
        out
    }
}

/// A single model property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// Storage type.
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Whether the property is listed in the schema's `required` array.
    #[serde(default)]
    pub required: bool,
    /// Whether the property is the model identifier.
    #[serde(default)]
    pub id: bool,
    /// Static default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Format override (`email`, `uuid`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Allowed values.
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    /// Item type for `array` properties. Defaults to `any`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<PropertyType>,
    /// Whether the property is read-only.
    #[serde(default)]
    pub read_only: bool,
}

impl PropertyDefinition {
    /// Creates an optional property of the given type.
    pub fn new(property_type: PropertyType) -> Self {
        Self {
            property_type,
            required: false,
            id: false,
            default: None,
            description: None,
            format: None,
            enum_values: Vec::new(),
            items: None,
            read_only: false,
        }
    }

    /// Marks the property as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the property as the identifier.
    pub fn id(mut self) -> Self {
        self.id = true;
        self
    }

    /// Sets a default value.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Sets a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Restricts the property to a set of values.
    pub fn with_enum(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.enum_values = values.into_iter().collect();
        self
    }

    /// Sets the item type of an array property.
    pub fn with_items(mut self, items: PropertyType) -> Self {
        self.items = Some(items);
        self
    }

    /// Marks the property as read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Builds the JSON schema of the property.
    pub fn schema(&self) -> Value {
        let mut out = self.property_type.schema();
        if self.property_type == PropertyType::Array {
            let items = self.items.unwrap_or(PropertyType::Any).schema();
            out.insert("items".to_string(), Value::Object(items));
        }
        if let Some(format) = &self.format {
            out.insert("format".to_string(), json!(format));
        }
        if let Some(desc) = &self.description {
            out.insert("description".to_string(), json!(desc));
        }
        if let Some(default) = &self.default {
            out.insert("default".to_string(), default.clone());
        }
        if !self.enum_values.is_empty() {
            out.insert("enum".to_string(), Value::Array(self.enum_values.clone()));
        }
        if self.read_only {
            out.insert("readOnly".to_string(), json!(true));
        }
        Value::Object(out)
    }
}

/// Cardinality of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    /// A single related instance.
    BelongsTo,
    /// A single related instance owned by the target.
    HasOne,
    /// Many related instances.
    HasMany,
}

/// A navigational property to another model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationDefinition {
    /// Property name on the source model.
    pub name: String,
    /// Target model name.
    pub target: String,
    /// Cardinality.
    pub kind: RelationKind,
}

fn default_strict() -> bool {
    true
}

/// A registered model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Model name, used as the default schema title.
    pub name: String,
    /// Ordered properties.
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDefinition>,
    /// Navigational properties, only emitted with `includeRelations`.
    #[serde(default)]
    pub relations: Vec<RelationDefinition>,
    /// Strict models reject unknown properties.
    #[serde(default = "default_strict")]
    pub strict: bool,
    /// Prepends the base entity fields on registration.
    #[serde(default)]
    pub blueprint: bool,
}

impl ModelDefinition {
    /// Creates an empty strict model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
            relations: Vec::new(),
            strict: true,
            blueprint: false,
        }
    }

    /// Creates a model carrying the base entity fields `id`, `created` and `edited`.
    pub fn blueprint(name: impl Into<String>) -> Self {
        let mut model = Self::new(name);
        model.properties = blueprint_properties();
        model
    }

    /// Adds a property.
    pub fn with_property(mut self, name: impl Into<String>, property: PropertyDefinition) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    /// Adds a relation.
    pub fn with_relation(
        mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        kind: RelationKind,
    ) -> Self {
        self.relations.push(RelationDefinition {
            name: name.into(),
            target: target.into(),
            kind,
        });
        self
    }

    /// Sets strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Name of the identifier property, if any.
    pub fn id_property(&self) -> Option<&str> {
        self.properties
            .iter()
            .find(|(_, p)| p.id)
            .map(|(name, _)| name.as_str())
    }

    fn base_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for (name, property) in &self.properties {
            properties.insert(name.clone(), property.schema());
            if property.required {
                required.push(Value::String(name.clone()));
            }
        }

        let mut schema = Map::new();
        schema.insert("title".to_string(), json!(self.name));
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema.insert("additionalProperties".to_string(), json!(!self.strict));
        schema
    }
}

fn blueprint_properties() -> IndexMap<String, PropertyDefinition> {
    let mut props = IndexMap::new();
    props.insert(
        "id".to_string(),
        PropertyDefinition::new(PropertyType::String).id(),
    );
    props.insert(
        "created".to_string(),
        PropertyDefinition::new(PropertyType::Date),
    );
    props.insert(
        "edited".to_string(),
        PropertyDefinition::new(PropertyType::Date),
    );
    props
}

/// Types that describe a registrable model.
pub trait Model {
    /// Returns the model definition.
    fn definition() -> ModelDefinition;
}

/// Options forwarded to [`ModelRegistry::read_model`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelSchemaOptions {
    /// Properties to drop.
    pub exclude: Vec<String>,
    /// Properties to drop from `required`.
    pub optional: Vec<String>,
    /// Drop `required` entirely. Ignored when `optional` is non-empty.
    pub partial: bool,
    /// Explicit schema title.
    pub title: Option<String>,
    /// Emit relation navigation properties.
    pub include_relations: bool,
}

impl ModelSchemaOptions {
    /// Title derived from the model name and the active options.
    pub fn title_for(&self, model: &str) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        let mut title = model.to_string();
        if !self.optional.is_empty() {
            title.push_str(&format!("Optional_{}_", self.optional.join("-")));
        } else if self.partial {
            title.push_str("Partial");
        }
        if !self.exclude.is_empty() {
            title.push_str(&format!("Excluding_{}_", self.exclude.join("-")));
        }
        if self.include_relations {
            title.push_str("WithRelations");
        }
        title
    }
}

#[derive(Debug, Clone)]
enum RegisteredModel {
    Definition(ModelDefinition),
    Schema(Map<String, Value>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ModelDocument {
    Many(Vec<ModelDefinition>),
    One(ModelDefinition),
}

/// Registry of models addressable by name.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: IndexMap<String, RegisteredModel>,
}

impl ModelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a model definition, replacing any model with the same name.
    pub fn register(&mut self, mut definition: ModelDefinition) -> AppResult<()> {
        if definition.name.trim().is_empty() {
            return Err(AppError::InvalidModel(
                "model name must not be empty".to_string(),
            ));
        }
        for relation in &definition.relations {
            if relation.target.trim().is_empty() {
                return Err(AppError::InvalidModel(format!(
                    "relation '{}' of '{}' has no target",
                    relation.name, definition.name
                )));
            }
        }
        if definition.blueprint {
            let mut merged = blueprint_properties();
            merged.extend(definition.properties);
            definition.properties = merged;
            definition.blueprint = false;
        }
        tracing::debug!(model = %definition.name, "registering model definition");
        self.models.insert(
            definition.name.clone(),
            RegisteredModel::Definition(definition),
        );
        Ok(())
    }

    /// Registers the definition supplied by a [`Model`] type.
    pub fn register_model<M: Model>(&mut self) -> AppResult<()> {
        self.register(M::definition())
    }

    /// Registers a raw JSON schema under `name`.
    pub fn register_schema(&mut self, name: impl Into<String>, schema: Value) -> AppResult<()> {
        let name = name.into();
        match schema {
            Value::Object(map) => {
                tracing::debug!(model = %name, "registering raw schema");
                self.models.insert(name, RegisteredModel::Schema(map));
                Ok(())
            }
            other => Err(AppError::InvalidModel(format!(
                "schema for '{}' must be an object, got {}",
                name, other
            ))),
        }
    }

    /// Registers a `utoipa` schema type under its schema name.
    pub fn register_type<T: ToSchema>(&mut self) -> AppResult<()> {
        let schema = serde_json::to_value(<T as PartialSchema>::schema())?;
        self.register_schema(T::name().into_owned(), schema)
    }

    /// Registers one definition or a list of definitions from YAML.
    pub fn register_yaml(&mut self, yaml: &str) -> AppResult<()> {
        let doc: ModelDocument = serde_yaml::from_str(yaml)?;
        self.register_document(doc)
    }

    /// Registers one definition or a list of definitions from JSON.
    pub fn register_json(&mut self, json: &str) -> AppResult<()> {
        let doc: ModelDocument = serde_json::from_str(json)?;
        self.register_document(doc)
    }

    fn register_document(&mut self, doc: ModelDocument) -> AppResult<()> {
        match doc {
            ModelDocument::One(def) => self.register(def),
            ModelDocument::Many(defs) => defs.into_iter().try_for_each(|d| self.register(d)),
        }
    }

    /// Returns `true` if a model named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Returns the typed definition of `name`, if it was registered as one.
    pub fn get(&self, name: &str) -> Option<&ModelDefinition> {
        match self.models.get(name)? {
            RegisteredModel::Definition(def) => Some(def),
            RegisteredModel::Schema(_) => None,
        }
    }

    /// Registered model names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Builds the schema of a registered model.
    ///
    /// Returns `None` when no model named `name` is registered.
    pub fn read_model(&self, name: &str, options: &ModelSchemaOptions) -> Option<Map<String, Value>> {
        let mut visited = Vec::new();
        self.read_model_inner(name, options, &mut visited)
    }

    fn read_model_inner(
        &self,
        name: &str,
        options: &ModelSchemaOptions,
        visited: &mut Vec<String>,
    ) -> Option<Map<String, Value>> {
        let entry = self.models.get(name)?;
        visited.push(name.to_string());

        let mut schema = match entry {
            RegisteredModel::Definition(def) => {
                let mut schema = def.base_schema();
                if options.include_relations {
                    self.insert_relations(def, &mut schema, visited);
                }
                schema
            }
            RegisteredModel::Schema(raw) => raw.clone(),
        };
        visited.pop();

        apply_model_options(&mut schema, options);
        schema.insert("title".to_string(), json!(options.title_for(name)));
        schema.insert(TYPE_HINT_KEY.to_string(), json!(name));
        Some(schema)
    }

    fn insert_relations(
        &self,
        def: &ModelDefinition,
        schema: &mut Map<String, Value>,
        visited: &mut Vec<String>,
    ) {
        let nested_options = ModelSchemaOptions {
            include_relations: true,
            ..Default::default()
        };
        let Some(properties) = schema.get_mut("properties").and_then(Value::as_object_mut) else {
            return;
        };

        for relation in &def.relations {
            let target = if visited.iter().any(|v| v == &relation.target) {
                json!({
                    "$ref": format!(
                        "#/components/schemas/{}",
                        nested_options.title_for(&relation.target)
                    )
                })
            } else {
                match self.read_model_inner(&relation.target, &nested_options, visited) {
                    Some(mut target) => {
                        target.remove(TYPE_HINT_KEY);
                        Value::Object(target)
                    }
                    None => {
                        tracing::debug!(
                            model = %def.name,
                            relation = %relation.name,
                            target = %relation.target,
                            "relation target is not registered, skipping"
                        );
                        continue;
                    }
                }
            };

            let value = match relation.kind {
                RelationKind::HasMany => json!({ "type": "array", "items": target }),
                RelationKind::BelongsTo | RelationKind::HasOne => target,
            };
            properties.insert(relation.name.clone(), value);
        }
    }
}

/// Applies exclude / optional / partial to a model schema.
fn apply_model_options(schema: &mut Map<String, Value>, options: &ModelSchemaOptions) {
    if !options.exclude.is_empty() {
        if let Some(props) = schema.get_mut("properties").and_then(Value::as_object_mut) {
            props.retain(|key, _| !options.exclude.contains(key));
        }
    }

    let drop_required = options.optional.is_empty() && options.partial;
    if drop_required {
        schema.remove("required");
        return;
    }

    let mut now_empty = false;
    if let Some(required) = schema.get_mut("required").and_then(Value::as_array_mut) {
        required.retain(|v| {
            v.as_str().is_some_and(|name| {
                !options.exclude.iter().any(|e| e == name)
                    && !options.optional.iter().any(|o| o == name)
            })
        });
        now_empty = required.is_empty();
    }
    if now_empty {
        schema.remove("required");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use utoipa::openapi::schema::{ObjectBuilder, Schema, Type};
    use utoipa::openapi::RefOr;

    fn todo_model() -> ModelDefinition {
        ModelDefinition::blueprint("Todo")
            .with_property(
                "title",
                PropertyDefinition::new(PropertyType::String).required(),
            )
            .with_property(
                "done",
                PropertyDefinition::new(PropertyType::Boolean)
                    .required()
                    .with_default(json!(false)),
            )
            .with_property(
                "tags",
                PropertyDefinition::new(PropertyType::Array).with_items(PropertyType::String),
            )
    }

    fn registry() -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        registry.register(todo_model()).unwrap();
        registry
    }

    fn keys(schema: &Map<String, Value>) -> Vec<String> {
        schema["properties"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_read_model_base_schema() {
        let schema = registry()
            .read_model("Todo", &ModelSchemaOptions::default())
            .unwrap();
        assert_eq!(schema["title"], json!("Todo"));
        assert_eq!(schema["type"], json!("object"));
        assert_eq!(keys(&schema), vec!["id", "created", "edited", "title", "done", "tags"]);
        assert_eq!(schema["required"], json!(["title", "done"]));
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(schema[TYPE_HINT_KEY], json!("Todo"));
        assert_eq!(
            schema["properties"]["created"],
            json!({ "type": "string", "format": "date-time" })
        );
        assert_eq!(
            schema["properties"]["tags"],
            json!({ "type": "array", "items": { "type": "string" } })
        );
        assert_eq!(schema["properties"]["done"]["default"], json!(false));
    }

    #[test]
    fn test_read_model_unknown_is_none() {
        assert!(registry()
            .read_model("Missing", &ModelSchemaOptions::default())
            .is_none());
    }

    #[test]
    fn test_exclude_drops_properties_and_required() {
        let options = ModelSchemaOptions {
            exclude: vec!["id".into(), "title".into()],
            ..Default::default()
        };
        let schema = registry().read_model("Todo", &options).unwrap();
        assert_eq!(keys(&schema), vec!["created", "edited", "done", "tags"]);
        assert_eq!(schema["required"], json!(["done"]));
        assert_eq!(schema["title"], json!("TodoExcluding_id-title_"));
    }

    #[test]
    fn test_partial_drops_required() {
        let options = ModelSchemaOptions {
            partial: true,
            ..Default::default()
        };
        let schema = registry().read_model("Todo", &options).unwrap();
        assert!(!schema.contains_key("required"));
        assert_eq!(schema["title"], json!("TodoPartial"));
    }

    #[test]
    fn test_optional_wins_over_partial() {
        let options = ModelSchemaOptions {
            partial: true,
            optional: vec!["title".into()],
            ..Default::default()
        };
        let schema = registry().read_model("Todo", &options).unwrap();
        assert_eq!(schema["required"], json!(["done"]));
        assert_eq!(schema["title"], json!("TodoOptional_title_"));
    }

    #[test]
    fn test_explicit_title() {
        let options = ModelSchemaOptions {
            title: Some("NewTodo".into()),
            exclude: vec!["id".into()],
            ..Default::default()
        };
        let schema = registry().read_model("Todo", &options).unwrap();
        assert_eq!(schema["title"], json!("NewTodo"));
    }

    #[test]
    fn test_relations_are_embedded_and_cycles_terminate() {
        let mut registry = ModelRegistry::new();
        registry
            .register(
                ModelDefinition::blueprint("User")
                    .with_property("name", PropertyDefinition::new(PropertyType::String))
                    .with_relation("todos", "Todo", RelationKind::HasMany),
            )
            .unwrap();
        registry
            .register(todo_model().with_relation("owner", "User", RelationKind::BelongsTo))
            .unwrap();

        let plain = registry
            .read_model("User", &ModelSchemaOptions::default())
            .unwrap();
        assert!(!plain["properties"].as_object().unwrap().contains_key("todos"));

        let options = ModelSchemaOptions {
            include_relations: true,
            ..Default::default()
        };
        let schema = registry.read_model("User", &options).unwrap();
        assert_eq!(schema["title"], json!("UserWithRelations"));
        let todos = &schema["properties"]["todos"];
        assert_eq!(todos["type"], json!("array"));
        assert_eq!(todos["items"]["title"], json!("TodoWithRelations"));
        assert!(todos["items"].get(TYPE_HINT_KEY).is_none());
        assert_eq!(
            todos["items"]["properties"]["owner"],
            json!({ "$ref": "#/components/schemas/UserWithRelations" })
        );
    }

    #[test]
    fn test_missing_relation_target_is_skipped() {
        let mut registry = ModelRegistry::new();
        registry
            .register(ModelDefinition::new("Order").with_relation(
                "customer",
                "Customer",
                RelationKind::BelongsTo,
            ))
            .unwrap();
        let options = ModelSchemaOptions {
            include_relations: true,
            ..Default::default()
        };
        let schema = registry.read_model("Order", &options).unwrap();
        assert!(schema["properties"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_register_rejects_empty_name() {
        let err = ModelRegistry::new()
            .register(ModelDefinition::new("  "))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidModel(_)));
    }

    #[test]
    fn test_register_yaml_list_with_blueprint() {
        let yaml = r#"
- name: Note
  blueprint: true
  properties:
    body:
      type: string
      required: true
- name: Tag
  strict: false
  properties:
    label:
      type: string
      enum: [red, green]
"#;
        let mut registry = ModelRegistry::new();
        registry.register_yaml(yaml).unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Note", "Tag"]);

        let note = registry.get("Note").unwrap();
        assert_eq!(note.id_property(), Some("id"));
        let keys: Vec<&String> = note.properties.keys().collect();
        assert_eq!(keys, vec!["id", "created", "edited", "body"]);

        let tag = registry
            .read_model("Tag", &ModelSchemaOptions::default())
            .unwrap();
        assert_eq!(tag["additionalProperties"], json!(true));
        assert_eq!(tag["properties"]["label"]["enum"], json!(["red", "green"]));
    }

    #[test]
    fn test_register_json_single() {
        let mut registry = ModelRegistry::new();
        registry
            .register_json(r#"{"name": "Ping", "properties": {"at": {"type": "date"}}}"#)
            .unwrap();
        assert!(registry.contains("Ping"));
    }

    #[test]
    fn test_register_yaml_rejects_garbage() {
        let err = ModelRegistry::new().register_yaml("- 1\n- 2\n").unwrap_err();
        assert!(matches!(err, AppError::Yaml(_)));
    }

    #[test]
    fn test_register_schema_rejects_non_object() {
        let err = ModelRegistry::new()
            .register_schema("Bad", json!("string"))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidModel(_)));
    }

    struct Pet;

    impl PartialSchema for Pet {
        fn schema() -> RefOr<Schema> {
            ObjectBuilder::new()
                .schema_type(Type::Object)
                .property("name", ObjectBuilder::new().schema_type(Type::String))
                .property("age", ObjectBuilder::new().schema_type(Type::Integer))
                .required("name")
                .into()
        }
    }

    impl ToSchema for Pet {
        fn name() -> Cow<'static, str> {
            Cow::Borrowed("Pet")
        }
    }

    #[test]
    fn test_register_utoipa_type() {
        let mut registry = ModelRegistry::new();
        registry.register_type::<Pet>().unwrap();
        assert!(registry.get("Pet").is_none());

        let options = ModelSchemaOptions {
            exclude: vec!["age".into()],
            ..Default::default()
        };
        let schema = registry.read_model("Pet", &options).unwrap();
        assert_eq!(keys(&schema), vec!["name"]);
        assert_eq!(schema["required"], json!(["name"]));
        assert_eq!(schema["properties"]["name"]["type"], json!("string"));
        assert_eq!(schema[TYPE_HINT_KEY], json!("Pet"));
    }

    #[test]
    fn test_sibling_relations_to_same_target_are_inline() {
        let mut registry = ModelRegistry::new();
        registry.register(todo_model()).unwrap();
        registry
            .register(
                ModelDefinition::new("User")
                    .with_relation("todos", "Todo", RelationKind::HasMany)
                    .with_relation("pinned", "Todo", RelationKind::BelongsTo),
            )
            .unwrap();
        let options = ModelSchemaOptions {
            include_relations: true,
            ..Default::default()
        };
        let schema = registry.read_model("User", &options).unwrap();
        let props = &schema["properties"];
        assert_eq!(
            props["todos"]["items"]["properties"]["title"],
            json!({ "type": "string" })
        );
        assert_eq!(props["pinned"]["title"], json!("TodoWithRelations"));
        assert_eq!(
            props["pinned"]["properties"]["title"],
            json!({ "type": "string" })
        );
    }

    #[test]
    fn test_shared_target_below_another_relation_is_inline() {
        let mut registry = ModelRegistry::new();
        registry
            .register(
                ModelDefinition::new("A")
                    .with_relation("b", "B", RelationKind::BelongsTo)
                    .with_relation("c", "C", RelationKind::BelongsTo),
            )
            .unwrap();
        registry
            .register(
                ModelDefinition::new("B")
                    .with_property("label", PropertyDefinition::new(PropertyType::String)),
            )
            .unwrap();
        registry
            .register(ModelDefinition::new("C").with_relation("b", "B", RelationKind::HasOne))
            .unwrap();
        let options = ModelSchemaOptions {
            include_relations: true,
            ..Default::default()
        };
        let schema = registry.read_model("A", &options).unwrap();
        let c_b = &schema["properties"]["c"]["properties"]["b"];
        assert!(c_b.get("$ref").is_none());
        assert_eq!(c_b["properties"]["label"], json!({ "type": "string" }));
    }

    #[test]
    fn test_builder_description_format_enum_strict() {
        let mut registry = ModelRegistry::new();
        registry
            .register(
                ModelDefinition::new("Contact")
                    .with_strict(false)
                    .with_property(
                        "email",
                        PropertyDefinition::new(PropertyType::String)
                            .with_format("email")
                            .with_description("Primary address"),
                    )
                    .with_property(
                        "kind",
                        PropertyDefinition::new(PropertyType::String)
                            .with_enum([json!("home"), json!("work")]),
                    ),
            )
            .unwrap();
        let schema = registry
            .read_model("Contact", &ModelSchemaOptions::default())
            .unwrap();
        assert_eq!(schema["additionalProperties"], json!(true));
        assert_eq!(
            schema["properties"]["email"],
            json!({ "type": "string", "format": "email", "description": "Primary address" })
        );
        assert_eq!(schema["properties"]["kind"]["enum"], json!(["home", "work"]));
    }

    struct Invoice;

    impl Model for Invoice {
        fn definition() -> ModelDefinition {
            ModelDefinition::blueprint("Invoice").with_property(
                "total",
                PropertyDefinition::new(PropertyType::Number).required(),
            )
        }
    }

    #[test]
    fn test_register_model_trait() {
        let mut registry = ModelRegistry::new();
        registry.register_model::<Invoice>().unwrap();
        let schema = registry
            .read_model("Invoice", &ModelSchemaOptions::default())
            .unwrap();
        assert_eq!(schema["properties"]["total"], json!({ "type": "number" }));
    }
}
