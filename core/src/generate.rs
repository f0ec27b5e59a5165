#![deny(missing_docs)]

//! # Fragment Generator
//!
//! Builds OpenAPI request / response body fragments of the form
//! `{description, content: {"application/json": {schema}}}` from either a
//! shorthand descriptor or a registered model, then reshapes the schema with
//! [`GenerateOptions`].

use crate::compiler::{compile, SchemaNode};
use crate::registry::{ModelRegistry, ModelSchemaOptions, TYPE_HINT_KEY};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Media type of every generated fragment.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Where a schema comes from.
///
/// Deserializes untagged: a string names a registered model, an object is a
/// shorthand descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    /// A model resolved through the [`ModelRegistry`].
    Model(String),
    /// A shorthand descriptor compiled with [`compile`].
    Shorthand(Map<String, Value>),
}

impl Source {
    /// A registered model by name.
    pub fn model(name: impl Into<String>) -> Self {
        Source::Model(name.into())
    }

    /// A shorthand descriptor. Non-object values yield an empty descriptor.
    pub fn shorthand(value: Value) -> Self {
        match value {
            Value::Object(map) => Source::Shorthand(map),
            _ => Source::Shorthand(Map::new()),
        }
    }

    /// Resolves the source into a schema. `None` when a model is unknown.
    fn resolve(
        &self,
        registry: &ModelRegistry,
        options: &ModelSchemaOptions,
    ) -> Option<Map<String, Value>> {
        match self {
            Source::Model(name) => registry.read_model(name, options),
            Source::Shorthand(descriptor) => Some(compile(descriptor, true)),
        }
    }
}

impl From<Map<String, Value>> for Source {
    fn from(map: Map<String, Value>) -> Self {
        Source::Shorthand(map)
    }
}

impl From<&SchemaNode> for Source {
    fn from(node: &SchemaNode) -> Self {
        Source::shorthand(node.to_shorthand())
    }
}

/// Options controlling [`generate`].
///
/// Every field defaults, so partial option documents deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateOptions {
    /// Wrap the final schema as `{type: array, items: schema}`.
    pub array: bool,
    /// Forwarded to model reading: drop `required`.
    pub partial: bool,
    /// Replace rather than merge the schema's `required` list.
    pub overwrite_required: bool,
    /// Properties to remove. Takes priority over `pick`.
    pub exclude: Vec<String>,
    /// Properties marked `required: false`.
    pub optional: Vec<String>,
    /// Properties to keep; everything else is removed.
    pub pick: Vec<String>,
    /// Per-property schema replacement.
    pub overwrite: IndexMap<String, Source>,
    /// Per-property schema replacement, wrapped as an array.
    pub overwrite_array: IndexMap<String, Source>,
    /// Required property names.
    pub required: Vec<String>,
    /// Forwarded to model reading: explicit schema title.
    pub title: Option<String>,
    /// Forwarded to model reading: emit relation properties.
    pub include_relations: bool,
}

impl GenerateOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the schema as an array.
    pub fn with_array(mut self, array: bool) -> Self {
        self.array = array;
        self
    }

    /// Sets partial model reading.
    pub fn with_partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    /// Replaces instead of merging `required`.
    pub fn with_overwrite_required(mut self, overwrite: bool) -> Self {
        self.overwrite_required = overwrite;
        self
    }

    /// Sets the exclude list.
    pub fn with_exclude<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the optional list.
    pub fn with_optional<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.optional = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the pick list.
    pub fn with_pick<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.pick = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the required list.
    pub fn with_required<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.required = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces property `key` with the schema of `source`.
    pub fn with_overwrite(mut self, key: impl Into<String>, source: Source) -> Self {
        self.overwrite.insert(key.into(), source);
        self
    }

    /// Replaces property `key` with an array of `source`.
    pub fn with_overwrite_array(mut self, key: impl Into<String>, source: Source) -> Self {
        self.overwrite_array.insert(key.into(), source);
        self
    }

    /// Sets the title forwarded to model reading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Emits relation properties of models.
    pub fn with_relations(mut self, include: bool) -> Self {
        self.include_relations = include;
        self
    }

    /// The subset of options forwarded to [`ModelRegistry::read_model`].
    pub fn model_options(&self) -> ModelSchemaOptions {
        ModelSchemaOptions {
            exclude: self.exclude.clone(),
            optional: self.optional.clone(),
            partial: self.partial,
            title: self.title.clone(),
            include_relations: self.include_relations,
        }
    }
}

/// Generates an OpenAPI body fragment.
///
/// Steps, in order: resolve the schema, exclude XOR pick, mark optional
/// properties, apply `overwrite` then `overwrite_array`, merge `required`
/// (noting it in the description), and wrap as an array when requested.
///
/// Never fails. An unknown model yields `{type: "array", properties: {}}`.
///
/// # Arguments
///
/// * `registry` - Models available to `Source::Model` lookups.
/// * `source` - The schema source.
/// * `description` - Human readable description of the body.
/// * `options` - Reshaping options.
pub fn generate(
    registry: &ModelRegistry,
    source: &Source,
    description: &str,
    options: &GenerateOptions,
) -> Value {
    let model_options = options.model_options();
    let mut schema = source
        .resolve(registry, &model_options)
        .unwrap_or_else(|| {
            tracing::debug!(source = ?source, "model is not registered, using empty schema");
            empty_model_schema()
        });

    filter_properties(&mut schema, options);
    mark_optional(&mut schema, &options.optional);

    if let Some(properties) = schema.get_mut("properties").and_then(Value::as_object_mut) {
        for (key, source) in &options.overwrite {
            tracing::debug!(property = %key, "overwriting property schema");
            let replacement = resolve_overwrite(registry, source, &model_options);
            properties.insert(key.clone(), replacement);
        }
        for (key, source) in &options.overwrite_array {
            tracing::debug!(property = %key, "overwriting property schema with array");
            let items = resolve_overwrite(registry, source, &model_options);
            properties.insert(key.clone(), json!({ "type": "array", "items": items }));
        }
    }

    let mut description = description.to_string();
    let required = merge_required(&schema, options);
    if required.is_empty() {
        schema.remove("required");
    } else {
        description = format!("{} (required: {})", description, required.join(", "));
        schema.insert("required".to_string(), json!(required));
    }

    let schema = if options.array {
        json!({ "type": "array", "items": schema })
    } else {
        Value::Object(schema)
    };

    json!({
        "description": description,
        "content": {
            JSON_MEDIA_TYPE: { "schema": schema }
        }
    })
}

fn empty_model_schema() -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("array"));
    schema.insert("properties".to_string(), Value::Object(Map::new()));
    schema
}

fn filter_properties(schema: &mut Map<String, Value>, options: &GenerateOptions) {
    let Some(properties) = schema.get_mut("properties").and_then(Value::as_object_mut) else {
        return;
    };
    if !options.exclude.is_empty() {
        properties.retain(|key, _| !options.exclude.contains(key));
    } else if !options.pick.is_empty() {
        properties.retain(|key, _| options.pick.contains(key));
    }
}

fn mark_optional(schema: &mut Map<String, Value>, optional: &[String]) {
    if optional.is_empty() {
        return;
    }
    let Some(properties) = schema.get_mut("properties").and_then(Value::as_object_mut) else {
        return;
    };
    for (key, property) in properties.iter_mut() {
        if !optional.contains(key) {
            continue;
        }
        if let Some(obj) = property.as_object_mut() {
            obj.insert("required".to_string(), json!(false));
        }
    }
}

fn resolve_overwrite(
    registry: &ModelRegistry,
    source: &Source,
    model_options: &ModelSchemaOptions,
) -> Value {
    let mut schema = source.resolve(registry, model_options).unwrap_or_default();
    schema.remove(TYPE_HINT_KEY);
    Value::Object(schema)
}

/// Existing `required` names followed by the requested ones, without
/// duplicates. `overwrite_required` discards the existing names.
fn merge_required(schema: &Map<String, Value>, options: &GenerateOptions) -> Vec<String> {
    let existing = schema
        .get("required")
        .and_then(Value::as_array)
        .filter(|_| !options.overwrite_required)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str);

    let mut merged: Vec<String> = Vec::new();
    for name in existing.chain(options.required.iter().map(String::as_str)) {
        if !merged.iter().any(|m| m == name) {
            merged.push(name.to_string());
        }
    }
    merged
}
