#![deny(missing_docs)]

//! # Shorthand Compiler
//!
//! Converts a shorthand descriptor into a normalized schema tree.
//!
//! A shorthand descriptor is a JSON object where:
//! - a string value names a primitive type (`"name": "string"` becomes
//!   `"name": {"type": "string"}`),
//! - a nested object is itself a descriptor,
//! - keys from [`SCHEMA_KEYWORDS`](crate::keywords::SCHEMA_KEYWORDS) carry
//!   their value verbatim.
//!
//! The compiler is permissive: values it does not understand are forwarded
//! unchanged and it never fails.

use crate::keywords::is_schema_keyword;
use indexmap::IndexMap;
use serde_json::{json, Map, Value};

/// Compiles a shorthand descriptor.
///
/// At top level a descriptor without a `properties` key is treated as a flat
/// field map and wrapped as `{"type": "object", "properties": descriptor}`.
///
/// A string under a keyword key is emitted verbatim only while the output
/// holds no non-keyword keys; once a field name has been seen, a later
/// `"type": "string"` is read as a field literally called `type`. This
/// depends on key order and is ambiguous for objects mixing both.
///
/// # Arguments
///
/// * `descriptor` - The shorthand descriptor. Not modified.
/// * `top_level` - Whether this is the outermost call.
pub fn compile(descriptor: &Map<String, Value>, top_level: bool) -> Map<String, Value> {
    if top_level && !descriptor.contains_key("properties") {
        let mut wrapped = Map::new();
        wrapped.insert("type".to_string(), json!("object"));
        wrapped.insert("properties".to_string(), Value::Object(descriptor.clone()));
        return compile(&wrapped, false);
    }

    let mut out = Map::new();
    for (key, value) in descriptor {
        let compiled = match value {
            Value::String(type_name) => {
                if is_schema_keyword(key) && !has_field_keys(&out) {
                    value.clone()
                } else {
                    json!({ "type": type_name })
                }
            }
            Value::Object(nested) => {
                tracing::trace!(key = %key, "compiling nested descriptor");
                Value::Object(compile(nested, false))
            }
            other => other.clone(),
        };
        out.insert(key.clone(), compiled);
    }
    out
}

/// Compiles an arbitrary JSON value.
///
/// Objects are compiled at top level; every other value is returned as is.
pub fn compile_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(compile(map, true)),
        other => other.clone(),
    }
}

fn has_field_keys(out: &Map<String, Value>) -> bool {
    out.keys().any(|k| !is_schema_keyword(k))
}

/// A typed schema node.
///
/// Nodes lower into shorthand descriptors via [`SchemaNode::to_shorthand`].
/// Literals lower to explicit `{"type": ..}` objects, so a field named after
/// a keyword is never subject to the keyword heuristic.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A primitive type, optionally with a format.
    Literal {
        /// The JSON type name (`string`, `number`, ...).
        type_name: String,
        /// Optional format (`email`, `date-time`, ...).
        format: Option<String>,
    },
    /// A reference to a named component schema.
    Reference(String),
    /// An object with ordered fields.
    Object(IndexMap<String, SchemaNode>),
    /// An array of items.
    Array(Box<SchemaNode>),
}

impl SchemaNode {
    /// Creates a literal node.
    pub fn literal(type_name: impl Into<String>) -> Self {
        SchemaNode::Literal {
            type_name: type_name.into(),
            format: None,
        }
    }

    /// Creates a literal node with a format.
    pub fn formatted(type_name: impl Into<String>, format: impl Into<String>) -> Self {
        SchemaNode::Literal {
            type_name: type_name.into(),
            format: Some(format.into()),
        }
    }

    /// Creates a reference to `#/components/schemas/<name>`.
    pub fn reference(name: impl Into<String>) -> Self {
        SchemaNode::Reference(name.into())
    }

    /// Creates an object node from `(name, node)` pairs.
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, SchemaNode)>) -> Self {
        SchemaNode::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Creates an array node.
    pub fn array(item: SchemaNode) -> Self {
        SchemaNode::Array(Box::new(item))
    }

    /// Lowers the node into a shorthand descriptor value.
    pub fn to_shorthand(&self) -> Value {
        match self {
            SchemaNode::Literal { type_name, format } => {
                let mut obj = Map::new();
                obj.insert("type".to_string(), json!(type_name));
                if let Some(f) = format {
                    obj.insert("format".to_string(), json!(f));
                }
                Value::Object(obj)
            }
            SchemaNode::Reference(name) => {
                json!({ "$ref": format!("#/components/schemas/{}", name) })
            }
            SchemaNode::Object(fields) => {
                let properties: Map<String, Value> = fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_shorthand()))
                    .collect();
                json!({ "type": "object", "properties": properties })
            }
            SchemaNode::Array(item) => json!({ "type": "array", "items": item.to_shorthand() }),
        }
    }

    /// Lowers and compiles the node.
    pub fn compile(&self) -> Value {
        compile_value(&self.to_shorthand())
    }
}
