#![deny(missing_docs)]

//! # Schema Keywords
//!
//! The reserved OpenAPI Schema Object keyword names. A shorthand descriptor
//! key found in this set is never treated as a field name to be type-wrapped,
//! unless the keyword heuristic in [`crate::compiler`] decides otherwise.

/// Reserved schema keyword names.
pub const SCHEMA_KEYWORDS: &[&str] = &[
    "nullable",
    "discriminator",
    "readOnly",
    "writeOnly",
    "xml",
    "externalDocs",
    "example",
    "examples",
    "deprecated",
    "type",
    "format",
    "allOf",
    "oneOf",
    "anyOf",
    "not",
    "items",
    "properties",
    "additionalProperties",
    "description",
    "default",
    "title",
    "multipleOf",
    "maximum",
    "exclusiveMaximum",
    "minimum",
    "exclusiveMinimum",
    "maxLength",
    "minLength",
    "pattern",
    "maxItems",
    "minItems",
    "uniqueItems",
    "maxProperties",
    "minProperties",
    "required",
    "enum",
    "$ref",
];

/// Returns `true` if `key` is a reserved schema keyword.
pub fn is_schema_keyword(key: &str) -> bool {
    SCHEMA_KEYWORDS.contains(&key)
}
