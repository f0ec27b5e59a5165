#![deny(missing_docs)]

//! # OAS Shorthand Core
//!
//! Turns compact shorthand descriptors and registered models into OpenAPI
//! request / response body fragments.

/// Shared error types.
pub mod error;

/// Reserved schema keyword names.
pub mod keywords;

/// Shorthand descriptor compiler.
pub mod compiler;

/// Model definitions and schema lookup.
pub mod registry;

/// OpenAPI body fragment generation.
pub mod generate;

/// Built-in shorthand descriptors.
pub mod templates;

/// Add / remove helpers for string lists.
pub mod array;

/// Record filters applied before persistence.
pub mod filter;

pub use array::toggle;
pub use compiler::{compile, compile_value, SchemaNode};
pub use error::{AppError, AppResult};
pub use filter::RecordFilter;
pub use generate::{generate, GenerateOptions, Source, JSON_MEDIA_TYPE};
pub use keywords::{is_schema_keyword, SCHEMA_KEYWORDS};
pub use registry::{
    Model, ModelDefinition, ModelRegistry, ModelSchemaOptions, PropertyDefinition, PropertyType,
    RelationDefinition, RelationKind, TYPE_HINT_KEY,
};
