#![deny(missing_docs)]

//! # Templates
//!
//! Ready-made shorthand descriptors for common authentication and status
//! payloads. Each returns a fresh descriptor to pass to
//! [`generate`](crate::generate::generate) or [`compile`](crate::compiler::compile).

use serde_json::{json, Map, Value};

fn descriptor(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Login credentials.
pub fn login() -> Map<String, Value> {
    descriptor(json!({
        "email": { "type": "string", "format": "email" },
        "password": "string",
        "remember": "boolean"
    }))
}

/// Issued access token with its refresh token.
///
/// Contains a field literally named `type`, placed after other fields so it
/// compiles as a property rather than the object's own type.
pub fn token() -> Map<String, Value> {
    descriptor(json!({
        "email": { "type": "string", "format": "email" },
        "userId": "string",
        "token": "string",
        "expiresIn": "number",
        "type": "string",
        "refresh": {
            "type": "object",
            "properties": {
                "token": { "type": "string" },
                "expiresIn": { "type": "number" }
            }
        }
    }))
}

/// `{success: boolean}`.
pub fn success() -> Map<String, Value> {
    descriptor(json!({ "success": "boolean" }))
}

/// `{valid: boolean}`.
pub fn valid() -> Map<String, Value> {
    descriptor(json!({ "valid": "boolean" }))
}

/// `{count: number}`.
pub fn count() -> Map<String, Value> {
    descriptor(json!({ "count": "number" }))
}

/// `{exists: boolean}`.
pub fn exists() -> Map<String, Value> {
    descriptor(json!({ "exists": "boolean" }))
}

/// Looks a template up by name.
pub fn by_name(name: &str) -> Option<Map<String, Value>> {
    match name {
        "login" => Some(login()),
        "token" => Some(token()),
        "success" => Some(success()),
        "valid" => Some(valid()),
        "count" => Some(count()),
        "exists" => Some(exists()),
        _ => None,
    }
}

/// Names accepted by [`by_name`].
pub const TEMPLATE_NAMES: &[&str] = &["login", "token", "success", "valid", "count", "exists"];
