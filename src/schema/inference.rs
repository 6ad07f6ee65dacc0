//! Schema inference from example response bodies
//!
//! Every response body is read as an envelope `{msg, errcode, data}`. The
//! envelope is registered under a key derived from a hash, and an object found
//! under `data` is registered under that key plus `"data"`.

use super::registry::DefinitionRegistry;
use super::types::SchemaProperty;
use crate::swagger::ResponseSpec;
use crate::types::{JsonObject, JsonValue};
use md5::{Digest, Md5};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use tracing::debug;

/// Suffix appended to an envelope key to name its `data` object schema
pub const DATA_SUFFIX: &str = "data";

/// Derive a registry key from arbitrary text: its MD5 digest as lower-case
/// hex (128 bits, 32 characters).
pub fn definition_key(seed: &str) -> String {
    Md5::digest(seed.as_bytes())
        .iter()
        .fold(String::with_capacity(32), |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        })
}

/// Infers response schemas and writes them into a registry
#[derive(Debug)]
pub struct SchemaInferrer<'r> {
    registry: &'r mut DefinitionRegistry,
}

impl<'r> SchemaInferrer<'r> {
    /// Create an inferrer writing into `registry`
    pub fn new(registry: &'r mut DefinitionRegistry) -> Self {
        Self { registry }
    }

    /// Infer the schema of one example response, keyed by its name
    pub fn infer(&mut self, name: &str, body_text: &str) -> ResponseSpec {
        self.infer_keyed(name, name, body_text)
    }

    /// Infer the schema of one example response, keyed by `key_seed`
    pub fn infer_keyed(&mut self, key_seed: &str, name: &str, body_text: &str) -> ResponseSpec {
        if body_text.is_empty() {
            return ResponseSpec {
                description: name.to_string(),
                schema: None,
            };
        }

        let body = parse_body_object(body_text);
        let key = definition_key(key_seed);
        debug!("Inferring envelope '{}' for response '{}'", key, name);

        let envelope = self.infer_envelope(&body, &key);
        self.registry.insert(key.clone(), envelope);

        ResponseSpec {
            description: name.to_string(),
            schema: Some(SchemaProperty::reference(&key)),
        }
    }

    /// Build the `{msg, errcode, data}` envelope schema of a body
    pub fn infer_envelope(&mut self, body: &JsonObject, key: &str) -> SchemaProperty {
        let mut properties = BTreeMap::new();
        properties.insert("msg".to_string(), SchemaProperty::string());
        properties.insert("errcode".to_string(), SchemaProperty::int64());
        properties.insert("data".to_string(), self.infer_data(body.get("data"), key));

        SchemaProperty::object(properties)
    }

    /// Infer the schema of a `data` value
    fn infer_data(&mut self, value: Option<&JsonValue>, parent_key: &str) -> SchemaProperty {
        match value {
            Some(JsonValue::Object(map)) => self.infer_data_object(map, parent_key),
            Some(JsonValue::Array(items)) => match items.first() {
                // Only the first element decides the item schema
                Some(first) => SchemaProperty::array(self.infer_data(Some(first), parent_key)),
                None => SchemaProperty::array(SchemaProperty::empty()),
            },
            Some(
                JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::String(_),
            )
            | None => SchemaProperty::empty(),
        }
    }

    /// Register a flat object schema for `map` and return a reference to it
    fn infer_data_object(&mut self, map: &JsonObject, parent_key: &str) -> SchemaProperty {
        let properties = map
            .iter()
            .map(|(field, value)| (field.clone(), infer_leaf(value)))
            .collect();

        let name = format!("{parent_key}{DATA_SUFFIX}");
        self.registry
            .insert(name.clone(), SchemaProperty::object(properties));

        SchemaProperty::reference(&name)
    }
}

/// Leaf type of an object field: numbers are int64, everything else a string
fn infer_leaf(value: &JsonValue) -> SchemaProperty {
    match value {
        JsonValue::Number(_) => SchemaProperty::int64(),
        JsonValue::Null
        | JsonValue::Bool(_)
        | JsonValue::String(_)
        | JsonValue::Array(_)
        | JsonValue::Object(_) => SchemaProperty::string(),
    }
}

/// Parse a body as a JSON object, wrapping anything else as `{"body": text}`
fn parse_body_object(body_text: &str) -> JsonObject {
    match serde_json::from_str::<JsonValue>(body_text) {
        Ok(JsonValue::Object(map)) => map,
        _ => {
            let mut wrapped = JsonObject::new();
            wrapped.insert("body".to_string(), JsonValue::String(body_text.to_string()));
            wrapped
        }
    }
}

/// Infer one response into `registry` (convenience function)
pub fn infer_response(
    registry: &mut DefinitionRegistry,
    name: &str,
    body_text: &str,
) -> ResponseSpec {
    SchemaInferrer::new(registry).infer(name, body_text)
}
