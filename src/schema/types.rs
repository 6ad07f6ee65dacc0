//! Schema types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prefix of every local definition reference
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Named schema definitions
pub type Definitions = BTreeMap<String, SchemaProperty>;

/// Swagger schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Integer,
    Object,
    Array,
}

/// A schema node: a typed property, a `$ref`, or the empty schema `{}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaProperty {
    /// Reference to a named definition
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Property type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    /// Format hint (e.g., "int64")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Nested properties (for objects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, SchemaProperty>>,

    /// Array items schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaProperty>>,
}

impl SchemaProperty {
    /// The empty schema `{}` (no type assigned)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a new property with the given type
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    /// `{type: string}`
    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    /// `{type: integer, format: int64}`
    pub fn int64() -> Self {
        Self::new(SchemaType::Integer).with_format("int64")
    }

    /// Create an object property with nested properties
    pub fn object(properties: BTreeMap<String, SchemaProperty>) -> Self {
        Self {
            schema_type: Some(SchemaType::Object),
            properties: Some(properties),
            ..Self::default()
        }
    }

    /// Create an array property with item schema
    pub fn array(items: SchemaProperty) -> Self {
        Self {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// Create a `$ref` to the named definition
    pub fn reference(name: &str) -> Self {
        Self {
            reference: Some(format!("{DEFINITIONS_PREFIX}{name}")),
            ..Self::default()
        }
    }

    /// Set format hint
    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Name of the referenced definition, if this is a local `$ref`
    #[cfg(test)]
    pub fn reference_name(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .and_then(|r| r.strip_prefix(DEFINITIONS_PREFIX))
    }

    /// Check if this is the empty schema
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Get a nested property
    #[cfg(test)]
    pub fn get_property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.as_ref().and_then(|props| props.get(name))
    }
}
