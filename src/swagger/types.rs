//! Swagger 2.0 document types
//!
//! Only the subset of the format the converter emits. All maps are ordered so
//! that serialising the same document twice gives identical bytes.

use crate::schema::{Definitions, SchemaProperty};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Swagger version tag written into every document
pub const SWAGGER_VERSION: &str = "2.0";

/// Media type for JSON request bodies
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Media type for form request bodies
pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Operations under one path, keyed by lower-cased HTTP method
pub type PathItem = BTreeMap<String, Operation>;

/// All paths, keyed by canonical path string
pub type Paths = BTreeMap<String, PathItem>;

// ============================================================================
// Document
// ============================================================================

/// Top-level Swagger 2.0 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    /// Always `"2.0"`
    pub swagger: String,
    /// API metadata
    pub info: Info,
    /// Host serving the API
    pub host: String,
    /// Transfer protocols
    pub schemes: Vec<String>,
    /// Tag list, `default` first
    pub tags: Vec<Tag>,
    /// Path map
    pub paths: Paths,
    /// Inferred response schemas
    pub definitions: Definitions,
}

/// API metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
    pub contact: Contact,
}

/// Contact block (emitted empty)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {}

/// A named group of operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub description: String,
}

impl Tag {
    /// Create a tag
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

// ============================================================================
// Operation
// ============================================================================

/// One HTTP method under one path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Exactly one tag: the enclosing folder name or `default`
    pub tags: Vec<String>,
    pub summary: String,
    pub description: String,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
    /// Never absent; empty when nothing applies
    pub parameters: Vec<Parameter>,
    /// Responses keyed by status code string
    pub responses: BTreeMap<String, ResponseSpec>,
}

/// Where a parameter is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterLocation {
    #[serde(rename = "path")]
    Path,
    #[serde(rename = "formData")]
    FormData,
}

/// An operation parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub description: String,
    /// Only emitted for path parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Parameter {
    /// A required `integer/int64` path parameter
    pub fn path(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Path,
            description: String::new(),
            required: Some(true),
            param_type: "integer".to_string(),
            format: Some("int64".to_string()),
        }
    }

    /// A `string` form-data parameter
    pub fn form_data(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::FormData,
            description: description.into(),
            required: None,
            param_type: "string".to_string(),
            format: None,
        }
    }
}

/// One documented response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSpec {
    /// The example's display name
    pub description: String,
    /// Reference to the envelope definition; absent for empty bodies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaProperty>,
}
