//! Collection types
//!
//! Typed view of a Postman collection: a tree of folders whose leaves are
//! example requests with their captured responses.

use serde::{Deserialize, Serialize};

/// Title used when the collection carries no `info.name`
pub const DEFAULT_TITLE: &str = "title";

// ============================================================================
// Collection
// ============================================================================

/// A parsed collection document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection metadata
    pub info: CollectionInfo,
    /// Root-level nodes, in document order
    pub items: Vec<CollectionNode>,
}

/// Collection metadata copied into the output `info` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Collection name
    pub name: String,
    /// Collection description
    #[serde(default)]
    pub description: String,
}

impl Default for CollectionInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_TITLE.to_string(),
            description: String::new(),
        }
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// One node of the collection tree.
///
/// Children are owned, so the tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionNode {
    /// Node name (folder name or request summary)
    pub name: String,
    /// Node description
    #[serde(default)]
    pub description: String,
    /// Folder or leaf payload
    pub kind: NodeKind,
}

/// Payload of a collection node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A folder of further nodes
    Folder(Vec<CollectionNode>),
    /// An example request with its responses
    Request(Box<RequestItem>),
}

impl CollectionNode {
    /// Create a folder node
    pub fn folder(
        name: impl Into<String>,
        description: impl Into<String>,
        children: Vec<CollectionNode>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: NodeKind::Folder(children),
        }
    }

    /// Create a leaf node
    pub fn request(
        name: impl Into<String>,
        description: impl Into<String>,
        item: RequestItem,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: NodeKind::Request(Box::new(item)),
        }
    }
}

/// A leaf: one example request and its captured responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestItem {
    /// The request itself
    pub request: RequestSpec,
    /// Captured example responses, in document order
    #[serde(default)]
    pub responses: Vec<ResponseExample>,
}

// ============================================================================
// Request
// ============================================================================

/// An example HTTP request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP verb as written in the collection (any case)
    pub method: String,
    /// URL path segments; `{name}` segments are placeholders
    pub path_segments: Vec<String>,
    /// Request body declaration
    #[serde(default)]
    pub body: RequestBody,
}

impl RequestSpec {
    /// Create a request with no body
    pub fn new(method: impl Into<String>, path_segments: Vec<String>) -> Self {
        Self {
            method: method.into(),
            path_segments,
            body: RequestBody::default(),
        }
    }

    /// Set the body declaration
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// The lower-cased method, used as the operation key
    pub fn method_key(&self) -> String {
        self.method.to_lowercase()
    }
}

/// Body declaration of a request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Active body mode (`formdata`, `urlencoded`, `raw`, ...)
    #[serde(default)]
    pub mode: Option<String>,
    /// Entries listed under the active mode, when that value is a sequence
    #[serde(default)]
    pub fields: Option<Vec<FormField>>,
}

impl RequestBody {
    /// Create a body declaring `mode` with the given entries
    pub fn with_mode(mode: impl Into<String>, fields: Option<Vec<FormField>>) -> Self {
        Self {
            mode: Some(mode.into()),
            fields,
        }
    }
}

/// One `{key, description}` entry of a form body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field name
    pub key: String,
    /// Field description
    #[serde(default)]
    pub description: String,
}

impl FormField {
    /// Create a form field
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// A captured example response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseExample {
    /// HTTP status code
    pub status_code: i64,
    /// Display name of the example
    pub display_name: String,
    /// Raw body text (may be empty or not JSON at all)
    pub body_text: String,
}

impl ResponseExample {
    /// Create a response example
    pub fn new(
        status_code: i64,
        display_name: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        Self {
            status_code,
            display_name: display_name.into(),
            body_text: body_text.into(),
        }
    }
}

// ============================================================================
// Parse Result
// ============================================================================

/// A collection together with the problems found while reading it
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCollection {
    /// The well-formed part of the collection
    pub collection: Collection,
    /// One entry per skipped item
    pub diagnostics: Vec<crate::types::Diagnostic>,
}
