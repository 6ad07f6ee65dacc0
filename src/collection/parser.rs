//! JSON parser for collection documents
//!
//! Turns the untyped JSON tree into the typed [`CollectionNode`] tree.
//! Malformed items are skipped and reported as diagnostics; only problems with
//! the document as a whole are returned as errors.

use crate::collection::types::{
    Collection, CollectionInfo, CollectionNode, FormField, ParsedCollection, RequestBody,
    RequestItem, RequestSpec, ResponseExample, DEFAULT_TITLE,
};
use crate::error::{Error, Result};
use crate::types::{Diagnostic, JsonObject, JsonValue, LOCATION_SEPARATOR};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a collection from a JSON file
pub fn load_collection(path: impl AsRef<Path>) -> Result<ParsedCollection> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    load_collection_from_str(&content)
}

/// Load a collection from a JSON string
pub fn load_collection_from_str(json: &str) -> Result<ParsedCollection> {
    let value: JsonValue = serde_json::from_str(json)?;
    parse_collection(&value)
}

/// Convert an already parsed JSON document into a collection
pub fn parse_collection(value: &JsonValue) -> Result<ParsedCollection> {
    let root = value
        .as_object()
        .ok_or_else(|| Error::invalid_document("top-level value is not an object"))?;

    let info = parse_info(root.get("info"));

    let items = root
        .get("item")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| Error::invalid_document("collection has no `item` array"))?;

    let mut diagnostics = Vec::new();
    let items = parse_nodes(items, &[], &mut diagnostics);

    debug!(
        "Parsed collection '{}': {} root items, {} skipped",
        info.name,
        items.len(),
        diagnostics.len()
    );

    Ok(ParsedCollection {
        collection: Collection { info, items },
        diagnostics,
    })
}

fn parse_info(info: Option<&JsonValue>) -> CollectionInfo {
    let Some(JsonValue::Object(info)) = info else {
        return CollectionInfo::default();
    };

    CollectionInfo {
        name: info
            .get("name")
            .and_then(JsonValue::as_str)
            .unwrap_or(DEFAULT_TITLE)
            .to_string(),
        description: description_of(info),
    }
}

/// Parse sibling nodes, collecting a diagnostic for every malformed one
fn parse_nodes(
    values: &[JsonValue],
    parents: &[String],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<CollectionNode> {
    let mut nodes = Vec::with_capacity(values.len());

    for (index, value) in values.iter().enumerate() {
        let location = item_location(parents, value, index);
        match parse_node(value, &location, parents, diagnostics) {
            Ok(node) => nodes.push(node),
            Err(Error::MalformedItem { location, message }) => {
                diagnostics.push(Diagnostic::new(location, message));
            }
            Err(other) => diagnostics.push(Diagnostic::new(location, other.to_string())),
        }
    }

    nodes
}

fn parse_node(
    value: &JsonValue,
    location: &str,
    parents: &[String],
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<CollectionNode> {
    let node = value
        .as_object()
        .ok_or_else(|| Error::malformed(location, "item is not an object"))?;

    let description = description_of(node);

    // Presence of `item` decides the branch
    if let Some(children) = node.get("item") {
        let children = children
            .as_array()
            .ok_or_else(|| Error::malformed(location, "folder `item` is not an array"))?;
        let name = node
            .get("name")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string();

        let mut path = parents.to_vec();
        path.push(name.clone());
        let children = parse_nodes(children, &path, diagnostics);

        return Ok(CollectionNode::folder(name, description, children));
    }

    let name = node
        .get("name")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| Error::malformed(location, "request item has no `name`"))?;
    let item = parse_request_item(node, location)?;

    Ok(CollectionNode::request(name, description, item))
}

fn parse_request_item(node: &JsonObject, location: &str) -> Result<RequestItem> {
    let request = node
        .get("request")
        .and_then(JsonValue::as_object)
        .ok_or_else(|| Error::malformed(location, "missing `request` object"))?;

    let method = request
        .get("method")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| Error::malformed(location, "request has no `method`"))?;

    let path = request
        .get("url")
        .and_then(|url| url.get("path"))
        .and_then(JsonValue::as_array)
        .ok_or_else(|| Error::malformed(location, "request has no `url.path` array"))?;

    let path_segments = path
        .iter()
        .map(|segment| {
            segment
                .as_str()
                .map(String::from)
                .ok_or_else(|| Error::malformed(location, "`url.path` segment is not a string"))
        })
        .collect::<Result<Vec<_>>>()?;

    let body = parse_body(request.get("body"), location)?;

    let responses = match node.get("response") {
        None | Some(JsonValue::Null) => Vec::new(),
        Some(JsonValue::Array(responses)) => responses
            .iter()
            .map(|response| parse_response(response, location))
            .collect::<Result<Vec<_>>>()?,
        Some(_) => return Err(Error::malformed(location, "`response` is not an array")),
    };

    Ok(RequestItem {
        request: RequestSpec::new(method, path_segments).with_body(body),
        responses,
    })
}

fn parse_body(body: Option<&JsonValue>, location: &str) -> Result<RequestBody> {
    let body = match body {
        None | Some(JsonValue::Null) => return Ok(RequestBody::default()),
        Some(JsonValue::Object(body)) => body,
        Some(_) => return Err(Error::malformed(location, "request `body` is not an object")),
    };

    let mode = match body.get("mode") {
        None | Some(JsonValue::Null) => return Ok(RequestBody::default()),
        Some(JsonValue::String(mode)) => mode,
        Some(_) => return Err(Error::malformed(location, "`body.mode` is not a string")),
    };

    // Only a sequence under the active mode yields form fields
    let fields = match body.get(mode.as_str()) {
        Some(JsonValue::Array(entries)) => Some(
            entries
                .iter()
                .map(|entry| parse_form_field(entry, location))
                .collect::<Result<Vec<_>>>()?,
        ),
        _ => None,
    };

    Ok(RequestBody::with_mode(mode.clone(), fields))
}

fn parse_form_field(entry: &JsonValue, location: &str) -> Result<FormField> {
    let entry = entry
        .as_object()
        .ok_or_else(|| Error::malformed(location, "body entry is not an object"))?;

    let key = entry
        .get("key")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| Error::malformed(location, "body entry has no `key`"))?;

    Ok(FormField::new(key, description_of(entry)))
}

fn parse_response(response: &JsonValue, location: &str) -> Result<ResponseExample> {
    let response = response
        .as_object()
        .ok_or_else(|| Error::malformed(location, "response is not an object"))?;

    let code = response
        .get("code")
        .and_then(|code| code.as_i64().or_else(|| code.as_f64().map(|f| f as i64)))
        .ok_or_else(|| Error::malformed(location, "response has no numeric `code`"))?;

    let name = response
        .get("name")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| Error::malformed(location, "response has no `name`"))?;

    let body = match response.get("body") {
        Some(JsonValue::String(body)) => body.as_str(),
        Some(JsonValue::Null) => "",
        _ => return Err(Error::malformed(location, "response has no `body` string")),
    };

    Ok(ResponseExample::new(code, name, body))
}

/// Read a `description`, which may be a plain string or `{content, type}`
fn description_of(object: &JsonObject) -> String {
    match object.get("description") {
        Some(JsonValue::String(text)) => text.clone(),
        Some(JsonValue::Object(rich)) => rich
            .get("content")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

fn item_location(parents: &[String], value: &JsonValue, index: usize) -> String {
    let name = value
        .get("name")
        .and_then(JsonValue::as_str)
        .map_or_else(|| format!("#{index}"), String::from);

    let mut parts: Vec<&str> = parents.iter().map(String::as_str).collect();
    parts.push(&name);
    parts.join(LOCATION_SEPARATOR)
}
