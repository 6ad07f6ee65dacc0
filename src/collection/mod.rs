//! Collection loader module
//!
//! Parse Postman collection documents into a typed tree.
//!
//! # Overview
//!
//! The collection module provides:
//! - `CollectionNode` - folder or example request, owned recursively
//! - `RequestSpec` / `ResponseExample` - the leaf payloads
//! - JSON loading with per-item diagnostics instead of aborting on bad items

mod parser;
mod types;

pub use parser::{load_collection, load_collection_from_str, parse_collection};
pub use types::{
    Collection, CollectionInfo, CollectionNode, FormField, NodeKind, ParsedCollection,
    RequestBody, RequestItem, RequestSpec, ResponseExample, DEFAULT_TITLE,
};
