// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # postman2swagger
//!
//! Converts a Postman collection (nested folders of example requests, each with
//! captured example responses) into a flat Swagger 2.0 document.
//!
//! ## Features
//!
//! - **Path Flattening**: nested folders become one path → method → operation map
//! - **Tagging**: each operation is tagged with its enclosing folder
//! - **Parameters**: `{placeholder}` segments and form bodies become parameters
//! - **Schema Inference**: example response bodies become referenced definitions
//! - **Diagnostics**: malformed items are skipped and reported, not fatal
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use postman2swagger::{load_collection, Converter, ConvertOptions, Result};
//!
//! fn main() -> Result<()> {
//!     let parsed = load_collection("collection.json")?;
//!     let document = Converter::new(ConvertOptions::default()).convert_parsed(&parsed)?;
//!     println!("{}", serde_json::to_string_pretty(&document)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! collection.json ──► collection::parse ──► CollectionNode tree (+ diagnostics)
//!                                                  │
//!                            convert::CollectionWalker (depth-first)
//!                        ┌─────────────┬───────────┴──────────────┐
//!                  build_path_key  extract_parameters     schema::SchemaInferrer
//!                        └─────────────┴──────────┬───────────────┘
//!                                                 │      DefinitionRegistry
//!                                   swagger::SwaggerDocument ──► JSON / YAML
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Collection loading
pub mod collection;

/// Collection → Swagger conversion
pub mod convert;

/// Schema inference from example responses
pub mod schema;

/// Swagger 2.0 document types and writer
pub mod swagger;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use collection::{load_collection, load_collection_from_str, Collection, ParsedCollection};
pub use convert::{ConvertOptions, Converter};
pub use swagger::SwaggerDocument;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
