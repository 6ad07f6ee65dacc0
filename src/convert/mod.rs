//! Conversion module
//!
//! Flattens a collection tree into a Swagger 2.0 document.
//!
//! # Overview
//!
//! - `build_path_key` - joins URL segments into a path key
//! - `extract_parameters` - path placeholders and form fields as parameters
//! - `CollectionWalker` - depth-first traversal building paths and tags
//! - `Converter` - assembles the final document

mod converter;
mod options;
mod path;
mod walker;

pub use converter::{convert_collection, Converter};
pub use options::{
    load_options, load_options_from_str, ConvertOptions, DefinitionKeyStrategy, TagStrategy,
};
pub use path::{build_path_key, extract_parameters, ExtractedParameters};
pub use walker::{CollectionWalker, WalkOutput, DEFAULT_TAG};
