//! Schema inference module
//!
//! Synthesizes Swagger schemas from example response bodies.
//!
//! # Features
//!
//! - **Envelope Schemas**: every body is described as `{msg, errcode, data}`
//! - **Referenced Definitions**: inferred schemas are registered by name and
//!   referenced with `$ref` instead of being inlined
//! - **Array Item Inference**: the first element decides the item schema

mod inference;
mod registry;
mod types;

pub use inference::{definition_key, infer_response, SchemaInferrer, DATA_SUFFIX};
pub use registry::DefinitionRegistry;
pub use types::{Definitions, SchemaProperty, SchemaType, DEFINITIONS_PREFIX};
