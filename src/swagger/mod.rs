//! Swagger output module
//!
//! Swagger 2.0 document types and the writer that renders them as JSON or YAML.

mod types;
mod writer;

pub use types::{
    Contact, Info, Operation, Parameter, ParameterLocation, PathItem, Paths,
    ResponseSpec, SwaggerDocument, Tag, FORM_MEDIA_TYPE, JSON_MEDIA_TYPE, SWAGGER_VERSION,
};
pub use writer::{render_document, write_document, OutputFormat};
