//! Converter: collection in, Swagger document out

use crate::collection::{Collection, ParsedCollection};
use crate::convert::options::ConvertOptions;
use crate::convert::walker::{CollectionWalker, WalkOutput};
use crate::error::{Error, Result};
use crate::swagger::{Contact, Info, SwaggerDocument, SWAGGER_VERSION};
use tracing::{error, info, warn};

/// Converts collections into Swagger 2.0 documents
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with the given options
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a loaded collection, reporting its diagnostics.
    ///
    /// In strict mode any diagnostic fails the conversion.
    pub fn convert_parsed(&self, parsed: &ParsedCollection) -> Result<SwaggerDocument> {
        for diagnostic in &parsed.diagnostics {
            if self.options.strict {
                error!("Malformed item {}", diagnostic);
            } else {
                warn!("Skipping malformed item {}", diagnostic);
            }
        }

        if self.options.strict && !parsed.diagnostics.is_empty() {
            return Err(Error::StrictMode {
                count: parsed.diagnostics.len(),
            });
        }

        Ok(self.convert(&parsed.collection))
    }

    /// Convert a well-formed collection
    pub fn convert(&self, collection: &Collection) -> SwaggerDocument {
        let mut walker = CollectionWalker::new(&self.options);
        walker.walk(&collection.items);
        let WalkOutput {
            paths,
            tags,
            registry,
        } = walker.finish();

        info!(
            "Converted '{}': {} paths, {} tags, {} definitions",
            collection.info.name,
            paths.len(),
            tags.len(),
            registry.len()
        );

        SwaggerDocument {
            swagger: SWAGGER_VERSION.to_string(),
            info: Info {
                title: collection.info.name.clone(),
                description: collection.info.description.clone(),
                version: self.options.api_version.clone(),
                contact: Contact::default(),
            },
            host: self.options.host.clone(),
            schemes: self.options.schemes.clone(),
            tags,
            paths,
            definitions: registry.into_definitions(),
        }
    }
}

/// Convert a collection with default options (convenience function)
pub fn convert_collection(collection: &Collection) -> SwaggerDocument {
    Converter::default().convert(collection)
}
