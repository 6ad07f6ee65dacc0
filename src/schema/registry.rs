//! Definition registry
//!
//! Name → schema store filled during one conversion run. A later write under
//! an existing name replaces the earlier schema.

use super::types::{Definitions, SchemaProperty};
use serde::Serialize;
use tracing::{debug, warn};

/// Store of named schema definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DefinitionRegistry {
    definitions: Definitions,
}

impl DefinitionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema, replacing any earlier one with the same name.
    ///
    /// Returns the replaced schema.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        schema: SchemaProperty,
    ) -> Option<SchemaProperty> {
        let name = name.into();
        let previous = self.definitions.insert(name.clone(), schema);

        match &previous {
            Some(old) if Some(old) != self.definitions.get(&name) => {
                warn!("Definition '{}' replaced by a different schema", name);
            }
            Some(_) => debug!("Definition '{}' rewritten", name),
            None => debug!("Definition '{}' registered", name),
        }

        previous
    }

    /// Get a definition by name
    pub fn get(&self, name: &str) -> Option<&SchemaProperty> {
        self.definitions.get(name)
    }

    /// Follow a `$ref` to its definition; other schemas resolve to themselves
    #[cfg(test)]
    pub fn resolve<'a>(&'a self, schema: &'a SchemaProperty) -> Option<&'a SchemaProperty> {
        match schema.reference_name() {
            Some(name) => self.get(name),
            None if schema.reference.is_some() => None,
            None => Some(schema),
        }
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Consume the registry, yielding the definitions map
    pub fn into_definitions(self) -> Definitions {
        self.definitions
    }
}
