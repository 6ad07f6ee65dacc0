//! Common types used throughout postman2swagger
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Diagnostics
// ============================================================================

/// Separator used when rendering the location of a collection item
pub const LOCATION_SEPARATOR: &str = " / ";

/// A recoverable problem found in one collection item.
///
/// The offending item is skipped; its siblings are still converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Enclosing folder names and the item name, joined by `" / "`
    pub location: String,
    /// What was wrong with the item
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new("Users / Get user", "request has no method");
        assert_eq!(
            diagnostic.to_string(),
            "Users / Get user: request has no method"
        );
    }
}
