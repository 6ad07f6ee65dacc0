//! Error types for postman2swagger
//!
//! This module defines the error hierarchy for the whole converter.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for postman2swagger
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Collection Errors
    // ============================================================================
    #[error("Invalid collection document: {message}")]
    InvalidDocument { message: String },

    #[error("Malformed item '{location}': {message}")]
    MalformedItem { location: String, message: String },

    #[error("Strict mode: {count} malformed item(s) in collection")]
    StrictMode { count: usize },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path} does not exist")]
    FileNotFound { path: String },

    // ============================================================================
    // Wrapped Errors
    // ============================================================================
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid document error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Create a malformed item error
    pub fn malformed(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedItem {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a file-not-found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Wrap this error with a description of the failed step
    pub fn wrap(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for postman2swagger
pub type Result<T> = std::result::Result<T, Error>;

/// Attach a step description to any error convertible into [`Error`]
pub trait ResultExt<T> {
    /// Wrap the error with `context`
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Wrap the error with a context built only on failure
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().wrap(context))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| e.into().wrap(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::file_not_found("missing.json");
        assert_eq!(err.to_string(), "missing.json does not exist");

        let err = Error::malformed("Users / Get user", "missing request");
        assert_eq!(
            err.to_string(),
            "Malformed item 'Users / Get user': missing request"
        );

        let err = Error::StrictMode { count: 2 };
        assert_eq!(
            err.to_string(),
            "Strict mode: 2 malformed item(s) in collection"
        );
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let err = result.context("outer").unwrap_err();
        assert_eq!(err.to_string(), "outer: Configuration error: inner");

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "Configuration error: inner");
    }

    #[test]
    fn test_io_error_with_context() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let result: std::result::Result<(), _> = Err(io);
        let err = result.with_context(|| "Failed to create 'out.json'".to_string());

        let Err(Error::Context { context, source }) = err else {
            panic!("expected context error");
        };
        assert_eq!(context, "Failed to create 'out.json'");
        assert!(matches!(*source, Error::Io(_)));
    }
}
