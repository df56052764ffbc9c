//! Format registry for document serialization
//!
//! This module provides a pluggable registry system for output formats. Each format
//! implements the [Formatter] trait and can be registered with [FormatRegistry].

use crate::tgif::config::TgiferConfig;
use crate::tgif::parsing::Document;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for document formatters
///
/// Implementors provide a way to serialize a parsed document to a string.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "json", "treeviz")
    fn name(&self) -> &str;

    /// Serialize a document to this format
    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of document formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a document using the specified format
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(doc)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::TokensFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::RenderFormatter);
        registry.register(super::StringsFormatter::default());

        registry
    }

    /// Create a registry with default formatters, tuned by `config`
    pub fn with_config(config: &TgiferConfig) -> Self {
        let mut registry = Self::with_defaults();
        registry.register(super::StringsFormatter::from_config(&config.extraction));
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
