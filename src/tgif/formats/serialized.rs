//! serde backed formats: the program as JSON or YAML, and the token stream as JSON

use super::registry::{FormatError, Formatter};
use crate::tgif::lexing::tokenize;
use crate::tgif::parsing::Document;

/// Pretty printed JSON of the program
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&doc.program)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "The syntax tree as indented JSON"
    }
}

/// YAML of the program
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(&doc.program)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "The syntax tree as YAML"
    }
}

/// The token stream, `Eof` included, as JSON
pub struct TokensFormatter;

impl Formatter for TokensFormatter {
    fn name(&self) -> &str {
        "tokens"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let tokens = tokenize(&doc.source);
        serde_json::to_string_pretty(&tokens)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "The token stream as JSON"
    }
}
