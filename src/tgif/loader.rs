//! Source loading and processing API
//!
//! This module is the primary entry point for turning tgif input into output:
//!
//! - [read_source] acquires input line by line from any reader (stdin, a file) into a
//!   single buffer.
//! - [DocumentLoader] parses that buffer and serializes it with one of the registered
//!   formats, enforcing strict mode when configured.
//!
//! String-based methods are the core; file and reader methods read the input and
//! delegate to them.
//!
//! ```rust,ignore
//! use tgifer::tgif::loader::DocumentLoader;
//!
//! let loader = DocumentLoader::new();
//! let doc = loader.load_and_parse("drawing.obj")?;
//! let strings = loader.serialize(&doc, "strings")?;
//! ```

use crate::tgif::config::TgiferConfig;
use crate::tgif::formats::{FormatError, FormatRegistry};
use crate::tgif::parsing::{parse_document, Document};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read input: {0}")]
    Input(#[from] io::Error),
    #[error("Refusing to produce output: {} parse diagnostic(s)", diagnostics.len())]
    Rejected { diagnostics: Vec<String> },
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Read all lines of `reader` into one buffer, each line terminated by `\n`
pub fn read_source<R: BufRead>(reader: R) -> io::Result<String> {
    let mut source = String::new();
    for line in reader.lines() {
        source.push_str(&line?);
        source.push('\n');
    }
    Ok(source)
}

/// Primary API for loading and processing tgif sources
pub struct DocumentLoader {
    registry: FormatRegistry,
    strict: bool,
}

impl DocumentLoader {
    /// Create a loader with the default formats, not strict
    pub fn new() -> Self {
        Self {
            registry: FormatRegistry::with_defaults(),
            strict: false,
        }
    }

    pub fn from_config(config: &TgiferConfig) -> Self {
        Self {
            registry: FormatRegistry::with_config(config),
            strict: config.parsing.strict,
        }
    }

    /// Refuse to serialize documents that have diagnostics
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    // ===== STRING-BASED PROCESSING (core methods) =====

    pub fn parse(&self, source: &str) -> Document {
        parse_document(source)
    }

    /// Serialize `doc` with the named format
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, LoadError> {
        if self.strict && !doc.is_clean() {
            return Err(LoadError::Rejected {
                diagnostics: doc.errors(),
            });
        }
        Ok(self.registry.serialize(doc, format)?)
    }

    /// Parse `source` and serialize it with the named format
    pub fn execute(&self, source: &str, format: &str) -> Result<String, LoadError> {
        let doc = self.parse(source);
        self.serialize(&doc, format)
    }

    // ===== READER AND FILE-BASED PROCESSING =====

    pub fn read_and_parse<R: BufRead>(&self, reader: R) -> Result<Document, LoadError> {
        let source = read_source(reader)?;
        Ok(self.parse(&source))
    }

    pub fn load_and_parse(&self, path: impl AsRef<Path>) -> Result<Document, LoadError> {
        let path = path.as_ref();
        let read_error = |source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_error)?;
        let source = read_source(BufReader::new(file)).map_err(read_error)?;
        Ok(self.parse(&source))
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_read_source_terminates_every_line() {
        let source = read_source(Cursor::new("a\r\nb")).unwrap();
        assert_eq!(source, "a\nb\n");
        assert_eq!(read_source(Cursor::new("")).unwrap(), "");
    }

    #[test]
    fn test_execute() {
        let loader = DocumentLoader::new();
        let output = loader.execute(r#"str_seg(1, "hello")."#, "strings").unwrap();
        assert_eq!(output, "hello\n");
    }

    #[test]
    fn test_unknown_format() {
        let loader = DocumentLoader::new();
        let err = loader.execute("a", "xml").unwrap_err();
        assert!(matches!(err, LoadError::Format(FormatError::FormatNotFound(_))));
        assert_eq!(err.to_string(), "Format 'xml' not found");
    }

    #[test]
    fn test_strict_mode_rejects_diagnostics() {
        let loader = DocumentLoader::new().strict(true);
        match loader.execute("f(1, 2", "render") {
            Err(LoadError::Rejected { diagnostics }) => {
                assert_eq!(
                    diagnostics,
                    vec!["expected next token to be ), got EOF instead"]
                );
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        // Lenient mode still renders the best-effort tree
        let output = DocumentLoader::new().execute("f(1, 2", "render").unwrap();
        assert_eq!(output, "f(1, 2)\n");
    }

    #[test]
    fn test_load_and_parse() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "% header\nstr_seg('x').").unwrap();
        let doc = DocumentLoader::new().load_and_parse(file.path()).unwrap();
        assert_eq!(doc.source, "% header\nstr_seg('x').\n");
        assert_eq!(doc.program.statements.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DocumentLoader::new()
            .load_and_parse("/nonexistent/drawing.obj")
            .unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().starts_with("Failed to read /nonexistent/drawing.obj"));
    }

    #[test]
    fn test_from_config() {
        let config = crate::tgif::config::Loader::new()
            .set_override("parsing.strict", true)
            .unwrap()
            .build()
            .unwrap();
        let loader = DocumentLoader::from_config(&config);
        assert!(loader.execute("@", "render").is_err());
        assert!(loader.registry().has("strings"));
    }
}
