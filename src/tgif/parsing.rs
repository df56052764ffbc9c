//! Parsing module for tgif scripts
//!
//! The entry point is [parse_document], which runs the [Parser] over a source string
//! and returns a [Document]: the best-effort program plus every diagnostic found on
//! the way. An empty diagnostic list means a clean parse; a non-empty one does not
//! make the tree unusable, it only means parts of it could not be built. Callers
//! decide what to do with that (the CLI refuses to print anything in strict mode).

pub mod diagnostics;
pub mod parser;
pub mod precedence;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use parser::{Parser, MAX_NESTING_DEPTH};
pub use precedence::Precedence;

use crate::tgif::ast::Program;
use crate::tgif::lexing::Lexer;

/// A parsed source: the text, its tree and the diagnostics
#[derive(Debug, Clone)]
pub struct Document {
    pub source: String,
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

impl Document {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostic messages in the order they were recorded
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }
}

/// Parse a source string into a [Document]
pub fn parse_document(source: &str) -> Document {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    Document {
        source: source.to_string(),
        program,
        diagnostics: parser.into_diagnostics(),
    }
}
