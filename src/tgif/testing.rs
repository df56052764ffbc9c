//! Testing utilities for parsed tgif programs
//!
//! Two tools are meant to be used together in parser and extraction tests:
//!
//! 1. [TgifSamples] gives access to the vetted tgif files under `samples/`. Prefer them
//!    over hand-written fixtures whenever a test is about realistic drawings.
//! 2. [assert_program] is a fluent assertion API over a parsed [Document]. It checks
//!    the shape of the tree and the canonical render of each node in one chain, and
//!    its failure messages show the full render of what was actually parsed.
//!
//! ```rust-example
//! use tgifer::tgif::testing::{assert_program, parse_clean};
//!
//! let doc = parse_clean("% header\nstr_seg(1, \"hi\").");
//! assert_program(&doc)
//!     .statement_count(2)
//!     .statement(0, |s| {
//!         s.comment("% header");
//!     })
//!     .statement(1, |s| {
//!         s.expression(|e| {
//!             e.call("str_seg", 2).argument(1, |a| {
//!                 a.renders("\"hi\"");
//!             });
//!         });
//!     });
//! ```

use crate::tgif::ast::{Expression, Node, Statement};
use crate::tgif::parsing::{parse_document, Document};

/// Vetted tgif sample files, embedded at compile time
pub struct TgifSamples;

impl TgifSamples {
    const SAMPLES: &'static [(&'static str, &'static str)] = &[
        ("hello.obj", include_str!("../../samples/hello.obj")),
        ("multiline.obj", include_str!("../../samples/multiline.obj")),
    ];

    /// Names of all available samples
    pub fn list() -> Vec<&'static str> {
        Self::SAMPLES.iter().map(|(name, _)| *name).collect()
    }

    pub fn get_string(name: &str) -> Option<&'static str> {
        Self::SAMPLES
            .iter()
            .find(|(sample, _)| *sample == name)
            .map(|(_, source)| *source)
    }

    /// Parse a sample; panics if the sample does not exist
    pub fn get_document(name: &str) -> Document {
        let source = Self::get_string(name)
            .unwrap_or_else(|| panic!("No sample named {} (have: {:?})", name, Self::list()));
        parse_document(source)
    }
}

/// Parse `source`, panicking with every diagnostic if the parse was not clean
pub fn parse_clean(source: &str) -> Document {
    let doc = parse_document(source);
    assert!(
        doc.is_clean(),
        "Expected a clean parse of {:?}, got diagnostics:\n  {}",
        source,
        doc.errors().join("\n  ")
    );
    doc
}

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a parsed document
pub fn assert_program(doc: &Document) -> ProgramAssertion<'_> {
    ProgramAssertion { doc }
}

// ============================================================================
// Program Assertions
// ============================================================================

pub struct ProgramAssertion<'a> {
    doc: &'a Document,
}

impl<'a> ProgramAssertion<'a> {
    pub fn statement_count(self, expected: usize) -> Self {
        let actual = self.doc.program.statements.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} statements, found {}:\n{}",
            expected,
            actual,
            self.doc.program.render()
        );
        self
    }

    /// Assert the canonical render of the whole program
    pub fn renders(self, expected: &str) -> Self {
        assert_eq!(self.doc.program.render(), expected);
        self
    }

    pub fn clean(self) -> Self {
        assert!(
            self.doc.is_clean(),
            "Expected no diagnostics, found: {:?}",
            self.doc.errors()
        );
        self
    }

    /// Assert the exact diagnostic messages, in order
    pub fn diagnostics(self, expected: &[&str]) -> Self {
        assert_eq!(self.doc.errors(), expected);
        self
    }

    pub fn statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        let statements = &self.doc.program.statements;
        assert!(
            index < statements.len(),
            "Statement index {} out of bounds (program has {} statements)",
            index,
            statements.len()
        );
        assertion(StatementAssertion {
            statement: &statements[index],
            context: format!("statements[{}]", index),
        });
        self
    }
}

// ============================================================================
// Statement Assertions
// ============================================================================

pub struct StatementAssertion<'a> {
    statement: &'a Statement,
    context: String,
}

impl<'a> StatementAssertion<'a> {
    /// Assert a comment statement with the given lexeme, `%` included
    pub fn comment(self, expected: &str) -> Self {
        match self.statement {
            Statement::Comment(comment) => assert_eq!(
                comment.token.lexeme, expected,
                "{}: comment text mismatch",
                self.context
            ),
            other => panic!(
                "{}: expected a comment, found {}: {}",
                self.context,
                other.node_type(),
                other.render()
            ),
        }
        self
    }

    pub fn expression<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        let expression = self.statement.expression().unwrap_or_else(|| {
            panic!(
                "{}: expected an expression statement, found {}",
                self.context,
                self.statement.node_type()
            )
        });
        assertion(ExpressionAssertion {
            expression,
            context: format!("{}.expression", self.context),
        });
        self
    }
}

// ============================================================================
// Expression Assertions
// ============================================================================

pub struct ExpressionAssertion<'a> {
    expression: &'a Expression,
    context: String,
}

impl<'a> ExpressionAssertion<'a> {
    /// Assert the canonical render of the expression
    pub fn renders(self, expected: &str) -> Self {
        assert_eq!(
            self.expression.render(),
            expected,
            "{}: render mismatch",
            self.context
        );
        self
    }

    pub fn node_type(self, expected: &str) -> Self {
        assert_eq!(
            self.expression.node_type(),
            expected,
            "{}: node type mismatch for {}",
            self.context,
            self.expression
        );
        self
    }

    /// Assert a call to `name` with `argument_count` arguments
    pub fn call(self, name: &str, argument_count: usize) -> Self {
        match self.expression {
            Expression::Call(call) => {
                assert_eq!(
                    call.callee_name(),
                    Some(name),
                    "{}: callee mismatch in {}",
                    self.context,
                    call
                );
                assert_eq!(
                    call.arguments.len(),
                    argument_count,
                    "{}: argument count mismatch in {}",
                    self.context,
                    call
                );
            }
            other => panic!(
                "{}: expected a call to {}, found {}: {}",
                self.context,
                name,
                other.node_type(),
                other
            ),
        }
        self
    }

    /// Assert on one argument of a call or one element of an array
    pub fn argument<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        let items = match self.expression {
            Expression::Call(call) => &call.arguments,
            Expression::Array(array) => &array.elements,
            other => panic!(
                "{}: expected a call or an array, found {}: {}",
                self.context,
                other.node_type(),
                other
            ),
        };
        assert!(
            index < items.len(),
            "{}: index {} out of bounds ({} items)",
            self.context,
            index,
            items.len()
        );
        assertion(ExpressionAssertion {
            expression: &items[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_parse_cleanly() {
        for name in TgifSamples::list() {
            let doc = TgifSamples::get_document(name);
            assert!(doc.is_clean(), "{}: {:?}", name, doc.errors());
        }
    }

    #[test]
    fn test_fluent_assertions() {
        let doc = parse_clean("% header\nstr_seg(1, [\"hi\"]).");
        assert_program(&doc)
            .clean()
            .statement_count(2)
            .statement(0, |s| {
                s.comment("% header");
            })
            .statement(1, |s| {
                s.expression(|e| {
                    e.call("str_seg", 2)
                        .argument(0, |a| {
                            a.node_type("IntegerLiteral").renders("1");
                        })
                        .argument(1, |a| {
                            a.argument(0, |s| {
                                s.renders("\"hi\"");
                            });
                        });
                });
            });
    }

    #[test]
    #[should_panic(expected = "expected a comment")]
    fn test_statement_kind_mismatch() {
        let doc = parse_clean("a");
        assert_program(&doc).statement(0, |s| {
            s.comment("% a");
        });
    }

    #[test]
    #[should_panic(expected = "Expected a clean parse")]
    fn test_parse_clean_rejects_diagnostics() {
        parse_clean("f(");
    }
}
