//! Parser diagnostics
//!
//! Grammar violations are recorded, never raised: the parser pushes a [Diagnostic]
//! and carries on from the current token.

use crate::tgif::token::TokenKind;
use serde::Serialize;
use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// A specific token was required next and something else was found
    UnexpectedToken,
    /// The current token cannot start an expression
    MissingPrefixRule,
    /// A literal lexeme could not be converted to its value
    InvalidLiteral,
    /// Expressions nest deeper than the parser allows; the rest of the input is skipped
    NestingTooDeep,
}

/// A recorded, non-fatal parse problem
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Byte range of the offending token
    pub span: Range<usize>,
}

impl Diagnostic {
    pub fn unexpected_token(expected: TokenKind, found: TokenKind, span: Range<usize>) -> Self {
        Self {
            kind: DiagnosticKind::UnexpectedToken,
            message: format!(
                "expected next token to be {}, got {} instead",
                expected, found
            ),
            span,
        }
    }

    pub fn missing_prefix_rule(kind: TokenKind, span: Range<usize>) -> Self {
        Self {
            kind: DiagnosticKind::MissingPrefixRule,
            message: format!("no prefix parse rule for {} found", kind),
            span,
        }
    }

    pub fn nesting_too_deep(limit: usize, span: Range<usize>) -> Self {
        Self {
            kind: DiagnosticKind::NestingTooDeep,
            message: format!(
                "expression nesting exceeds {} levels, rest of input skipped",
                limit
            ),
            span,
        }
    }

    pub fn invalid_literal(lexeme: &str, target: &str, span: Range<usize>) -> Self {
        Self {
            kind: DiagnosticKind::InvalidLiteral,
            message: format!("could not parse {:?} as {}", lexeme, target),
            span,
        }
    }
}
