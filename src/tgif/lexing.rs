//! Lexer for tgif scripts
//!
//! The scanning itself is handled entirely by logos (see [TokenKind]). This module
//! wraps the logos lexer into a pull-based tokenizer with the contract the parser
//! relies on:
//!
//! - [Lexer::next_token] can be called forever; once the source is exhausted it keeps
//!   returning an `Eof` token.
//! - Text logos cannot classify becomes an `Illegal` token. The lexer never fails and
//!   never reports anything itself, the parser turns illegal tokens into diagnostics.
//! - A quote without a closing partner is an `Illegal` token on its own. Scanning
//!   resumes right after it, so an unterminated string costs one token, not the rest
//!   of the file.
//! - String tokens carry their decoded content as lexeme.

use crate::tgif::token::{Token, TokenKind};
use logos::Logos;

/// Pull-based tokenizer over a source string
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, TokenKind>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
        }
    }

    /// Produce the next token, or `Eof` once the source is exhausted
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(kind)) => {
                let slice = self.inner.slice();
                let lexeme = match kind {
                    TokenKind::String => unquote(slice),
                    _ => slice.to_string(),
                };
                Token::new(kind, lexeme, self.inner.span())
            }
            Some(Err(())) => {
                let slice = self.inner.slice();
                let start = self.inner.span().start;
                if slice.len() > 1 && slice.starts_with(|c: char| c == '"' || c == '\'') {
                    self.restart_at(start + 1);
                    Token::new(TokenKind::Illegal, &slice[..1], start..start + 1)
                } else {
                    Token::new(TokenKind::Illegal, slice, self.inner.span())
                }
            }
            None => Token::eof(self.inner.source().len()),
        }
    }

    /// Continue scanning from byte `offset` of the source
    fn restart_at(&mut self, offset: usize) {
        let mut inner = TokenKind::lexer(self.inner.source());
        inner.bump(offset);
        self.inner = inner;
    }
}

/// Iterates over every token up to, but not including, `Eof`
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

/// Convenience function to tokenize a string, the final `Eof` token included
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens: Vec<Token> = lexer.by_ref().collect();
    tokens.push(Token::eof(source.len()));
    tokens
}

/// Strip the delimiters of a string literal and resolve backslash escapes.
///
/// A backslash makes the next character literal, so `\"` is a quote and `\\` a
/// backslash.
fn unquote(slice: &str) -> String {
    let inner = &slice[1..slice.len() - 1];
    let mut decoded = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                decoded.push(escaped);
            }
        } else {
            decoded.push(c);
        }
    }
    decoded
}
