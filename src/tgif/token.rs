//! Token definitions for tgif scripts
//!
//! This module defines all the token kinds that can be produced by the tgif lexer.
//! Classification is done by the logos derive macro; [Token] pairs a kind with the
//! text it was built from and its byte span in the source.
//!
//! A few notes on the grammar:
//!
//! - Comments start with `%` and run to the end of the line. They are tokens, not
//!   whitespace, since the parser keeps them as statements.
//! - Strings may use either `"` or `'` as delimiter. The lexeme of a string token is
//!   the decoded content, without delimiters.
//! - Numbers never carry a sign: `-1` is a prefix expression over `1`.
use logos::Logos;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// All token kinds of the tgif grammar
///
/// `Eof` and `Illegal` are never produced by the logos scanner itself; the
/// [Lexer](crate::tgif::lexing::Lexer) emits them at end of input and for
/// unrecognized text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Identifiers and literals
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r#"'([^'\\]|\\.)*'"#)]
    String,

    // Keywords
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("fn")]
    Function,

    #[regex(r"%[^\n]*")]
    Comment,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(".")]
    Period,

    // Operators
    #[token("!")]
    Bang,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token("/")]
    Slash,
    #[token("*")]
    Asterisk,
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    Eof,
    Illegal,
}

impl TokenKind {
    /// The name used for this kind in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Comment => "COMMENT",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Period => ".",
            TokenKind::Bang => "!",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Slash => "/",
            TokenKind::Asterisk => "*",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token (decoded content for strings)
    pub lexeme: String,
    /// Byte range in the source
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// End-of-input token positioned at `offset`
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", offset..offset)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.lexeme)
    }
}
