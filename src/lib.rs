//! # tgifer
//!
//! A front end for tgif object scripts: a tokenizer and Pratt parser that turn
//! script text into a typed syntax tree, plus a traversal that pulls the
//! literal strings out of `text(...)` objects in source order.
//!
//! The library lives in the [tgif] module:
//!
//! - [tgif::lexing] - pull-based tokenizer
//! - [tgif::parsing] - precedence climbing parser with diagnostics
//! - [tgif::ast] - the syntax tree and its canonical render
//! - [tgif::extraction] - string extraction
//! - [tgif::formats] - serialization views (json, yaml, treeviz, ...)
//! - [tgif::loader] - source acquisition and the processing entry point

pub mod tgif;
