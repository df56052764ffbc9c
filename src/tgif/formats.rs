//! Output format implementations for parsed documents
//!
//! This module contains the serialization views of a parsed document:
//! - the tree as data (json, yaml) and the raw token stream (tokens)
//! - the tree as a picture (treeviz)
//! - text derived from the tree (render, strings)

pub mod registry;
pub mod serialized;
pub mod text;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, TokensFormatter, YamlFormatter};
pub use text::{RenderFormatter, StringsFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
