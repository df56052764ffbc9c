//! Treeviz formatter for AST nodes
//!
//! Treeviz is a visual representation of the AST with one line per node, which makes
//! deeply nested tgif objects quick to scan. Nesting is encoded with box drawing
//! connectors, and labels are truncated to 30 characters.
//!
//! Format:
//! <prefix><connector> <icon> <label>
//!
//! Example:
//!
//! ⧉ 2 statements
//! ├─ % %TGIF 4.2.5
//! └─ ¶ str_seg(1, "hello")
//!   └─ ƒ str_seg(…)
//!     ├─ # 1
//!     └─ " "hello"
//!
//! Icons
//!     Program: ⧉
//!     CommentStatement: %
//!     ExpressionStatement: ¶
//!     BlockStatement: ▭
//!     Identifier: ◦
//!     IntegerLiteral / FloatingLiteral: #
//!     StringLiteral: "
//!     Boolean: ±
//!     PrefixExpression / InfixExpression: ⊕
//!     FunctionLiteral: λ
//!     CallExpression: ƒ
//!     ArrayLiteral: ☰
//!     IndexExpression: ⌷

use super::registry::{FormatError, Formatter};
use crate::tgif::ast::{snapshot_from_program, AstSnapshot, Program};
use crate::tgif::parsing::Document;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Program" => "⧉",
        "CommentStatement" => "%",
        "ExpressionStatement" => "¶",
        "BlockStatement" => "▭",
        "Identifier" => "◦",
        "IntegerLiteral" | "FloatingLiteral" => "#",
        "StringLiteral" => "\"",
        "Boolean" => "±",
        "PrefixExpression" | "InfixExpression" => "⊕",
        "FunctionLiteral" => "λ",
        "CallExpression" => "ƒ",
        "ArrayLiteral" => "☰",
        "IndexExpression" => "⌷",
        _ => "○",
    }
}

fn format_snapshot(output: &mut String, snapshot: &AstSnapshot, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(output, &snapshot.children, &child_prefix);
}

fn format_children(output: &mut String, children: &[AstSnapshot], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        format_snapshot(output, child, prefix, i == children.len() - 1);
    }
}

pub fn to_treeviz_str(program: &Program) -> String {
    let snapshot = snapshot_from_program(program);
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    );
    format_children(&mut output, &snapshot.children, "");
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(&doc.program))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box drawing connectors and Unicode icons"
    }
}
