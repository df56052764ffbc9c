//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! The snapshot captures the tree structure with node types, labels and children,
//! so that presentation formats (treeviz and friends) don't have to reimplement the
//! traversal. All serializers that need a uniform view should consume the output of
//! [snapshot_from_program].

use super::expressions::Expression;
use super::statements::{BlockStatement, Program, Statement};
use super::traits::Node;
use serde::Serialize;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "CallExpression", "CommentStatement")
    pub node_type: String,

    /// Short description of the node
    pub label: String,

    /// Child nodes in the tree
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Create a snapshot of the whole program
pub fn snapshot_from_program(program: &Program) -> AstSnapshot {
    AstSnapshot::new(
        program.node_type(),
        count_label(program.statements.len(), "statement"),
    )
    .with_children(program.statements.iter().map(snapshot_statement).collect())
}

fn snapshot_statement(statement: &Statement) -> AstSnapshot {
    match statement {
        Statement::Comment(comment) => {
            AstSnapshot::new(comment.node_type(), comment.token_literal())
        }
        Statement::Expression(stmt) => AstSnapshot::new(stmt.node_type(), stmt.render())
            .with_child(snapshot_expression(&stmt.expression)),
    }
}

fn snapshot_block(block: &BlockStatement) -> AstSnapshot {
    AstSnapshot::new(
        block.node_type(),
        count_label(block.statements.len(), "statement"),
    )
    .with_children(block.statements.iter().map(snapshot_statement).collect())
}

fn snapshot_expression(expression: &Expression) -> AstSnapshot {
    let node_type = expression.node_type();
    match expression {
        Expression::Identifier(_)
        | Expression::Integer(_)
        | Expression::Float(_)
        | Expression::String(_)
        | Expression::Boolean(_) => AstSnapshot::new(node_type, expression.render()),
        Expression::Prefix(prefix) => AstSnapshot::new(node_type, prefix.operator.as_str())
            .with_child(snapshot_expression(&prefix.right)),
        Expression::Infix(infix) => AstSnapshot::new(node_type, infix.operator.as_str())
            .with_child(snapshot_expression(&infix.left))
            .with_child(snapshot_expression(&infix.right)),
        Expression::Function(function) => {
            let params: Vec<&str> = function.parameters.iter().map(|p| p.value.as_str()).collect();
            AstSnapshot::new(node_type, format!("fn({})", params.join(", ")))
                .with_child(snapshot_block(&function.body))
        }
        Expression::Call(call) => {
            AstSnapshot::new(node_type, format!("{}(…)", call.function.render()))
                .with_children(call.arguments.iter().map(snapshot_expression).collect())
        }
        Expression::Array(array) => {
            AstSnapshot::new(node_type, count_label(array.elements.len(), "element"))
                .with_children(array.elements.iter().map(snapshot_expression).collect())
        }
        Expression::Index(index) => AstSnapshot::new(node_type, "[]")
            .with_child(snapshot_expression(&index.left))
            .with_child(snapshot_expression(&index.index)),
    }
}
