//! Program and statement nodes
//!
//! A program is a flat list of statements. When rendering a sequence of
//! statements, an expression statement that is followed by another statement
//! gets a `.` terminator, so that the render parses back into the same number of
//! statements.

use super::expressions::Expression;
use super::traits::{impl_node, Node};
use crate::tgif::token::Token;
use serde::Serialize;
use std::fmt;

/// Root of the tree
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn node_type(&self) -> &'static str {
        "Program"
    }

    /// The lexeme of the first statement, or `""` for an empty program
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|s| s.token_literal())
            .unwrap_or("")
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements, "\n")
    }
}

fn write_statements(
    f: &mut fmt::Formatter<'_>,
    statements: &[Statement],
    separator: &str,
) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        write!(f, "{}", statement)?;
        let is_last = i + 1 == statements.len();
        if !is_last && matches!(statement, Statement::Expression(_)) {
            write!(f, ".{}", separator)?;
        }
    }
    Ok(())
}

/// Any statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    Comment(CommentStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    /// The expression of an expression statement
    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Statement::Expression(stmt) => Some(&stmt.expression),
            Statement::Comment(_) => None,
        }
    }
}

impl Node for Statement {
    fn node_type(&self) -> &'static str {
        match self {
            Statement::Comment(s) => s.node_type(),
            Statement::Expression(s) => s.node_type(),
        }
    }

    fn token_literal(&self) -> &str {
        match self {
            Statement::Comment(s) => s.token_literal(),
            Statement::Expression(s) => s.token_literal(),
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Comment(s) => fmt::Display::fmt(s, f),
            Statement::Expression(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// A `%` comment line, kept for output fidelity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentStatement {
    pub token: Token,
}

impl fmt::Display for CommentStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.token.lexeme)
    }
}

impl_node!(CommentStatement, "CommentStatement");

/// A bare expression; trailing periods are consumed by the parser and not kept
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    /// First token of the expression
    pub token: Token,
    pub expression: Expression,
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl_node!(ExpressionStatement, "ExpressionStatement");

/// A `{ ... }` function body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockStatement {
    /// The `{` token
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        write_statements(f, &self.statements, " ")?;
        if !self.statements.is_empty() {
            f.write_str(" ")?;
        }
        f.write_str("}")
    }
}

impl_node!(BlockStatement, "BlockStatement");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tgif::ast::{Identifier, IntegerLiteral};
    use crate::tgif::token::TokenKind;

    fn comment(text: &str) -> Statement {
        Statement::Comment(CommentStatement {
            token: Token::new(TokenKind::Comment, text, 0..0),
        })
    }

    fn ident_stmt(name: &str) -> Statement {
        let token = Token::new(TokenKind::Ident, name, 0..0);
        Statement::Expression(ExpressionStatement {
            token: token.clone(),
            expression: Expression::Identifier(Identifier::from_token(token)),
        })
    }

    #[test]
    fn test_empty_program() {
        let program = Program::default();
        assert_eq!(program.render(), "");
        assert_eq!(program.token_literal(), "");
        assert!(program.is_empty());
    }

    #[test]
    fn test_program_separates_expression_statements() {
        let program = Program::new(vec![ident_stmt("a"), ident_stmt("b")]);
        assert_eq!(program.render(), "a.\nb");
        assert_eq!(program.token_literal(), "a");
    }

    #[test]
    fn test_comment_renders_with_newline() {
        let program = Program::new(vec![comment("% header"), ident_stmt("a")]);
        assert_eq!(program.render(), "% header\na");
        assert_eq!(program.statements[0].node_type(), "CommentStatement");
        assert!(program.statements[0].expression().is_none());
    }

    #[test]
    fn test_block_render() {
        let empty = BlockStatement {
            token: Token::new(TokenKind::LBrace, "{", 0..0),
            statements: vec![],
        };
        assert_eq!(empty.render(), "{ }");

        let one = Token::new(TokenKind::Int, "1", 0..0);
        let block = BlockStatement {
            token: Token::new(TokenKind::LBrace, "{", 0..0),
            statements: vec![
                ident_stmt("x"),
                Statement::Expression(ExpressionStatement {
                    token: one.clone(),
                    expression: Expression::Integer(IntegerLiteral {
                        token: one,
                        value: 1,
                    }),
                }),
            ],
        };
        assert_eq!(block.render(), "{ x. 1 }");
    }
}
