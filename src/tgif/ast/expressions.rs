//! Expression nodes
//!
//! Leaves hold their converted value next to the source token; composite nodes own
//! their children through `Box` and `Vec`.

use super::statements::BlockStatement;
use super::traits::{impl_node, Node};
use crate::tgif::token::{Token, TokenKind};
use serde::Serialize;
use std::fmt;

/// Any expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Float(FloatingLiteral),
    String(StringLiteral),
    Boolean(Boolean),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(IndexExpression),
}

impl Expression {
    fn as_node(&self) -> &dyn Node {
        match self {
            Expression::Identifier(e) => e,
            Expression::Integer(e) => e,
            Expression::Float(e) => e,
            Expression::String(e) => e,
            Expression::Boolean(e) => e,
            Expression::Prefix(e) => e,
            Expression::Infix(e) => e,
            Expression::Function(e) => e,
            Expression::Call(e) => e,
            Expression::Array(e) => e,
            Expression::Index(e) => e,
        }
    }

    /// The text of this expression as content: the decoded value for string
    /// literals, the canonical render for everything else.
    pub fn plain_text(&self) -> String {
        match self {
            Expression::String(s) => s.value.clone(),
            other => other.render(),
        }
    }

    /// Name of the identifier, if this expression is one
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Expression::Identifier(ident) => Some(&ident.value),
            _ => None,
        }
    }
}

impl Node for Expression {
    fn node_type(&self) -> &'static str {
        self.as_node().node_type()
    }

    fn token_literal(&self) -> &str {
        self.as_node().token_literal()
    }

    fn render(&self) -> String {
        self.as_node().render()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(e) => fmt::Display::fmt(e, f),
            Expression::Integer(e) => fmt::Display::fmt(e, f),
            Expression::Float(e) => fmt::Display::fmt(e, f),
            Expression::String(e) => fmt::Display::fmt(e, f),
            Expression::Boolean(e) => fmt::Display::fmt(e, f),
            Expression::Prefix(e) => fmt::Display::fmt(e, f),
            Expression::Infix(e) => fmt::Display::fmt(e, f),
            Expression::Function(e) => fmt::Display::fmt(e, f),
            Expression::Call(e) => fmt::Display::fmt(e, f),
            Expression::Array(e) => fmt::Display::fmt(e, f),
            Expression::Index(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// Writes `items` separated by `, `
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

// ============================================================================
// Leaves
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn from_token(token: Token) -> Self {
        let value = token.lexeme.clone();
        Self { token, value }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl_node!(Identifier, "Identifier");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.lexeme)
    }
}

impl_node!(IntegerLiteral, "IntegerLiteral");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatingLiteral {
    pub token: Token,
    pub value: f64,
}

impl fmt::Display for FloatingLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.lexeme)
    }
}

impl_node!(FloatingLiteral, "FloatingLiteral");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.value.chars() {
            if c == '"' || c == '\\' {
                f.write_str("\\")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str("\"")
    }
}

impl_node!(StringLiteral, "StringLiteral");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boolean {
    pub token: Token,
    pub value: bool,
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.lexeme)
    }
}

impl_node!(Boolean, "Boolean");

// ============================================================================
// Operators
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrefixOperator {
    Bang,
    Minus,
}

impl PrefixOperator {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(PrefixOperator::Bang),
            TokenKind::Minus => Some(PrefixOperator::Minus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixOperator::Bang => "!",
            PrefixOperator::Minus => "-",
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InfixOperator {
    Plus,
    Minus,
    Asterisk,
    Slash,
    Eq,
    NotEq,
    Lt,
    Gt,
}

impl InfixOperator {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(InfixOperator::Plus),
            TokenKind::Minus => Some(InfixOperator::Minus),
            TokenKind::Asterisk => Some(InfixOperator::Asterisk),
            TokenKind::Slash => Some(InfixOperator::Slash),
            TokenKind::Eq => Some(InfixOperator::Eq),
            TokenKind::NotEq => Some(InfixOperator::NotEq),
            TokenKind::Lt => Some(InfixOperator::Lt),
            TokenKind::Gt => Some(InfixOperator::Gt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::Asterisk => "*",
            InfixOperator::Slash => "/",
            InfixOperator::Eq => "==",
            InfixOperator::NotEq => "!=",
            InfixOperator::Lt => "<",
            InfixOperator::Gt => ">",
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Composite expressions
// ============================================================================

/// `!x` or `-x`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: PrefixOperator,
    pub right: Box<Expression>,
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

impl_node!(PrefixExpression, "PrefixExpression");

/// `left <op> right`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: InfixOperator,
    pub right: Box<Expression>,
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl_node!(InfixExpression, "InfixExpression");

/// `fn(a, b) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.token.lexeme)?;
        write_joined(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl_node!(FunctionLiteral, "FunctionLiteral");

/// `callee(arg, ...)`; the token is the opening parenthesis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallExpression {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl CallExpression {
    /// Name of the callee when it is a plain identifier
    pub fn callee_name(&self) -> Option<&str> {
        self.function.as_identifier()
    }
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        write_joined(f, &self.arguments)?;
        f.write_str(")")
    }
}

impl_node!(CallExpression, "CallExpression");

/// `[a, b, ...]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayLiteral {
    pub token: Token,
    pub elements: Vec<Expression>,
}

impl fmt::Display for ArrayLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_joined(f, &self.elements)?;
        f.write_str("]")
    }
}

impl_node!(ArrayLiteral, "ArrayLiteral");

/// `left[index]`; the token is the opening bracket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

impl fmt::Display for IndexExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

impl_node!(IndexExpression, "IndexExpression");

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Expression {
        Expression::Identifier(Identifier::from_token(Token::new(TokenKind::Ident, name, 0..0)))
    }

    fn int(lexeme: &str) -> Expression {
        Expression::Integer(IntegerLiteral {
            token: Token::new(TokenKind::Int, lexeme, 0..0),
            value: lexeme.parse().unwrap(),
        })
    }

    fn string(value: &str) -> Expression {
        Expression::String(StringLiteral {
            token: Token::new(TokenKind::String, value, 0..0),
            value: value.to_string(),
        })
    }

    #[test]
    fn test_render_nested_infix() {
        let expr = Expression::Infix(InfixExpression {
            token: Token::new(TokenKind::Plus, "+", 0..0),
            left: Box::new(int("1")),
            operator: InfixOperator::Plus,
            right: Box::new(Expression::Infix(InfixExpression {
                token: Token::new(TokenKind::Asterisk, "*", 0..0),
                left: Box::new(int("2")),
                operator: InfixOperator::Asterisk,
                right: Box::new(int("3")),
            })),
        });
        assert_eq!(expr.render(), "(1 + (2 * 3))");
        assert_eq!(expr.token_literal(), "+");
        assert_eq!(expr.node_type(), "InfixExpression");
    }

    #[test]
    fn test_render_call_and_index() {
        let call = Expression::Call(CallExpression {
            token: Token::new(TokenKind::LParen, "(", 0..0),
            function: Box::new(ident("f")),
            arguments: vec![int("1"), string("two")],
        });
        assert_eq!(call.render(), r#"f(1, "two")"#);

        let index = Expression::Index(IndexExpression {
            token: Token::new(TokenKind::LBracket, "[", 0..0),
            left: Box::new(ident("arr")),
            index: Box::new(int("0")),
        });
        assert_eq!(index.render(), "(arr[0])");
    }

    #[test]
    fn test_string_render_escapes_quotes() {
        assert_eq!(string(r#"a "b" \c"#).render(), r#""a \"b\" \\c""#);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(string("hello").plain_text(), "hello");
        assert_eq!(int("7").plain_text(), "7");
        assert_eq!(ident("x").plain_text(), "x");
    }

    #[test]
    fn test_operator_lookup() {
        assert_eq!(
            InfixOperator::from_kind(TokenKind::NotEq),
            Some(InfixOperator::NotEq)
        );
        assert_eq!(InfixOperator::from_kind(TokenKind::Bang), None);
        assert_eq!(
            PrefixOperator::from_kind(TokenKind::Minus),
            Some(PrefixOperator::Minus)
        );
        assert_eq!(PrefixOperator::from_kind(TokenKind::Plus), None);
    }
}
