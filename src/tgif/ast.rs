//! Syntax tree for tgif scripts
//!
//! The tree is made of closed enums ([Statement], [Expression]) wrapping one struct
//! per node kind. Every node keeps the token it was built from, and children are
//! owned by exactly one parent.
//!
//! All nodes implement [Node], which gives access to the originating lexeme and the
//! canonical render. The render is also what `Display` prints:
//!
//! - prefix, infix and index expressions are fully parenthesized: `(1 + (2 * 3))`
//! - argument, parameter and element lists are comma joined: `f(1, 2)`, `[a, b]`
//! - function literals read `fn(x, y) { body }`
//! - strings are re-quoted with `"`
//!
//! The render is canonical, not source preserving, but parsing it again yields an
//! equivalent tree.

pub mod expressions;
pub mod snapshot;
pub mod statements;
pub mod traits;

pub use expressions::{
    ArrayLiteral, Boolean, CallExpression, Expression, FloatingLiteral, FunctionLiteral,
    Identifier, IndexExpression, InfixExpression, InfixOperator, IntegerLiteral,
    PrefixExpression, PrefixOperator, StringLiteral,
};
pub use snapshot::{snapshot_from_program, AstSnapshot};
pub use statements::{BlockStatement, CommentStatement, ExpressionStatement, Program, Statement};
pub use traits::Node;
