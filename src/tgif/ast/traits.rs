//! AST traits - Common interface for uniform node access

/// Common interface for all AST nodes
pub trait Node {
    /// Name of the node kind (e.g. "CallExpression")
    fn node_type(&self) -> &'static str;

    /// Lexeme of the token this node was built from
    fn token_literal(&self) -> &str;

    /// Canonical textual reconstruction of the node
    fn render(&self) -> String;
}

/// Implements [Node] for a type that has a `token` field and a canonical `Display`
macro_rules! impl_node {
    ($ty:ty, $name:literal) => {
        impl $crate::tgif::ast::traits::Node for $ty {
            fn node_type(&self) -> &'static str {
                $name
            }

            fn token_literal(&self) -> &str {
                &self.token.lexeme
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    };
}

pub(crate) use impl_node;
