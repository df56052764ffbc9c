//! Binding powers for the Pratt parser

use crate::tgif::token::TokenKind;

/// Operator precedence, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

impl Precedence {
    /// Binding power of `kind` in infix position
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            TokenKind::LBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Precedence::Lowest < Precedence::Equals);
        assert!(Precedence::Equals < Precedence::LessGreater);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Prefix < Precedence::Call);
        assert!(Precedence::Call < Precedence::Index);
    }

    #[test]
    fn test_non_operators_bind_lowest() {
        assert_eq!(Precedence::of(TokenKind::Period), Precedence::Lowest);
        assert_eq!(Precedence::of(TokenKind::Bang), Precedence::Lowest);
        assert_eq!(Precedence::of(TokenKind::Minus), Precedence::Sum);
    }
}
