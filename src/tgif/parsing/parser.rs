//! Pratt parser for tgif scripts
//!
//! The parser pulls tokens from a [Lexer] and keeps exactly two of them around:
//! `current` and `peek`. Expressions are built by precedence climbing:
//!
//! 1. Dispatch on the current token to a prefix rule (identifier, literal, `!`/`-`,
//!    grouping, function literal, array literal) to get the left-hand side.
//! 2. While the peek token is not a statement terminating `.` and binds tighter than
//!    the precedence we were called with, advance and fold the left-hand side into
//!    an infix rule (binary operator, call, index).
//!
//! Passing the operator's own precedence for the right-hand side makes every binary
//! operator left-associative.
//!
//! Nothing here panics or returns early on bad input. Rules that cannot build their
//! node record a [Diagnostic] and return `None`; callers treat that as a terminated
//! partial expression and parsing continues with the next token.
//!
//! Tree depth is capped at [MAX_NESTING_DEPTH]. Every recursive descent and every
//! infix fold adds a level, so the limit bounds both the parser's own recursion and
//! the recursion of anything that later walks the tree (render, extraction, drop).
//! Past the limit the parser records one `NestingTooDeep` diagnostic, keeps what it
//! has built and skips the rest of the input.

use super::diagnostics::Diagnostic;
use super::precedence::Precedence;
use crate::tgif::ast::{
    ArrayLiteral, BlockStatement, Boolean, CallExpression, CommentStatement, Expression,
    ExpressionStatement, FloatingLiteral, FunctionLiteral, Identifier, IndexExpression,
    InfixExpression, InfixOperator, IntegerLiteral, PrefixExpression, PrefixOperator, Program,
    Statement, StringLiteral,
};
use crate::tgif::lexing::Lexer;
use crate::tgif::token::{Token, TokenKind};
use std::mem;

/// Deepest expression tree the parser will build
pub const MAX_NESTING_DEPTH: usize = 128;

pub struct Parser<'source> {
    lexer: Lexer<'source>,
    current: Token,
    peek: Token,
    diagnostics: Vec<Diagnostic>,
    depth: usize,
    /// Set once the nesting limit is hit; nothing more is parsed afterwards
    abandoned: bool,
}

impl<'source> Parser<'source> {
    pub fn new(lexer: Lexer<'source>) -> Self {
        let mut parser = Self {
            lexer,
            current: Token::eof(0),
            peek: Token::eof(0),
            diagnostics: Vec::new(),
            depth: 0,
            abandoned: false,
        };
        // Read two tokens, so current and peek are both set
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Diagnostics recorded so far, in the order they were found
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostic messages recorded so far
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();
        while !self.current_is(TokenKind::Eof) && !self.abandoned {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }
        program
    }

    // ===== Token plumbing =====

    fn next_token(&mut self) {
        let incoming = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, incoming);
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance if the peek token is `expected`, record a diagnostic otherwise
    fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.abandoned {
            false
        } else if self.peek_is(expected) {
            self.next_token();
            true
        } else {
            self.diagnostics.push(Diagnostic::unexpected_token(
                expected,
                self.peek.kind,
                self.peek.span.clone(),
            ));
            false
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    // ===== Statements =====

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Comment => Some(Statement::Comment(CommentStatement {
                token: self.current.clone(),
            })),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest);

        // Periods terminate a statement and carry no meaning otherwise
        while self.peek_is(TokenKind::Period) {
            self.next_token();
        }

        Some(ExpressionStatement {
            token,
            expression: expression?,
        })
    }

    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.current_is(TokenKind::RBrace)
            && !self.current_is(TokenKind::Eof)
            && !self.abandoned
        {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        // An unclosed body keeps the statements read so far
        if self.current_is(TokenKind::Eof) && !self.abandoned {
            self.diagnostics.push(Diagnostic::unexpected_token(
                TokenKind::RBrace,
                TokenKind::Eof,
                self.current.span.clone(),
            ));
        }

        BlockStatement { token, statements }
    }

    // ===== Expressions =====

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let entry_depth = self.depth;
        let expression = self.parse_nested_expression(precedence);
        self.depth = entry_depth;
        expression
    }

    /// Body of [Self::parse_expression]; leaves `depth` raised by one per level built
    fn parse_nested_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        if !self.descend() {
            return None;
        }
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Period) && precedence < self.peek_precedence() {
            // Each fold wraps `left` in one more node
            if !self.descend() {
                return Some(left);
            }
            self.next_token();
            left = match self.current.kind {
                TokenKind::LParen => self.parse_call_expression(left),
                TokenKind::LBracket => self.parse_index_expression(left)?,
                kind => match InfixOperator::from_kind(kind) {
                    Some(operator) => self.parse_infix_expression(left, operator)?,
                    None => return Some(left),
                },
            };
        }

        Some(left)
    }

    /// Enter one more level of nesting, abandoning the parse past the limit
    fn descend(&mut self) -> bool {
        if self.abandoned {
            return false;
        }
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            self.diagnostics.push(Diagnostic::nesting_too_deep(
                MAX_NESTING_DEPTH,
                self.current.span.clone(),
            ));
            self.abandoned = true;
            return false;
        }
        true
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Ident => Some(Expression::Identifier(Identifier::from_token(
                self.current.clone(),
            ))),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Float => self.parse_floating_literal(),
            TokenKind::String => Some(Expression::String(StringLiteral {
                token: self.current.clone(),
                value: self.current.lexeme.clone(),
            })),
            TokenKind::True | TokenKind::False => self.parse_boolean(),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => Some(self.parse_array_literal()),
            kind => {
                self.diagnostics.push(Diagnostic::missing_prefix_rule(
                    kind,
                    self.current.span.clone(),
                ));
                None
            }
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.current.lexeme.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral {
                token: self.current.clone(),
                value,
            })),
            Err(_) => {
                self.invalid_literal("integer");
                None
            }
        }
    }

    fn parse_floating_literal(&mut self) -> Option<Expression> {
        match self.current.lexeme.parse::<f64>() {
            // Out of range numerals parse to infinity
            Ok(value) if value.is_finite() => Some(Expression::Float(FloatingLiteral {
                token: self.current.clone(),
                value,
            })),
            _ => {
                self.invalid_literal("float");
                None
            }
        }
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        match self.current.lexeme.parse::<bool>() {
            Ok(value) => Some(Expression::Boolean(Boolean {
                token: self.current.clone(),
                value,
            })),
            Err(_) => {
                self.invalid_literal("boolean");
                None
            }
        }
    }

    fn invalid_literal(&mut self, target: &str) {
        self.diagnostics.push(Diagnostic::invalid_literal(
            &self.current.lexeme,
            target,
            self.current.span.clone(),
        ));
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = PrefixOperator::from_kind(token.kind)?;
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(
        &mut self,
        left: Expression,
        operator: InfixOperator,
    ) -> Option<Expression> {
        let token = self.current.clone();
        let precedence = self.current_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// `( expr )`; a missing `)` is reported but the inner expression is kept
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest);
        self.expect_peek(TokenKind::RParen);
        expression
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();
        Some(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        self.next_token();
        if self.current_is(TokenKind::RParen) {
            return Some(parameters);
        }

        parameters.extend(self.parse_parameter());
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            parameters.extend(self.parse_parameter());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(parameters)
    }

    fn parse_parameter(&mut self) -> Option<Identifier> {
        if self.current_is(TokenKind::Ident) {
            Some(Identifier::from_token(self.current.clone()))
        } else {
            self.diagnostics.push(Diagnostic::unexpected_token(
                TokenKind::Ident,
                self.current.kind,
                self.current.span.clone(),
            ));
            None
        }
    }

    fn parse_array_literal(&mut self) -> Expression {
        let token = self.current.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket);
        Expression::Array(ArrayLiteral { token, elements })
    }

    fn parse_call_expression(&mut self, function: Expression) -> Expression {
        let token = self.current.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen);
        Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        })
    }

    /// `[ expr ]` after an expression; a missing `]` is reported but the node is kept
    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest);
        self.expect_peek(TokenKind::RBracket);
        Some(Expression::Index(IndexExpression {
            token,
            left: Box::new(left),
            index: Box::new(index?),
        }))
    }

    /// Comma separated expressions up to `end`, shared by calls and arrays.
    ///
    /// Expressions that failed to build are left out; if `end` is missing the
    /// elements gathered so far are still returned.
    fn parse_expression_list(&mut self, end: TokenKind) -> Vec<Expression> {
        let mut list = Vec::new();

        self.next_token();
        if self.current_is(end) {
            return list;
        }

        list.extend(self.parse_expression(Precedence::Lowest));
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.extend(self.parse_expression(Precedence::Lowest));
        }

        if !self.expect_peek(end) {
            log::debug!(
                "unterminated list, expected {} but found {}",
                end,
                self.peek
            );
        }
        list
    }
}
