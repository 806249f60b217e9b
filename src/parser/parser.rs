//! Pratt (precedence-climbing) parser for Monkey
//!
//! The [`Parser`] pulls tokens from a [`Lexer`] one at a time, keeping the
//! current token and one lookahead token buffered. Each token kind supplies a
//! prefix and/or infix parsing rule, dispatched by exhaustive match, and a
//! precedence table resolves operator binding order.
//!
//! Parsing is error-tolerant: a malformed statement records a [`ParseError`]
//! and parsing proceeds with the next statement. [`Parser::parse_program`]
//! always returns a [`Program`]; callers must check [`Parser::errors`] to
//! decide whether the tree is trustworthy.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::parser::ast::{Expression, Identifier, Program, Statement};
use crate::parser::lexer::Lexer;
use crate::parser::token::{SourceLocation, Token, TokenKind};

/// Parser error type
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Binding strength of operators, weakest first. Higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equality,
    /// `<` and `>`
    Relational,
    /// `+` and binary `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `!` and `-`
    Prefix,
    /// Call expressions; tops the order ahead of the call-parsing stage.
    Call,
}

/// Pratt parser over a lazily pulled token stream.
pub struct Parser {
    lexer: Lexer,
    errors: Vec<ParseError>,

    current: Token,
    peek: Token,

    precedences: FxHashMap<TokenKind, Precedence>,
}

impl Parser {
    /// Create a parser, priming the `current`/`peek` slots by pulling two
    /// tokens from the lexer.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut precedences = FxHashMap::default();
        precedences.insert(TokenKind::Eq, Precedence::Equality);
        precedences.insert(TokenKind::NotEq, Precedence::Equality);
        precedences.insert(TokenKind::Lt, Precedence::Relational);
        precedences.insert(TokenKind::Gt, Precedence::Relational);
        precedences.insert(TokenKind::Plus, Precedence::Sum);
        precedences.insert(TokenKind::Minus, Precedence::Sum);
        precedences.insert(TokenKind::Asterisk, Precedence::Product);
        precedences.insert(TokenKind::Slash, Precedence::Product);

        Self {
            lexer,
            errors: Vec::new(),
            current,
            peek,
            precedences,
        }
    }

    /// Diagnostics accumulated so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// Never fails: malformed statements are dropped from the tree and
    /// reported through [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while self.current.kind != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    /// Parse a single statement, dispatching on the current token.
    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse `let <ident> = <expression>;`
    ///
    /// The value expression is required and attached to the statement.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Identifier::new(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);
        self.consume_optional_semicolon();

        Some(Statement::Let {
            token,
            name,
            value: value?,
        })
    }

    /// Parse `return <expression>;`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);
        self.consume_optional_semicolon();

        Some(Statement::Return {
            token,
            value: value?,
        })
    }

    /// Parse a bare expression as a statement; the trailing `;` is optional
    /// so the REPL can evaluate `5 + 5` without one.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        let expression = self.parse_expression(Precedence::Lowest);
        self.consume_optional_semicolon();

        Some(Statement::Expr {
            token,
            expression: expression?,
        })
    }

    /// Core precedence-climbing loop.
    ///
    /// Resolves a prefix rule for the current token to get a left-hand
    /// expression, then folds infix operators into it while the lookahead
    /// token binds tighter than `min_precedence`. Left-associativity falls
    /// out of the loop structure.
    fn parse_expression(
        &mut self,
        min_precedence: Precedence,
    ) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while self.peek.kind != TokenKind::Semicolon
            && min_precedence < self.peek_precedence()
        {
            if !Self::has_infix_rule(self.peek.kind) {
                return Some(left);
            }

            self.next_token();
            left = self.parse_infix_expression(left)?;
        }

        Some(left)
    }

    /// Prefix rule dispatch for the current token.
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Ident => Some(Expression::Identifier(Identifier::new(
                self.current.clone(),
            ))),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            kind => {
                self.errors.push(ParseError {
                    message: format!("no prefix parse rule for {}", kind),
                    location: self.current.location,
                });
                None
            }
        }
    }

    fn has_infix_rule(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt
        )
    }

    /// Parse an integer literal, converting the lexeme to `i64`.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral { token, value }),
            Err(_) => {
                self.errors.push(ParseError {
                    message: format!(
                        "could not parse '{}' as an integer",
                        token.literal
                    ),
                    location: token.location,
                });
                None
            }
        }
    }

    /// Parse `!<operand>` or `-<operand>`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal.clone();

        self.next_token();
        let operand = Box::new(self.parse_expression(Precedence::Prefix)?);

        Some(Expression::Prefix {
            token,
            operator,
            operand,
        })
    }

    /// Parse `<left> OP <right>`, with the current token on the operator.
    ///
    /// The right-hand side is parsed at the operator's own precedence, so a
    /// tighter-binding lookahead operator captures it instead.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        let precedence = self.current_precedence();

        self.next_token();
        let right = Box::new(self.parse_expression(precedence)?);

        Some(Expression::Infix {
            token,
            left: Box::new(left),
            operator,
            right,
        })
    }

    // ===== Helper methods =====

    /// Consume a trailing `;` if one is next.
    ///
    /// Runs even when the preceding expression failed, so one malformed
    /// statement leaves exactly one diagnostic instead of a second complaint
    /// about the semicolon.
    fn consume_optional_semicolon(&mut self) {
        if self.peek.kind == TokenKind::Semicolon {
            self.next_token();
        }
    }

    /// Shift the lookahead window forward by one token.
    fn next_token(&mut self) {
        self.current =
            std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Advance if the lookahead token matches `kind`; otherwise record a
    /// peek-mismatch diagnostic and leave the cursor where it is.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek.kind == kind {
            self.next_token();
            true
        } else {
            self.errors.push(ParseError {
                message: format!(
                    "expected next token to be {}, found {}",
                    kind, self.peek
                ),
                location: self.peek.location,
            });
            false
        }
    }

    fn peek_precedence(&self) -> Precedence {
        self.precedences
            .get(&self.peek.kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    fn current_precedence(&self) -> Precedence {
        self.precedences
            .get(&self.current.kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }
}
