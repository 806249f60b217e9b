// AST (Abstract Syntax Tree) definitions for the Monkey front end

use std::fmt;

use super::token::Token;

/// An identifier, both in binding position (`let x = ...`) and as an
/// expression of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Self { token, name }
    }

    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Expression nodes.
///
/// Each variant keeps the token it was introduced by, so diagnostics and
/// `token_literal` can point back at the source lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    Prefix {
        token: Token,
        operator: String,
        operand: Box<Expression>,
    },
    Infix {
        token: Token,
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
            Expression::IntegerLiteral { token, .. } => &token.literal,
            Expression::Prefix { token, .. } => &token.literal,
            Expression::Infix { token, .. } => &token.literal,
        }
    }
}

impl fmt::Display for Expression {
    /// Canonical, fully parenthesized rendering used by diagnostics and the
    /// precedence tests.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral { token, .. } => {
                write!(f, "{}", token.literal)
            }
            Expression::Prefix {
                operator, operand, ..
            } => write!(f, "({}{})", operator, operand),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}

/// Statement nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Let {
        token: Token,
        name: Identifier,
        value: Expression,
    },
    Return {
        token: Token,
        value: Expression,
    },
    /// A bare expression followed by an optional semicolon.
    Expr {
        token: Token,
        expression: Expression,
    },
}

impl Statement {
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let { token, .. } => &token.literal,
            Statement::Return { token, .. } => &token.literal,
            Statement::Expr { token, .. } => &token.literal,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { token, name, value } => {
                write!(f, "{} {} = {};", token.literal, name, value)
            }
            Statement::Return { token, value } => {
                write!(f, "{} {};", token.literal, value)
            }
            Statement::Expr { expression, .. } => write!(f, "{}", expression),
        }
    }
}

/// Top-level program structure: the root of every parse, owning its
/// statements in source order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal of the first statement's token, or `""` for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
