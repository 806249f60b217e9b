//! Token definitions for Monkey source code
//!
//! A [`Token`] pairs a [`TokenKind`] with the lexeme it was derived from.
//! Every token carries a [`SourceLocation`] so that parse errors can report
//! an accurate line and column without a separate token→location table.

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// All token categories produced by the lexer.
///
/// The set is closed: any byte the lexer cannot classify becomes
/// [`TokenKind::Illegal`] rather than a lexer error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input; returned forever once the lexer runs out of characters.
    Eof,
    /// A byte no other rule matched.
    Illegal,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Illegal => write!(f, "illegal character"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Int => write!(f, "integer literal"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Bang => write!(f, "'!'"),
            TokenKind::Asterisk => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Eq => write!(f, "'=='"),
            TokenKind::NotEq => write!(f, "'!='"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Function => write!(f, "'fn'"),
            TokenKind::Let => write!(f, "'let'"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::Return => write!(f, "'return'"),
        }
    }
}

/// A single lexeme classified by the lexer.
///
/// Tokens are produced once, handed to the parser, and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        literal: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident => write!(f, "identifier '{}'", self.literal),
            TokenKind::Int => write!(f, "integer literal {}", self.literal),
            TokenKind::Illegal => {
                write!(f, "illegal character '{}'", self.literal)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// Classify an identifier lexeme: keyword if it matches the fixed keyword
/// table, plain [`TokenKind::Ident`] otherwise.
pub fn lookup_identifier(ident: &str) -> TokenKind {
    match ident {
        "fn" => TokenKind::Function,
        "let" => TokenKind::Let,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "return" => TokenKind::Return,
        _ => TokenKind::Ident,
    }
}
