//! Monkey source code parser
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree:
//! - [`token`]: Token kinds and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens, one at a time)
//! - [`ast`]: AST node definitions and canonical rendering
//! - [`parser`]: Parsing (tokens → AST)
//!
//! # Supported language subset
//!
//! Statements: `let` bindings, `return`, bare expression statements.
//! Expressions: identifiers, integer literals, prefix `!`/`-`, and the
//! binary operators `+ - * / < > == !=`.
//!
//! # Parser implementation
//!
//! Hand-written Pratt parser: per-token prefix/infix rules dispatched by
//! exhaustive match over the token kind, with a precedence table resolving
//! operator binding order. No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;
