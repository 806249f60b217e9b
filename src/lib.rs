//! # Introduction
//!
//! The syntactic front end of a tree-walking interpreter for Monkey, a small
//! C-family expression/statement language.  Source text is tokenized on
//! demand and assembled into an abstract syntax tree by a Pratt parser; a
//! later evaluation stage walks the tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → token stream → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`] — produces one [`parser::token::Token`] per call,
//!    never failing; unrecognized bytes become `Illegal` tokens.
//! 2. [`parser::parser`] — pulls tokens lazily with one token of lookahead
//!    and builds a [`parser::ast::Program`], accumulating diagnostics
//!    instead of aborting on the first malformed statement.
//! 3. [`repl`] — line-at-a-time driver over the two surfaces above; not part
//!    of the core parsing path.
//!
//! ## Supported language subset
//!
//! Statements: `let`, `return`, expression statements.
//! Expressions: identifiers, 64-bit integer literals, prefix `!`/`-`, and
//! the binary operators `+ - * / < > == !=` with conventional precedence.

pub mod parser;
pub mod repl;
