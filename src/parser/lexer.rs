//! Lexer (tokenizer) for Monkey source code
//!
//! Produces [`Token`]s on demand: each [`Lexer::next_token`] call consumes one
//! or more input characters and returns exactly one token. Lexing never fails;
//! unrecognized bytes are emitted as [`TokenKind::Illegal`] tokens and left
//! for the parser to complain about.

use super::token::{lookup_identifier, SourceLocation, Token, TokenKind};

/// On-demand lexer over an in-memory source string.
///
/// Forward-only: every character is visited once, and once the input is
/// exhausted `next_token` keeps returning [`TokenKind::Eof`].
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();

        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Token::new(TokenKind::Eof, "", loc),
        };

        match ch {
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Eq, "==", loc)
                } else {
                    Token::new(TokenKind::Assign, "=", loc)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::NotEq, "!=", loc)
                } else {
                    Token::new(TokenKind::Bang, "!", loc)
                }
            }
            '+' => Token::new(TokenKind::Plus, "+", loc),
            '-' => Token::new(TokenKind::Minus, "-", loc),
            '*' => Token::new(TokenKind::Asterisk, "*", loc),
            '/' => Token::new(TokenKind::Slash, "/", loc),
            '<' => Token::new(TokenKind::Lt, "<", loc),
            '>' => Token::new(TokenKind::Gt, ">", loc),
            ',' => Token::new(TokenKind::Comma, ",", loc),
            ';' => Token::new(TokenKind::Semicolon, ";", loc),
            '(' => Token::new(TokenKind::LParen, "(", loc),
            ')' => Token::new(TokenKind::RParen, ")", loc),
            '{' => Token::new(TokenKind::LBrace, "{", loc),
            '}' => Token::new(TokenKind::RBrace, "}", loc),

            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch, loc),
            '0'..='9' => self.number_literal(ch, loc),

            _ => Token::new(TokenKind::Illegal, ch.to_string(), loc),
        }
    }

    /// Read a run of letters/underscores and classify it against the
    /// keyword table.
    fn identifier_or_keyword(
        &mut self,
        first_char: char,
        loc: SourceLocation,
    ) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphabetic() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = lookup_identifier(&ident);
        Token::new(kind, ident, loc)
    }

    /// Read a run of digits (integers only, no sign or radix prefix).
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Int, num_str, loc)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = *self.input.get(self.position)?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_tokens(input: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            out.push((token.kind, token.literal));
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn test_let_statement_tokens() {
        let tokens = collect_tokens("let five = 5;");

        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ];

        assert_eq!(tokens.len(), expected.len());
        for ((kind, literal), (want_kind, want_literal)) in
            tokens.iter().zip(expected)
        {
            assert_eq!(*kind, want_kind);
            assert_eq!(literal, want_literal);
        }
    }

    #[test]
    fn test_full_token_set() {
        let input = "let add = fn(x, y) { x + y; };\n\
                     if (5 < 10) { return true; } else { return false; }\n\
                     !-/*5; 10 == 10; 10 != 9; 5 > 4;";
        let kinds: Vec<TokenKind> =
            collect_tokens(input).into_iter().map(|(k, _)| k).collect();

        use TokenKind::*;
        assert_eq!(
            kinds,
            vec![
                Let, Ident, Assign, Function, LParen, Ident, Comma, Ident,
                RParen, LBrace, Ident, Plus, Ident, Semicolon, RBrace,
                Semicolon, If, LParen, Int, Lt, Int, RParen, LBrace, Return,
                True, Semicolon, RBrace, Else, LBrace, Return, False,
                Semicolon, RBrace, Bang, Minus, Slash, Asterisk, Int,
                Semicolon, Int, Eq, Int, Semicolon, Int, NotEq, Int,
                Semicolon, Int, Gt, Int, Semicolon, Eof,
            ]
        );
    }

    #[test]
    fn test_two_char_operator_disambiguation() {
        let mut lexer = Lexer::new("== = != !");

        assert_eq!(lexer.next_token().kind, TokenKind::Eq);
        assert_eq!(lexer.next_token().kind, TokenKind::Assign);
        assert_eq!(lexer.next_token().kind, TokenKind::NotEq);
        assert_eq!(lexer.next_token().kind, TokenKind::Bang);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_illegal_character() {
        let mut lexer = Lexer::new("let @ = 5;");

        assert_eq!(lexer.next_token().kind, TokenKind::Let);
        let illegal = lexer.next_token();
        assert_eq!(illegal.kind, TokenKind::Illegal);
        assert_eq!(illegal.literal, "@");
        // Lexing resumes after the bad byte.
        assert_eq!(lexer.next_token().kind, TokenKind::Assign);
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);

        for _ in 0..10 {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.literal, "");
        }
    }

    #[test]
    fn test_locations() {
        let mut lexer = Lexer::new("let x;\n  foo");

        assert_eq!(lexer.next_token().location, SourceLocation::new(1, 1));
        assert_eq!(lexer.next_token().location, SourceLocation::new(1, 5));
        assert_eq!(lexer.next_token().location, SourceLocation::new(1, 6));
        assert_eq!(lexer.next_token().location, SourceLocation::new(2, 3));
    }
}
