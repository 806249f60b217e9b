//! Interactive read loop for the Monkey front end
//!
//! Reads a line at a time, feeds it to a fresh [`Lexer`], and either prints
//! the raw token stream or hands the lexer to a [`Parser`] and prints the
//! parsed program. The mode is toggled at the prompt with `:tokens` and
//! `:parse`; parse mode is the default.

use std::io::{BufRead, Write};

use crate::parser::lexer::Lexer;
use crate::parser::parser::Parser;
use crate::parser::token::TokenKind;

const PROMPT: &str = ">> ";

/// What the loop does with each line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Print every token until end of input.
    Tokens,
    /// Parse the line and print the rendered program plus any diagnostics.
    Parse,
}

/// Run the read loop until the input stream ends.
pub fn start(input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
    let mut mode = Mode::Parse;

    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            ":tokens" => {
                mode = Mode::Tokens;
                writeln!(output, "printing token streams")?;
            }
            ":parse" => {
                mode = Mode::Parse;
                writeln!(output, "printing parsed programs")?;
            }
            trimmed => match mode {
                Mode::Tokens => print_tokens(trimmed, &mut output)?,
                Mode::Parse => print_program(trimmed, &mut output)?,
            },
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

fn print_tokens(line: &str, output: &mut impl Write) -> std::io::Result<()> {
    let mut lexer = Lexer::new(line);

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            break;
        }
        writeln!(output, "{:?}('{}')", token.kind, token.literal)?;
    }

    Ok(())
}

fn print_program(line: &str, output: &mut impl Write) -> std::io::Result<()> {
    let mut parser = Parser::new(Lexer::new(line));
    let program = parser.parse_program();

    if !program.statements.is_empty() {
        writeln!(output, "{}", program)?;
    }
    for error in parser.errors() {
        writeln!(output, "{}", error)?;
    }

    Ok(())
}
