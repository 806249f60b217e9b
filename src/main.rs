// Monkey front end: parse a source file, or run the interactive read loop

mod parser;
mod repl;

use std::fs;
use std::io;
use std::path::Path;

use parser::lexer::Lexer;
use parser::parser::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    // No file argument: greet and hand stdin/stdout to the read loop.
    let source_file = match args.get(1) {
        Some(path) => path,
        None => {
            println!("This is the Monkey programming language.");
            println!("Feel free to type in commands (:tokens / :parse).");
            let stdin = io::stdin();
            repl::start(stdin.lock(), io::stdout())?;
            return Ok(());
        }
    };

    if !Path::new(source_file).exists() {
        eprintln!("Error: File '{}' not found", source_file);
        eprintln!(
            "Usage: {} [file.monkey]",
            args.first().map(|s| s.as_str()).unwrap_or("monkey-parser")
        );
        std::process::exit(1);
    }

    let source = fs::read_to_string(source_file)?;

    eprintln!("Parsing {}...", source_file);
    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        eprintln!("Found {} parse error(s):", parser.errors().len());
        for error in parser.errors() {
            eprintln!("  {}", error);
        }
        std::process::exit(1);
    }

    eprintln!(
        "Parsed successfully. Found {} statement(s).",
        program.statements.len()
    );
    println!("{}", program);

    Ok(())
}
