// Integration tests for the Monkey front end

use monkey_parser::parser::ast::{Expression, Statement};
use monkey_parser::parser::lexer::Lexer;
use monkey_parser::parser::parser::Parser;
use monkey_parser::parser::token::TokenKind;

#[test]
fn test_source_to_tree_round_trip() {
    let source = r#"
        let five = 5;
        let ten = 10;
        let result = five + ten * 2;
        return result;
    "#;

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert!(
        parser.errors().is_empty(),
        "parse errors: {:?}",
        parser.errors()
    );
    assert_eq!(program.statements.len(), 4);
    assert_eq!(
        program.to_string(),
        "let five = 5;\
         let ten = 10;\
         let result = (five + (ten * 2));\
         return result;"
    );
}

#[test]
fn test_statement_shapes() {
    let source = "let x = 1; return x; x + 1;";

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 3);
    assert!(matches!(program.statements[0], Statement::Let { .. }));
    assert!(matches!(program.statements[1], Statement::Return { .. }));
    assert!(matches!(program.statements[2], Statement::Expr { .. }));
}

#[test]
fn test_let_values_are_attached() {
    let source = "let doubled = n * 2;";

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    match &program.statements[0] {
        Statement::Let { name, value, .. } => {
            assert_eq!(name.name, "doubled");
            assert!(matches!(value, Expression::Infix { .. }));
            assert_eq!(value.to_string(), "(n * 2)");
        }
        other => panic!("expected let statement, got {:?}", other),
    }
}

#[test]
fn test_malformed_program_still_returns_a_tree() {
    // The second statement is broken; the first and third must survive.
    let source = "let a = 1; let = 2; let c = 3;";

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert!(!parser.errors().is_empty());
    let let_names: Vec<&str> = program
        .statements
        .iter()
        .filter_map(|s| match s {
            Statement::Let { name, .. } => Some(name.name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(let_names, ["a", "c"]);
}

#[test]
fn test_illegal_bytes_flow_through_to_the_parser() {
    let mut lexer = Lexer::new("let § = 5;");
    lexer.next_token(); // let
    let illegal = lexer.next_token();
    assert_eq!(illegal.kind, TokenKind::Illegal);
    assert_eq!(illegal.literal, "§");

    // The parser, not the lexer, turns the illegal byte into a diagnostic.
    let mut parser = Parser::new(Lexer::new("let § = 5;"));
    let _ = parser.parse_program();
    assert!(!parser.errors().is_empty());
}

#[test]
fn test_fresh_parser_per_source_is_self_contained() {
    for _ in 0..3 {
        let mut parser = Parser::new(Lexer::new("let x = 1 + 2;"));
        let program = parser.parse_program();
        assert!(parser.errors().is_empty());
        assert_eq!(program.to_string(), "let x = (1 + 2);");
    }
}
