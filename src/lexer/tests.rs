//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Reserved words and identifiers
//! - Integer, double and string literals
//! - Operators and delimiters, longest match first
//! - Deferred `Unknown` tokens
//! - Positions and the reserved-word/symbol report

use crate::normalizer::normalizer::normalize;

use super::{
    lexer::tokenize,
    report::{render_token_report, token_report, ReportEntry},
    tokens::{Token, TokenCategory, TokenKind},
};

fn lex(source: &str) -> Vec<Token> {
    tokenize(&normalize(source), Some("test.hl".to_string()))
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_reserved_words() {
    let tokens = lex("integer double If output");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[1].kind, TokenKind::Double);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Output);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
    assert!(tokens[..4].iter().all(|token| token.category() == TokenCategory::ReservedWord));
}

#[test]
fn test_reserved_words_are_case_sensitive() {
    let tokens = lex("if Integer OUTPUT iff");

    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Identifier, "lexeme {}", token.value);
    }
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex("x total2 CamelCase");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "total2");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "CamelCase");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = lex("42 3.14 0 100.5");

    assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::DoubleLiteral);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::IntegerLiteral);
    assert_eq!(tokens[3].kind, TokenKind::DoubleLiteral);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_malformed_numbers_are_unknown() {
    for source in ["1.2.3", "5.", "12ab", "3.x"] {
        let tokens = lex(source);
        assert_eq!(tokens[0].kind, TokenKind::Unknown, "source {}", source);
        assert_eq!(tokens[0].value, source);
        assert_eq!(tokens[1].kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_string_literal() {
    let tokens = lex("output << \"hello  world\";");

    assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[2].value, "\"hello  world\"");
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
}

#[test]
fn test_unterminated_string_is_unknown() {
    let tokens = lex("output<<\"abc;");

    assert_eq!(tokens[2].kind, TokenKind::Unknown);
    assert_eq!(tokens[2].value, "\"");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds(":= : << < <= > >= == != + -"),
        vec![
            TokenKind::ColonEquals,
            TokenKind::Colon,
            TokenKind::LessLess,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_two_character_operators_win() {
    assert_eq!(
        kinds("x:=y<<z<=1"),
        vec![
            TokenKind::Identifier,
            TokenKind::ColonEquals,
            TokenKind::Identifier,
            TokenKind::LessLess,
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::IntegerLiteral,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_delimiters() {
    assert_eq!(
        kinds("( ) ;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_unrecognised_characters_are_deferred() {
    let tokens = lex("x := #;\n@");

    assert_eq!(tokens[2].kind, TokenKind::Unknown);
    assert_eq!(tokens[2].value, "#");
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
    assert_eq!(tokens[4].kind, TokenKind::Unknown);
    assert_eq!(tokens[4].value, "@");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_lone_equals_and_bang_are_unknown() {
    assert_eq!(kinds("= !"), vec![TokenKind::Unknown, TokenKind::Unknown, TokenKind::EOF]);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = lex("x : integer;");

    assert_eq!(tokens.len(), 5); // x, :, integer, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Colon);
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_positions_follow_source_lines() {
    let tokens = lex("x : integer;\n\n   y := 2;\n");

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[2].span.start.column, 3);
    assert_eq!(tokens[2].span.end.column, 10);

    // `y` sits on the third line of the file; blank lines are not counted out.
    assert_eq!(tokens[4].value, "y");
    assert_eq!(tokens[4].span.start.line, 3);
    assert_eq!(tokens[4].span.start.column, 1);
    assert_eq!(tokens[6].value, "2");
    assert_eq!(tokens[6].span.start.column, 4);
}

#[test]
fn test_file_name_defaults_to_shell() {
    let tokens = tokenize(&normalize("x"), None);

    assert_eq!(tokens[0].span.start.file.as_str(), "shell");
}

#[test]
fn test_empty_source_is_only_eof() {
    let tokens = lex("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_token_report_keeps_order_and_skips_operands() {
    let tokens = lex("x:integer;\nIf(x<5)\n  output<<x+1.5;");
    let report = token_report(&tokens);

    let lexemes: Vec<&str> = report.iter().map(|entry| entry.lexeme.as_str()).collect();
    assert_eq!(
        lexemes,
        vec![":", "integer", ";", "If", "(", "<", ")", "output", "<<", "+", ";"]
    );
    assert_eq!(
        report[0],
        ReportEntry {
            lexeme: ":".to_string(),
            category: TokenCategory::ColonOp
        }
    );
    assert_eq!(report[8].category, TokenCategory::OutputOp);
}

#[test]
fn test_token_report_excludes_unknown_and_strings() {
    let tokens = lex("output<<\"hi\"; #");
    let report = token_report(&tokens);

    let categories: Vec<TokenCategory> = report.iter().map(|entry| entry.category).collect();
    assert_eq!(
        categories,
        vec![
            TokenCategory::ReservedWord,
            TokenCategory::OutputOp,
            TokenCategory::Semicolon
        ]
    );
}

#[test]
fn test_render_token_report() {
    let tokens = lex("x:=1;");
    let rendered = render_token_report(&token_report(&tokens));

    assert_eq!(rendered, ":=\tAssignOp\n;\tSemicolon\n");
}
