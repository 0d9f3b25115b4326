//! Integration tests for end-to-end checking.
//!
//! These tests run whole files through normalization, tokenization and
//! validation, and drive the `hlcheck` binary the way a user would.

use std::{fs, path::PathBuf, process::Command};

use hl_checker::{
    check_source,
    lexer::tokens::TokenCategory,
    validator::result::{FAILURE_MESSAGE, SUCCESS_MESSAGE},
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn check_fixture(name: &str) -> hl_checker::CheckReport {
    let source = fs::read_to_string(fixture(name)).unwrap();
    check_source(&source, Some(name.to_string()))
}

#[test]
fn test_check_valid_program() {
    let report = check_fixture("valid_program.hl");

    assert!(report.is_ok(), "{:?}", report.result.reason);
    assert_eq!(report.result.message(), SUCCESS_MESSAGE);
    assert_eq!(
        report.clean.text(),
        "count:integer;\nrate:double;\ncount:=10;\nrate:=count+0.25;\n\
         If(count>=5)\noutput<<rate;\noutput<<\"done\";"
    );
}

#[test]
fn test_check_undeclared_identifier() {
    let report = check_fixture("undeclared.hl");

    assert!(!report.is_ok());
    assert_eq!(report.result.message(), FAILURE_MESSAGE);
    assert_eq!(report.result.failing_line, Some(2));
    assert_eq!(report.result.error_name(), Some("UndeclaredIdentifier"));
}

#[test]
fn test_check_type_mismatch_reports_source_line() {
    let report = check_fixture("type_mismatch.hl");

    assert_eq!(report.result.error_name(), Some("TypeMismatch"));
    // The blank line is dropped from the cleaned text but still counted.
    assert_eq!(report.result.failing_line, Some(3));
}

#[test]
fn test_check_unknown_symbol() {
    let report = check_fixture("unknown_symbol.hl");

    assert_eq!(report.result.error_name(), Some("UnrecognisedToken"));
    assert_eq!(report.result.failing_line, Some(2));
}

#[test]
fn test_check_empty_file() {
    let report = check_fixture("empty.hl");

    assert!(report.is_ok());
    assert!(report.clean.is_empty());
    assert!(report.report.is_empty());
}

#[test]
fn test_token_report_has_no_operands() {
    let report = check_fixture("valid_program.hl");

    assert!(report.report.iter().all(|entry| !matches!(
        entry.category,
        TokenCategory::Identifier
            | TokenCategory::IntegerLiteral
            | TokenCategory::DoubleLiteral
            | TokenCategory::StringLiteral
    )));
    assert_eq!(report.report.first().unwrap().lexeme, ":");
    assert_eq!(report.report.last().unwrap().lexeme, ";");
}

fn run_cli(name: &str, source: &str) -> (std::process::Output, PathBuf) {
    let dir = std::env::temp_dir().join(format!("hl_checker_cli_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("program.hl");
    fs::write(&path, source).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hlcheck"))
        .arg(&path)
        .current_dir(&dir)
        .output()
        .unwrap();

    (output, dir)
}

#[test]
fn test_cli_success() {
    let (output, dir) = run_cli("success", "x : integer;\nx := 5;\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "NO ERROR(S) FOUND\n");
    assert_eq!(fs::read_to_string(dir.join("NOSPACES.TXT")).unwrap(), "x:integer;\nx:=5;");
    assert_eq!(
        fs::read_to_string(dir.join("RES_SYM.TXT")).unwrap(),
        ":\tColonOp\ninteger\tReservedWord\n;\tSemicolon\n:=\tAssignOp\n;\tSemicolon\n"
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_failure() {
    let (output, dir) = run_cli("failure", "x : integer;\ny := x + 1;\n");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("ERROR\n"));
    assert!(stdout.contains("Error: UndeclaredIdentifier (Identifier `y` not declared)"));
    assert!(stdout.contains("2 | y:=x+1;"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_requires_one_argument() {
    let output = Command::new(env!("CARGO_BIN_EXE_hlcheck")).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_cli_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_hlcheck"))
        .arg("does/not/exist.hl")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("ERROR: Source file 'does/not/exist.hl' not found."));
}
