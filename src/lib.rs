#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::{
        lexer::tokenize,
        report::{token_report, ReportEntry},
        tokens::Token,
    },
    normalizer::normalizer::{normalize, CleanSource},
    validator::{result::ValidationResult, validator::validate},
};

pub mod artifacts;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod normalizer;
pub mod validator;

extern crate regex;

/// A location in the original source file.
///
/// `line` is the 1-based line of the file as the user wrote it, `column` is
/// the 1-based column inside the cleaned line the lexer scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Everything produced by one run over one source file.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub clean: CleanSource,
    pub tokens: Vec<Token>,
    pub report: Vec<ReportEntry>,
    pub result: ValidationResult,
}

impl CheckReport {
    pub fn new(clean: CleanSource, tokens: Vec<Token>, result: ValidationResult) -> Self {
        let report = token_report(&tokens);
        CheckReport {
            clean,
            tokens,
            report,
            result,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.ok
    }
}

/// Runs normalizer, lexer and validator over `source`.
pub fn check_source(source: &str, file: Option<String>) -> CheckReport {
    let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));

    let clean = normalize(source);
    let tokens = tokenize(&clean, Some(file_name.to_string()));
    let (_, outcome) = validate(tokens.clone(), Rc::clone(&file_name));

    CheckReport::new(clean, tokens, ValidationResult::from(&outcome))
}

pub fn format_error(error: &Error, clean: &CleanSource) -> String {
    /*
        Error: UndeclaredIdentifier (Identifier `y` not declared)
        -> prog.hl
           |
         2 | y:=x+1;
           | ^
    */

    let position = error.get_position();
    let line_text = clean.source_line_text(position.line).unwrap_or("");

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.file));
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_str, line_text));

    let arrows = position.column.max(1) as usize;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}
