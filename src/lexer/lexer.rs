use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{normalizer::normalizer::CleanSource, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    /// Panics on an invalid pattern; only called for the static table.
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    /// Tried in order; the first pattern matching at the cursor wins, so
    /// two-character operators sit above their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^\\s+", skip_handler),
        RegexPattern::new("^[0-9][A-Za-z0-9.]*", number_handler),
        RegexPattern::new("^[A-Za-z][A-Za-z0-9]*", symbol_handler),
        RegexPattern::new("^\"[^\"\\n]*\"", string_handler),
        RegexPattern::new("^:=", MK_DEFAULT_HANDLER!(TokenKind::ColonEquals, ":=")),
        RegexPattern::new("^<<", MK_DEFAULT_HANDLER!(TokenKind::LessLess, "<<")),
        RegexPattern::new("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
    ];
    static ref INTEGER_LITERAL: Regex = Regex::new("^[0-9]+$").unwrap();
    static ref DOUBLE_LITERAL: Regex = Regex::new("^[0-9]+\\.[0-9]+$").unwrap();
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: CleanSource,
    pos: usize,
    line: u32,
    line_start: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &CleanSource, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source: source.clone(),
            pos: 0,
            line: 1,
            line_start: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        let end = self.pos + n;
        for (offset, c) in self.source.text()[self.pos..end].char_indices() {
            if c == '\n' {
                self.line += 1;
                self.line_start = self.pos + offset + 1;
            }
        }
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Emits `value` as a token of `kind` starting at the cursor and moves
    /// past it.
    pub fn push_lexeme(&mut self, kind: TokenKind, value: String) {
        let start = self.position();
        self.advance_n(value.len());
        self.push(MK_TOKEN!(
            kind,
            value,
            Span {
                start,
                end: self.position(),
            }
        ));
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source.text()[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.text().len()
    }

    pub fn position(&self) -> Position {
        let column = self.source.text()[self.line_start..self.pos].chars().count() as u32 + 1;
        Position::new(
            self.source.source_line(self.line),
            column,
            Rc::clone(&self.file),
        )
    }
}

fn matched_text(lexer: &Lexer, regex: &Regex) -> String {
    regex
        .find(lexer.remainder())
        .map(|found| found.as_str().to_string())
        .unwrap_or_default()
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);

    let kind = if INTEGER_LITERAL.is_match(&matched) {
        TokenKind::IntegerLiteral
    } else if DOUBLE_LITERAL.is_match(&matched) {
        TokenKind::DoubleLiteral
    } else {
        // `1.2.3`, `5.` and `12ab` all land here.
        TokenKind::Unknown
    };

    lexer.push_lexeme(kind, matched);
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    lexer.push_lexeme(TokenKind::StringLiteral, matched);
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);

    if let Some(kind) = RESERVED_LOOKUP.get(matched.as_str()) {
        lexer.push_lexeme(*kind, matched);
    } else {
        lexer.push_lexeme(TokenKind::Identifier, matched);
    }
}

/// Scans cleaned source into tokens, always terminated by an `EOF` token.
///
/// Characters no pattern accepts become `Unknown` tokens; rejecting them is
/// left to the validator so errors point at the statement they occur in.
pub fn tokenize(source: &CleanSource, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let unknown = lex.at().to_string();
                lex.push_lexeme(TokenKind::Unknown, unknown);
            }
        }
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span {
            start: end.clone(),
            end
        }
    ));
    lex.tokens
}
