//! Validator implementation for HL token streams.
//!
//! This module contains the main Validator struct and the `validate` entry
//! point. The validator walks the token stream statement by statement,
//! dispatching each one through the statement lookup table, and owns the
//! symbol table for the duration of one run.

use std::{collections::HashMap, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{create_stmt_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
    symbols::SymbolTable,
};

/// Where the validator is in a run. `Failed` and `Done` are terminal.
///
/// `InConditionalBody` only lasts while the statement guarded by an `If` is
/// checked; a body that fails leaves it in place until `validate` records
/// `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorState {
    Scanning,
    InConditionalBody,
    Failed,
    Done,
}

/// The grammar production a statement matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StmtKind {
    Declaration,
    Assignment,
    Output,
    Conditional,
}

/// A statement that matched a production, with the tokens it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedStmt {
    pub kind: StmtKind,
    pub span: Span,
    pub tokens: usize,
    pub body: Option<Box<CheckedStmt>>,
}

/// The main validator structure that maintains validation state.
///
/// This struct holds the token stream, the statement lookup table and the
/// symbol table built from the declarations seen so far. Errors are always
/// reported at the start of the statement being checked.
pub struct Validator {
    /// The list of tokens to check, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement handlers, keyed by first token
    stmt_lookup: StmtLookup,
    /// Declared identifiers and their types
    symbols: SymbolTable,
    state: ValidatorState,
    /// Start of the statement currently being checked
    statement_start: Position,
}

impl Validator {
    /// Creates a new Validator instance.
    ///
    /// An `EOF` token is appended if the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position::new(1, 1, Rc::clone(&file)));
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        let statement_start = tokens[0].span.start.clone();

        Validator {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            symbols: SymbolTable::new(),
            state: ValidatorState::Scanning,
            statement_start,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token `offset` places ahead.
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past the final `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Index of the current token in the stream.
    pub fn index(&self) -> usize {
        self.pos
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(self.unexpected(expected_kind.describe())),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Expects the `;` that closes a statement.
    ///
    /// Any other ordinary token in its place is reported as a likely missing
    /// semicolon. `Unknown` and `EOF` keep their usual errors.
    pub fn expect_semicolon(&mut self) -> Result<Token, Error> {
        let error = match self.current_token_kind() {
            TokenKind::Semicolon | TokenKind::Unknown | TokenKind::EOF => None,
            _ => Some(self.error(ErrorImpl::UnexpectedToken {
                token: self.current_token().value.clone(),
            })),
        };

        self.expect_error(TokenKind::Semicolon, error)
    }

    /// Builds the error for finding the current token where `expected` should be.
    ///
    /// Unknown tokens become lexical errors and running into `EOF` reports the
    /// statement as unterminated.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();
        let error = match token.kind {
            TokenKind::Unknown => ErrorImpl::UnrecognisedToken {
                token: token.value.clone(),
            },
            TokenKind::EOF => ErrorImpl::UnexpectedEndOfInput {
                expected: expected.to_string(),
            },
            _ => ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: format!("expected {}", expected),
            },
        };

        self.error(error)
    }

    /// Wraps `error` with the position of the statement being checked.
    pub fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.statement_start.clone())
    }

    /// Checks if there are statements left to check.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn state(&self) -> ValidatorState {
        self.state
    }

    pub fn set_state(&mut self, state: ValidatorState) {
        self.state = state;
    }

    /// Marks the current token as the start of a new statement.
    pub fn begin_statement(&mut self) {
        self.statement_start = self.current_token().span.start.clone();
    }

    pub fn statement_start(&self) -> &Position {
        &self.statement_start
    }

    /// Closes a statement that began at token `first` and position `start`.
    pub fn checked(
        &self,
        kind: StmtKind,
        first: usize,
        start: Position,
        body: Option<Box<CheckedStmt>>,
    ) -> CheckedStmt {
        let end = self.tokens[self.pos.saturating_sub(1)].span.end.clone();

        CheckedStmt {
            kind,
            span: Span { start, end },
            tokens: self.pos - first,
            body,
        }
    }
}

/// Checks a stream of tokens against the HL grammar.
///
/// This is the main entry point for validation. It creates a validator,
/// registers the statement handlers and checks statements until `EOF`,
/// stopping at the first error.
///
/// # Returns
///
/// A tuple containing:
/// - The Validator instance (with its final state and symbol table)
/// - Result containing either the checked statements or the first Error
pub fn validate(
    tokens: Vec<Token>,
    file: Rc<String>,
) -> (Validator, Result<Vec<CheckedStmt>, Error>) {
    let mut validator = Validator::new(tokens, file);
    create_stmt_lookups(&mut validator);

    let mut body = vec![];

    while validator.has_tokens() {
        match parse_stmt(&mut validator) {
            Ok(stmt) => body.push(stmt),
            Err(error) => {
                validator.set_state(ValidatorState::Failed);
                return (validator, Err(error));
            }
        }
    }

    validator.set_state(ValidatorState::Done);
    (validator, Ok(body))
}
