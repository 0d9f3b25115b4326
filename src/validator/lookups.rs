use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{stmt::*, validator::{CheckedStmt, Validator}};

pub type StmtHandler = fn(&mut Validator) -> Result<CheckedStmt, Error>;

pub fn create_stmt_lookups(validator: &mut Validator) {
    // Declarations and assignments both start with an identifier.
    validator.stmt(TokenKind::Identifier, parse_identifier_stmt);
    validator.stmt(TokenKind::Output, parse_output_stmt);
    validator.stmt(TokenKind::If, parse_conditional_stmt);
}

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
