use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_condition, parse_expr},
    symbols::VarType,
    validator::{CheckedStmt, StmtKind, Validator, ValidatorState},
};

pub fn parse_stmt(validator: &mut Validator) -> Result<CheckedStmt, Error> {
    validator.begin_statement();

    let handler = validator
        .get_stmt_lookup()
        .get(&validator.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(validator),
        None => Err(validator.unexpected("a declaration, assignment, output or If statement")),
    }
}

pub fn parse_identifier_stmt(validator: &mut Validator) -> Result<CheckedStmt, Error> {
    match validator.peek_kind(1) {
        TokenKind::Colon => parse_declaration_stmt(validator),
        TokenKind::ColonEquals => parse_assignment_stmt(validator),
        _ => {
            validator.advance();
            Err(validator.unexpected("`:` or `:=` after the identifier"))
        }
    }
}

pub fn parse_declaration_stmt(validator: &mut Validator) -> Result<CheckedStmt, Error> {
    let start = validator.current_token().span.start.clone();
    let first = validator.index();

    let identifier = validator.expect(TokenKind::Identifier)?.value;
    validator.expect(TokenKind::Colon)?;

    let variable_type = match VarType::from_token_kind(validator.current_token_kind()) {
        Some(variable_type) => {
            validator.advance();
            variable_type
        }
        None => return Err(validator.unexpected("a type (`integer` or `double`)")),
    };

    validator.expect_semicolon()?;

    let position = validator.statement_start().clone();
    validator
        .symbols_mut()
        .declare_variable(identifier, variable_type, position)?;

    Ok(validator.checked(StmtKind::Declaration, first, start, None))
}

pub fn parse_assignment_stmt(validator: &mut Validator) -> Result<CheckedStmt, Error> {
    let start = validator.current_token().span.start.clone();
    let first = validator.index();

    let identifier = validator.expect(TokenKind::Identifier)?.value;
    validator.expect(TokenKind::ColonEquals)?;

    // The target is looked up before the right-hand side is parsed, so an
    // undeclared target is reported whatever follows it.
    let target = match validator.symbols().get_variable(&identifier) {
        Some(target) => target,
        None => return Err(validator.error(ErrorImpl::UndeclaredIdentifier { identifier })),
    };

    let value = parse_expr(validator)?;
    validator.expect_semicolon()?;

    if !target.accepts(value) {
        return Err(validator.error(ErrorImpl::TypeMismatch {
            expected: target.to_string(),
            received: value.to_string(),
        }));
    }

    Ok(validator.checked(StmtKind::Assignment, first, start, None))
}

pub fn parse_output_stmt(validator: &mut Validator) -> Result<CheckedStmt, Error> {
    let start = validator.current_token().span.start.clone();
    let first = validator.index();

    validator.expect(TokenKind::Output)?;
    validator.expect(TokenKind::LessLess)?;

    if validator.current_token_kind() == TokenKind::StringLiteral {
        validator.advance();
    } else {
        parse_expr(validator)?;
    }

    validator.expect_semicolon()?;

    Ok(validator.checked(StmtKind::Output, first, start, None))
}

pub fn parse_conditional_stmt(validator: &mut Validator) -> Result<CheckedStmt, Error> {
    let start = validator.current_token().span.start.clone();
    let first = validator.index();

    validator.expect(TokenKind::If)?;
    validator.expect(TokenKind::OpenParen)?;
    parse_condition(validator)?;
    validator.expect(TokenKind::CloseParen)?;

    let body = parse_body_stmt(validator)?;

    Ok(validator.checked(StmtKind::Conditional, first, start, Some(Box::new(body))))
}

/// The single statement guarded by an `If`: an assignment or an output.
pub fn parse_body_stmt(validator: &mut Validator) -> Result<CheckedStmt, Error> {
    validator.set_state(ValidatorState::InConditionalBody);
    validator.begin_statement();

    let body = match validator.current_token_kind() {
        TokenKind::Identifier if validator.peek_kind(1) == TokenKind::Colon => {
            Err(validator.error(ErrorImpl::UnexpectedTokenDetailed {
                token: validator.current_token().value.clone(),
                message: String::from("declarations are not allowed in an If body"),
            }))
        }
        TokenKind::Identifier => parse_identifier_stmt(validator),
        TokenKind::Output => parse_output_stmt(validator),
        TokenKind::If => Err(validator.error(ErrorImpl::UnexpectedTokenDetailed {
            token: validator.current_token().value.clone(),
            message: String::from("nested If statements are not supported"),
        })),
        _ => Err(validator.unexpected("an assignment or output statement after the If condition")),
    }?;

    validator.set_state(ValidatorState::Scanning);
    Ok(body)
}
