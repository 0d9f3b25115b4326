use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{symbols::VarType, validator::Validator};

/// `Operand ((+|-) Operand)*`, returning the widened type of the operands.
pub fn parse_expr(validator: &mut Validator) -> Result<VarType, Error> {
    let mut expr_type = parse_operand(validator)?;

    while validator
        .current_token()
        .is_one_of_many(&[TokenKind::Plus, TokenKind::Dash])
    {
        validator.advance();
        let rhs = parse_operand(validator)?;
        expr_type = expr_type.widen(rhs);
    }

    Ok(expr_type)
}

pub fn parse_operand(validator: &mut Validator) -> Result<VarType, Error> {
    match validator.current_token_kind() {
        TokenKind::Identifier => {
            let identifier = validator.advance().value.clone();
            match validator.symbols().get_variable(&identifier) {
                Some(variable_type) => Ok(variable_type),
                None => Err(validator.error(ErrorImpl::UndeclaredIdentifier { identifier })),
            }
        }
        TokenKind::IntegerLiteral | TokenKind::DoubleLiteral => parse_literal(validator),
        TokenKind::Dash => {
            // Signed literal, e.g. `-5`.
            validator.advance();
            parse_literal(validator)
        }
        TokenKind::StringLiteral => Err(validator.error(ErrorImpl::UnexpectedTokenDetailed {
            token: validator.current_token().value.clone(),
            message: String::from("string literals can only be output on their own"),
        })),
        _ => Err(validator.unexpected("an identifier or numeric literal")),
    }
}

fn parse_literal(validator: &mut Validator) -> Result<VarType, Error> {
    let literal_type = match validator.current_token_kind() {
        TokenKind::IntegerLiteral => VarType::Integer,
        TokenKind::DoubleLiteral => VarType::Double,
        _ => return Err(validator.unexpected("a numeric literal")),
    };

    validator.advance();
    Ok(literal_type)
}

/// `Identifier RelOp Operand`, the condition between the parentheses of an `If`.
pub fn parse_condition(validator: &mut Validator) -> Result<(), Error> {
    let identifier = validator.expect(TokenKind::Identifier)?.value;
    if validator.symbols().get_variable(&identifier).is_none() {
        return Err(validator.error(ErrorImpl::UndeclaredIdentifier { identifier }));
    }

    if !validator.current_token_kind().is_relational() {
        return Err(validator.unexpected("a relational operator"));
    }
    validator.advance();

    parse_operand(validator)?;
    Ok(())
}
