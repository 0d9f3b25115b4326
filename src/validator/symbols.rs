use std::{collections::HashMap, fmt::Display};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

/// The two scalar types a variable can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Integer,
    Double,
}

impl VarType {
    pub fn from_token_kind(kind: TokenKind) -> Option<VarType> {
        match kind {
            TokenKind::Integer => Some(VarType::Integer),
            TokenKind::Double => Some(VarType::Double),
            _ => None,
        }
    }

    /// Integer values widen into doubles; doubles never narrow.
    pub fn accepts(&self, value: VarType) -> bool {
        *self == VarType::Double || value == VarType::Integer
    }

    /// Result type of `self (+|-) other`.
    pub fn widen(&self, other: VarType) -> VarType {
        if *self == VarType::Double || other == VarType::Double {
            VarType::Double
        } else {
            VarType::Integer
        }
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarType::Integer => write!(f, "integer"),
            VarType::Double => write!(f, "double"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variable_lookup: HashMap<String, VarType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn declare_variable(
        &mut self,
        variable_name: String,
        variable_type: VarType,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.variable_lookup.contains_key(&variable_name) {
            Err(Error::new(
                ErrorImpl::DuplicateDeclaration {
                    identifier: variable_name,
                },
                current_position,
            ))
        } else {
            self.variable_lookup.insert(variable_name, variable_type);
            Ok(())
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<VarType> {
        self.variable_lookup.get(variable_name).copied()
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}
