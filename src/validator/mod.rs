//! Statement validation for HL token streams.
//!
//! This module checks a token stream against the HL grammar. It is a
//! recursive-descent validator with one function per production:
//!
//! - Declarations, assignments, output statements and conditionals
//! - Additive expressions with integer/double type checking
//! - A per-run symbol table that rejects redeclaration and undeclared use
//!
//! Statements are dispatched through a lookup table keyed by their first
//! token, and the first error stops validation of the whole file.

pub mod expr;
pub mod lookups;
pub mod result;
pub mod stmt;
pub mod symbols;
pub mod validator;
