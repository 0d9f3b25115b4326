//! Lexical analysis module for the checker.
//!
//! This module contains the lexer (tokenizer) that converts cleaned HL text
//! into a stream of tokens for validation. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of reserved words, identifiers, literals, and operators
//! - Deferred reporting of unrecognised characters as `Unknown` tokens
//! - Token position tracking for error reporting
//! - The reserved-word and symbol report handed to the artifact writer

pub mod lexer;
pub mod report;
pub mod tokens;

#[cfg(test)]
mod tests;
