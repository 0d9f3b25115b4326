//! Whitespace normalization for HL source text.
//!
//! The normalizer produces the canonical text the lexer scans and the
//! checker persists as its cleaned-source artifact. It:
//!
//! - Removes spaces, tabs and carriage returns between lexemes
//! - Keeps a single space where two lexemes would otherwise fuse
//! - Drops blank lines while remembering which source line each kept line
//!   came from

pub mod normalizer;
