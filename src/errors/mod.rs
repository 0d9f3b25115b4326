//! Error types and error handling for the checker.
//!
//! This module defines the single error type every phase reports through:
//!
//! - Error structures carrying the offending statement's position
//! - Specific error variants grouped into lexical, syntax and semantic
//!   categories
//! - Stable error names and human-readable tips used by the CLI

pub mod errors;
