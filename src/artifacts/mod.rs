//! Persistence of the two audit artifacts a run produces:
//!
//! - The cleaned source (`NOSPACES.TXT`)
//! - The reserved-word and symbol report (`RES_SYM.TXT`)

pub mod artifacts;
