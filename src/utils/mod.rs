//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `path` - Tilde expansion and lexical path normalization

pub mod io;
pub mod path;
