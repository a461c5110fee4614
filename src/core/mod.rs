// Public modules
pub mod defaults;
pub mod error;
pub mod local_files;
pub mod output;
pub mod randomizer;

// Internal modules - not part of public API
pub(crate) mod json;
pub(crate) mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use randomizer::{RandomizeOptions, RenameRecord, Renamer};
