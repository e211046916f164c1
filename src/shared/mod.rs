/// Shared kernel - error types, result alias and file-system guards
/// used by every layer.
pub mod error;
pub mod result;
pub mod security;

pub use error::{CatalogError, ExitCode};
pub use result::Result;
