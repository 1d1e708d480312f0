//! Infrastructure layer: reading trees from files
//!
//! This layer turns external input into domain values.

pub mod error;
pub mod loader;

pub use error::{InfraError, InfraResult, IoResultExt};
pub use loader::{load_tree, parse_tree};
