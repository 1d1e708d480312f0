//! Domain layer: the algorithms and their data structures
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod container;
pub mod error;
pub mod scan;
pub mod tree;

pub use arena::{ArenaNode, TreeArena};
pub use container::MinContainer;
pub use error::{DomainError, DomainResult};
pub use scan::{bits_to_decimal, largest_window_sum, longest_run};
pub use tree::{max_value, Tree};
