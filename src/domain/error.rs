//! Domain-level errors (no I/O dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violated preconditions of the algorithms.
/// These are independent of I/O and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty container: no minimum element")]
    EmptyContainer,

    #[error("invalid window size {size} for sequence of length {len}")]
    InvalidWindow { size: usize, len: usize },

    #[error("largest sum of {size} consecutive values does not fit into i64")]
    SumOverflow { size: usize },

    #[error("arena already has a root node")]
    RootAlreadySet,

    #[error("parent node {parent:?} is not in the arena")]
    UnknownParent { parent: Index },

    #[error("bit sequence too wide: {bits} significant bits do not fit into 64")]
    Overflow { bits: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
