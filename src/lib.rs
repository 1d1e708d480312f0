//! Small algorithm drills behind a library API and a CLI.
//!
//! - [`domain::longest_run`]: longest run of `true` flags
//! - [`domain::Tree`] and [`domain::max_value`]: arbitrary-arity tree and its maximum
//! - [`domain::MinContainer`]: append-only collection with a minimum query

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
