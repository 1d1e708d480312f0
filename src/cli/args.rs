//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::config::Traversal;

/// Small algorithm drills: longest true-run, tree maximum, generic minimum container
#[derive(Parser, Debug)]
#[command(name = "hwtools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory searched for a local .hwtools.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Longest run of consecutive true flags
    Run {
        /// Flags: 1/0, t/f, true/false, y/n
        #[arg(value_parser = parse_flag)]
        flags: Vec<bool>,
    },

    /// Largest sum of K consecutive numbers
    Window {
        /// Window size
        #[arg(short)]
        k: usize,
        /// Numbers
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },

    /// Decimal value of a bit sequence (most significant first)
    Bits {
        /// Bits: 1/0, t/f, true/false, y/n
        #[arg(value_parser = parse_flag)]
        bits: Vec<bool>,
    },

    /// Inspect trees stored as TOML
    Tree {
        #[command(subcommand)]
        command: TreeCommands,
    },

    /// Minimum of the given values
    Min {
        /// Compare as strings instead of integers
        #[arg(short, long)]
        strings: bool,
        /// Values
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum TreeCommands {
    /// Maximum value in the tree (0 for an empty file)
    Max {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Render the tree
    Show {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Node count, depth, leaves and maximum
    Stats {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Values in traversal order
    Walk {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Traversal order (default from settings)
        #[arg(short, long, value_enum)]
        order: Option<Traversal>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a commented template
    Template,
    /// Print config file locations
    Path,
}

/// Parses a single flag in the forms accepted by `run` and `bits`.
pub fn parse_flag(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" => Ok(true),
        "0" | "f" | "false" | "n" | "no" => Ok(false),
        _ => Err(format!("not a flag: {s}")),
    }
}
