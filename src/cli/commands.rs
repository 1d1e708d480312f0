//! Command dispatch: turns parsed arguments into domain calls and prints results.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, TreeCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings, Traversal};
use crate::domain::{
    bits_to_decimal, largest_window_sum, longest_run, max_value, MinContainer, Tree, TreeArena,
};
use crate::infrastructure::{load_tree, InfraError};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(|e| InfraError::io("current directory", e))?,
    };
    let settings = Settings::load(Some(dir.as_path()))?;
    debug!(?settings, "effective settings");
    if !settings.color {
        output::disable_color();
    }

    match &cli.command {
        Some(Commands::Run { flags }) => cmd_run(flags),
        Some(Commands::Window { k, nums }) => cmd_window(nums, *k),
        Some(Commands::Bits { bits }) => cmd_bits(bits),
        Some(Commands::Tree { command }) => execute_tree(command, &settings),
        Some(Commands::Min { strings, values }) => cmd_min(values, *strings),
        Some(Commands::Config { command }) => execute_config(command, &settings, &dir),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage("no command given, see --help".to_string())),
    }
}

#[instrument(level = "debug")]
fn cmd_run(flags: &[bool]) -> CliResult<()> {
    output::info(&run_length(flags));
    Ok(())
}

#[instrument(level = "debug")]
fn cmd_window(nums: &[i64], k: usize) -> CliResult<()> {
    output::info(&window_sum(nums, k)?);
    Ok(())
}

#[instrument(level = "debug")]
fn cmd_bits(bits: &[bool]) -> CliResult<()> {
    output::info(&bits_value(bits)?);
    Ok(())
}

#[instrument(level = "debug")]
fn cmd_min(values: &[String], strings: bool) -> CliResult<()> {
    output::info(&min_value(values, strings)?);
    Ok(())
}

/// Longest run of `true` flags, as printed by `run`.
pub fn run_length(flags: &[bool]) -> String {
    longest_run(flags).to_string()
}

/// Largest window sum, as printed by `window`.
pub fn window_sum(nums: &[i64], k: usize) -> CliResult<String> {
    Ok(largest_window_sum(nums, k)?.to_string())
}

/// Decoded bit sequence, as printed by `bits`.
pub fn bits_value(bits: &[bool]) -> CliResult<String> {
    Ok(bits_to_decimal(bits)?.to_string())
}

/// Smallest of `values`, compared as strings or as `i64` integers.
pub fn min_value(values: &[String], strings: bool) -> CliResult<String> {
    if strings {
        let container: MinContainer<&str> = values.iter().map(String::as_str).collect();
        return Ok(container.find_min()?.to_string());
    }
    let container = values
        .iter()
        .map(|v| {
            v.parse::<i64>()
                .map_err(|e| CliError::InvalidArgs(format!("{v}: {e}")))
        })
        .collect::<CliResult<MinContainer<i64>>>()?;
    Ok(container.find_min()?.to_string())
}

/// Maximum of a possibly empty tree, as printed by `tree max`.
pub fn tree_max(tree: Option<&Tree>) -> String {
    max_value(tree).to_string()
}

/// `name: value` lines printed by `tree stats`; an empty tree reports zeros.
pub fn tree_stats(tree: Option<&Tree>) -> Vec<String> {
    let arena = tree.map_or_else(TreeArena::new, TreeArena::from_tree);
    vec![
        format!("nodes:  {}", arena.len()),
        format!("depth:  {}", arena.depth()),
        format!("leaves: {}", arena.leaf_values().iter().join(" ")),
        format!("max:    {}", arena.max_value()),
    ]
}

/// Space-separated node values in the given order, as printed by `tree walk`.
pub fn walk_values(tree: &Tree, order: Traversal) -> String {
    match order {
        Traversal::BreadthFirst => tree.iter_breadth_first().map(|n| n.value).join(" "),
        Traversal::DepthFirst => tree.iter_depth_first().map(|n| n.value).join(" "),
    }
}

fn execute_tree(command: &TreeCommands, settings: &Settings) -> CliResult<()> {
    match command {
        TreeCommands::Max { file } => cmd_tree_max(file, settings.show_tree),
        TreeCommands::Show { file } => cmd_tree_show(file),
        TreeCommands::Stats { file } => cmd_tree_stats(file),
        TreeCommands::Walk { file, order } => {
            cmd_tree_walk(file, order.unwrap_or(settings.traversal))
        }
    }
}

/// Loads a tree file, warning when it holds no tree.
fn load_or_warn(file: &Path) -> CliResult<Option<Tree>> {
    let tree = load_tree(file)?;
    if tree.is_none() {
        output::warning(&format!("empty tree: {}", file.display()));
    }
    Ok(tree)
}

#[instrument(level = "debug")]
fn cmd_tree_max(file: &Path, show_tree: bool) -> CliResult<()> {
    let tree = load_or_warn(file)?;
    if let (true, Some(tree)) = (show_tree, &tree) {
        output::info(tree);
    }
    output::action("max", &tree_max(tree.as_ref()));
    Ok(())
}

#[instrument(level = "debug")]
fn cmd_tree_show(file: &Path) -> CliResult<()> {
    if let Some(tree) = load_or_warn(file)? {
        output::info(&tree);
    }
    Ok(())
}

#[instrument(level = "debug")]
fn cmd_tree_stats(file: &Path) -> CliResult<()> {
    let tree = load_or_warn(file)?;
    output::header(&file.display());
    for line in tree_stats(tree.as_ref()) {
        output::detail(&line);
    }
    Ok(())
}

#[instrument(level = "debug")]
fn cmd_tree_walk(file: &Path, order: Traversal) -> CliResult<()> {
    if let Some(tree) = load_or_warn(file)? {
        output::info(&walk_values(&tree, order));
    }
    Ok(())
}

fn execute_config(command: &ConfigCommands, settings: &Settings, dir: &Path) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            let describe = |path: PathBuf| {
                let state = if path.exists() { "exists" } else { "missing" };
                format!("{} ({state})", path.display())
            };
            match global_config_path() {
                Some(path) => output::action("global", &describe(path)),
                None => output::action("global", "unavailable"),
            }
            output::action("local", &describe(local_config_path(dir)));
        }
    }
    Ok(())
}
