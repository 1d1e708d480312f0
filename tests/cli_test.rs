//! Tests for argument parsing and command dispatch

use std::path::Path;

use clap::Parser;
use rstest::rstest;
use tempfile::TempDir;

use hwtools::cli::args::{parse_flag, Commands, TreeCommands};
use hwtools::cli::commands::{
    bits_value, min_value, run_length, tree_max, tree_stats, walk_values, window_sum,
};
use hwtools::cli::{execute_command, Cli};
use hwtools::config::Traversal;
use hwtools::domain::Tree;
use hwtools::exitcode;
use hwtools::infrastructure::load_tree;

fn run(dir: &TempDir, args: &[&str]) -> Result<(), i32> {
    let dir = dir.path().to_string_lossy().to_string();
    let mut argv = vec!["hwtools", "-C", dir.as_str()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("arguments parse");
    execute_command(&cli).map_err(|e| e.exit_code())
}

fn fixture(name: &str) -> Option<Tree> {
    load_tree(&Path::new("tests/resources/trees").join(name)).expect("fixture loads")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ============================================================
// Parsing Tests
// ============================================================

#[test]
fn given_mixed_flag_spellings_when_parsing_run_then_collects_bools() {
    let cli = Cli::try_parse_from(["hwtools", "run", "1", "t", "false", "Y"]).unwrap();
    match cli.command {
        Some(Commands::Run { flags }) => assert_eq!(flags, vec![true, true, false, true]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_unknown_flag_when_parsing_run_then_rejected() {
    assert!(Cli::try_parse_from(["hwtools", "run", "maybe"]).is_err());
    assert_eq!(parse_flag("2"), Err("not a flag: 2".to_string()));
}

#[test]
fn given_negative_numbers_when_parsing_window_then_accepted() {
    let cli = Cli::try_parse_from(["hwtools", "window", "-k", "2", "10", "-8", "2"]).unwrap();
    match cli.command {
        Some(Commands::Window { k, nums }) => {
            assert_eq!(k, 2);
            assert_eq!(nums, vec![10, -8, 2]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_walk_order_when_parsing_then_maps_to_traversal() {
    let cli =
        Cli::try_parse_from(["hwtools", "-ddd", "tree", "walk", "t.toml", "--order", "depth-first"])
            .unwrap();
    assert_eq!(cli.debug, 3);
    match cli.command {
        Some(Commands::Tree {
            command: TreeCommands::Walk { order, .. },
        }) => assert_eq!(order, Some(Traversal::DepthFirst)),
        other => panic!("unexpected command: {other:?}"),
    }
}

// ============================================================
// Dispatch Tests
// ============================================================

#[test]
fn given_valid_inputs_when_executing_then_succeeds() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run(&dir, &["run", "1", "1", "0", "1"]), Ok(()));
    assert_eq!(run(&dir, &["bits", "1", "0", "1"]), Ok(()));
    assert_eq!(run(&dir, &["min", "5", "3", "8"]), Ok(()));
    assert_eq!(run(&dir, &["min", "--strings", "banana", "apple"]), Ok(()));
    assert_eq!(run(&dir, &["config", "show"]), Ok(()));
}

#[test]
fn given_tree_fixture_when_executing_tree_commands_then_succeeds() {
    let dir = TempDir::new().unwrap();
    let sample = std::fs::canonicalize("tests/resources/trees/sample.toml").unwrap();
    let sample = sample.to_string_lossy().into_owned();
    for sub in ["max", "show", "stats", "walk"] {
        assert_eq!(run(&dir, &["tree", sub, sample.as_str()]), Ok(()), "tree {sub}");
    }
}

#[test]
fn given_no_values_when_executing_min_then_data_error() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run(&dir, &["min"]), Err(exitcode::DATAERR));
}

#[test]
fn given_non_integer_when_executing_min_then_usage_error() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run(&dir, &["min", "3", "x"]), Err(exitcode::USAGE));
}

#[test]
fn given_oversized_window_when_executing_then_data_error() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run(&dir, &["window", "-k", "5", "1", "2"]), Err(exitcode::DATAERR));
}

#[test]
fn given_missing_tree_file_when_executing_then_no_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml").to_string_lossy().into_owned();
    assert_eq!(
        run(&dir, &["tree", "max", missing.as_str()]),
        Err(exitcode::NOINPUT)
    );
}

#[test]
fn given_no_command_when_executing_then_usage_error() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run(&dir, &[]), Err(exitcode::USAGE));
}

#[test]
fn given_values_at_i64_bounds_when_executing_window_then_does_not_crash() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run(&dir, &["window", "-k", "1", "-1", "9223372036854775807"]), Ok(()));
    assert_eq!(
        run(&dir, &["window", "-k", "2", "9223372036854775807", "1"]),
        Err(exitcode::DATAERR)
    );
}

// ============================================================
// Output Tests
// ============================================================

#[test]
fn given_scan_inputs_when_formatting_then_prints_results() {
    assert_eq!(run_length(&[true, true, false, true]), "2");
    assert_eq!(window_sum(&[3, 5, 6, 2, 3, 4, 5], 3).unwrap(), "14");
    assert_eq!(window_sum(&[-1, i64::MAX], 1).unwrap(), i64::MAX.to_string());
    assert_eq!(bits_value(&[true, false, true, true, false]).unwrap(), "22");
}

#[test]
fn given_overflowing_window_when_formatting_then_data_error() {
    let err = window_sum(&[i64::MAX, 1], 2).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[rstest]
#[case(&["5", "3", "8"], false, "3")]
#[case(&["-2", "10", "-7"], false, "-7")]
#[case(&["banana", "apple", "cherry"], true, "apple")]
#[case(&["10", "9"], true, "10")]
fn given_values_when_formatting_min_then_prints_smallest(
    #[case] values: &[&str],
    #[case] as_strings: bool,
    #[case] expected: &str,
) {
    assert_eq!(min_value(&strings(values), as_strings).unwrap(), expected);
}

#[test]
fn given_sample_tree_when_formatting_max_then_prints_ten() {
    let tree = fixture("sample.toml");
    assert_eq!(tree_max(tree.as_ref()), "10");
    assert_eq!(tree_max(None), "0");
}

#[test]
fn given_wide_tree_when_formatting_walks_then_prints_both_orders() {
    let tree = fixture("wide.toml").unwrap();
    assert_eq!(walk_values(&tree, Traversal::BreadthFirst), "1 4 2 6 8 0 3 12");
    assert_eq!(walk_values(&tree, Traversal::DepthFirst), "1 4 8 0 2 6 3 12");
}

#[test]
fn given_wide_tree_when_formatting_stats_then_reports_shape() {
    let tree = fixture("wide.toml");
    assert_eq!(
        tree_stats(tree.as_ref()),
        vec!["nodes:  8", "depth:  4", "leaves: 8 0 2 12", "max:    12"]
    );
}

#[test]
fn given_empty_tree_when_formatting_stats_then_reports_zeros() {
    assert_eq!(
        tree_stats(fixture("empty.toml").as_ref()),
        vec!["nodes:  0", "depth:  0", "leaves: ", "max:    0"]
    );
}
