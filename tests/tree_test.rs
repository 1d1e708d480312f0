//! Tests for tree loading, maximum search and traversal using TOML fixtures

use std::fs;
use std::path::Path;

use rstest::rstest;
use tempfile::TempDir;

use hwtools::domain::{max_value, Tree, TreeArena};
use hwtools::infrastructure::{load_tree, InfraError};
use hwtools::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn fixture(name: &str) -> Option<Tree> {
    load_tree(&Path::new("tests/resources/trees").join(name)).unwrap()
}

// ============================================================
// Maximum Tests
// ============================================================

#[test]
fn given_sample_file_when_loading_then_matches_hand_built_tree() {
    let expected = Tree::new(7, vec![Tree::new(10, vec![Tree::leaf(5), Tree::leaf(3)])]);
    assert_eq!(fixture("sample.toml"), Some(expected));
}

#[rstest]
#[case("sample.toml", 10)]
#[case("wide.toml", 12)]
#[case("empty.toml", 0)]
fn given_fixture_when_finding_max_then_returns_largest_value(
    #[case] name: &str,
    #[case] expected: u32,
) {
    let tree = fixture(name);
    assert_eq!(max_value(tree.as_ref()), expected);
}

#[test]
fn given_empty_file_when_loading_then_tree_is_absent() {
    // The absent tree and a tree of zeros share the maximum 0; the Option tells them apart
    assert!(fixture("empty.toml").is_none());
    let zeros = Tree::new(0, vec![Tree::leaf(0)]);
    assert_eq!(max_value(Some(&zeros)), max_value(None));
}

// ============================================================
// Traversal Tests
// ============================================================

#[test]
fn given_wide_tree_when_walking_then_orders_differ_but_cover_all_nodes() {
    let tree = fixture("wide.toml").unwrap();

    let bfs: Vec<u32> = tree.iter_breadth_first().map(|n| n.value).collect();
    let dfs: Vec<u32> = tree.iter_depth_first().map(|n| n.value).collect();

    assert_eq!(bfs, vec![1, 4, 2, 6, 8, 0, 3, 12]);
    assert_eq!(dfs, vec![1, 4, 8, 0, 2, 6, 3, 12]);
    assert_eq!(tree.node_count(), 8);
}

#[test]
fn given_wide_tree_when_measuring_then_reports_depth_and_leaves() {
    let tree = fixture("wide.toml").unwrap();
    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.leaf_values(), vec![2, 8, 0, 12]);
}

// ============================================================
// Arena Tests
// ============================================================

#[test]
fn given_wide_tree_when_moved_into_arena_then_answers_match() {
    let tree = fixture("wide.toml").unwrap();
    let arena = TreeArena::from_tree(&tree);

    assert_eq!(arena.len(), tree.node_count());
    assert_eq!(arena.depth(), tree.depth());
    assert_eq!(arena.max_value(), tree.max_value());
    assert_eq!(arena.leaf_values(), vec![8, 0, 2, 12]);
    assert_eq!(arena.to_tree(), Some(tree));
}

// ============================================================
// Loader Error Tests
// ============================================================

#[test]
fn given_wrong_value_type_when_loading_then_reports_file_in_parse_error() {
    let err = load_tree(Path::new("tests/resources/trees/invalid.toml")).unwrap_err();
    match err {
        InfraError::Parse { origin, .. } => assert!(origin.ends_with("invalid.toml")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn given_missing_file_when_loading_then_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_tree(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, InfraError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn given_written_tree_when_loading_then_round_trips_through_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.toml");
    let tree = Tree::new(3, vec![Tree::leaf(1), Tree::new(9, vec![Tree::leaf(4)])]);
    fs::write(&path, toml::to_string(&tree).unwrap()).unwrap();

    assert_eq!(load_tree(&path).unwrap(), Some(tree));
}
