//! TOML tree files.
//!
//! A file holds one root table with a `value` and an optional `children` array of
//! tables of the same shape. An empty file stands for the empty tree.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::domain::Tree;
use crate::infrastructure::error::{InfraError, InfraResult, IoResultExt};

/// Reads the tree stored at `path`; `None` if the file has no content.
#[instrument(level = "debug")]
pub fn load_tree(path: &Path) -> InfraResult<Option<Tree>> {
    let content = fs::read_to_string(path).with_path_context("read tree", path)?;
    parse_from(&content, &path.display().to_string())
}

/// Parses tree TOML from memory; `None` if `content` is blank.
pub fn parse_tree(content: &str) -> InfraResult<Option<Tree>> {
    parse_from(content, "<input>")
}

fn parse_from(content: &str, origin: &str) -> InfraResult<Option<Tree>> {
    if content.trim().is_empty() {
        debug!(origin, "empty tree");
        return Ok(None);
    }

    let tree: Tree = toml::from_str(content).map_err(|e| InfraError::Parse {
        origin: origin.to_string(),
        message: e.message().to_string(),
    })?;
    debug!(origin, nodes = tree.node_count(), "parsed tree");
    Ok(Some(tree))
}
