use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tree::Tree;

/// Tree node stored in the arena.
#[derive(Debug)]
pub struct ArenaNode {
    pub value: u32,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena
    pub children: Vec<Index>,
}

/// Arena-based tree: nodes reference each other by index, the arena owns them all.
///
/// Uses a generational arena so stale indices resolve to `None` instead of aliasing
/// a reused slot.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<ArenaNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a node under `parent`; a node without parent becomes the root.
    ///
    /// Every stored node stays reachable from the root, so `len()` always equals
    /// `iter().count()`.
    ///
    /// # Errors
    /// [`DomainError::RootAlreadySet`] for a second parentless node,
    /// [`DomainError::UnknownParent`] if `parent` was never issued by this arena.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, value: u32, parent: Option<Index>) -> DomainResult<Index> {
        match parent {
            None if self.root.is_some() => return Err(DomainError::RootAlreadySet),
            Some(parent) if !self.arena.contains(parent) => {
                return Err(DomainError::UnknownParent { parent })
            }
            _ => {}
        }
        Ok(self.attach(value, parent))
    }

    // Callers guarantee `parent` is live, or that no root exists yet.
    fn attach(&mut self, value: u32, parent: Option<Index>) -> Index {
        let node = ArenaNode {
            value,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&ArenaNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Largest value reachable from the root, 0 for an empty arena.
    #[instrument(level = "debug", skip(self))]
    pub fn max_value(&self) -> u32 {
        let max = self.iter().map(|(_, node)| node.value).max().unwrap_or(0);
        debug!(max, nodes = self.len(), "arena maximum");
        max
    }

    /// Number of levels below and including the root, 0 when empty.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            if let Some(node) = self.get_node(idx) {
                max_depth = max_depth.max(depth);
                stack.extend(node.children.iter().map(|&child| (child, depth + 1)));
            }
        }

        max_depth
    }

    /// Values of all leaf nodes in pre-order.
    pub fn leaf_values(&self) -> Vec<u32> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.value)
            .collect()
    }

    /// Copies an owned tree into a fresh arena, preserving child order.
    #[instrument(level = "debug", skip(tree))]
    pub fn from_tree(tree: &Tree) -> Self {
        let mut arena = Self::new();
        let mut stack = vec![(tree, None)];

        while let Some((node, parent)) = stack.pop() {
            let idx = arena.attach(node.value, parent);
            // Reverse so the leftmost child is inserted first
            stack.extend(node.children.iter().rev().map(|child| (child, Some(idx))));
        }

        arena
    }

    /// Rebuilds an owned tree from the arena, `None` for an empty arena.
    pub fn to_tree(&self) -> Option<Tree> {
        let root = self.root?;
        let mut stack = vec![(root, false)];
        let mut finished: Vec<Tree> = Vec::new();

        while let Some((idx, expanded)) = stack.pop() {
            let Some(node) = self.get_node(idx) else {
                continue;
            };
            if expanded {
                let resolved = node
                    .children
                    .iter()
                    .filter(|&&child| self.arena.contains(child))
                    .count();
                let children = finished.split_off(finished.len() - resolved);
                finished.push(Tree::new(node.value, children));
            } else {
                stack.push((idx, true));
                for &child in node.children.iter().rev() {
                    stack.push((child, false));
                }
            }
        }

        finished.pop()
    }
}

impl From<&Tree> for TreeArena {
    fn from(tree: &Tree) -> Self {
        Self::from_tree(tree)
    }
}

/// Pre-order iterator over the nodes reachable from the root.
#[derive(Debug)]
pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a ArenaNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
