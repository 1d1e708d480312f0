//! Owned arbitrary-arity tree and its work-list traversals.
//!
//! Every node exclusively owns its children, so the structure is acyclic by
//! construction and dropping the root releases the whole tree. All traversals keep
//! their pending nodes in an explicit queue or stack instead of the call stack.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// One vertex of a rooted tree holding an unsigned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub value: u32,
    /// Ordered children; order drives traversal order, never the maximum.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Tree>,
}

/// Maximum value stored in `root`, or 0 for an absent tree.
///
/// An absent tree and a tree whose largest value is 0 both return 0; check the
/// `Option` to tell them apart.
pub fn max_value(root: Option<&Tree>) -> u32 {
    root.map_or(0, Tree::max_value)
}

impl Tree {
    pub fn new(value: u32, children: Vec<Tree>) -> Self {
        Self { value, children }
    }

    pub fn leaf(value: u32) -> Self {
        Self::new(value, Vec::new())
    }

    /// Appends `child` as the last child of this node.
    pub fn add_child(&mut self, child: Tree) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Largest value among all nodes.
    ///
    /// Pops a node from the work-list, folds its value into the running maximum and
    /// pushes its children until the work-list is empty.
    #[instrument(level = "debug", skip(self))]
    pub fn max_value(&self) -> u32 {
        let mut pending = vec![self];
        let mut max = 0;
        let mut visited = 0usize;

        while let Some(node) = pending.pop() {
            max = max.max(node.value);
            visited += 1;
            trace!(value = node.value, max, pending = pending.len(), "visit");
            pending.extend(node.children.iter());
        }

        debug!(visited, max, "tree maximum");
        max
    }

    /// Level-order iterator, children left to right.
    pub fn iter_breadth_first(&self) -> BreadthFirst<'_> {
        BreadthFirst {
            queue: VecDeque::from([self]),
        }
    }

    /// Pre-order iterator, children left to right.
    pub fn iter_depth_first(&self) -> DepthFirst<'_> {
        DepthFirst { stack: vec![self] }
    }

    pub fn node_count(&self) -> usize {
        self.iter_depth_first().count()
    }

    /// Number of levels; a single node has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((self, 1)); // (node, depth)

        while let Some((node, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            for child in &node.children {
                queue.push_back((child, depth + 1));
            }
        }

        max_depth
    }

    /// Values of all leaves in breadth-first order.
    pub fn leaf_values(&self) -> Vec<u32> {
        self.iter_breadth_first()
            .filter(|node| node.is_leaf())
            .map(|node| node.value)
            .collect()
    }

    /// Builds a `termtree` rendering of the values down to `max_depth` levels.
    ///
    /// Nodes at the depth limit that still have children get a single `…` leaf.
    /// Nodes are assembled in post-order so every child is finished before its parent.
    /// The result is at most `max_depth + 1` levels deep, which keeps `termtree`'s
    /// recursive formatting and drop bounded.
    pub fn to_display_tree(&self, max_depth: usize) -> termtree::Tree<String> {
        let max_depth = max_depth.max(1);
        let mut stack = vec![(self, 1, false)]; // (node, depth, expanded)
        let mut finished: Vec<termtree::Tree<String>> = Vec::new();

        while let Some((node, depth, expanded)) = stack.pop() {
            let label = node.value.to_string();
            if expanded {
                let leaves = finished.split_off(finished.len() - node.children.len());
                finished.push(termtree::Tree::new(label).with_leaves(leaves));
            } else if depth >= max_depth && !node.is_leaf() {
                finished.push(termtree::Tree::new(label).with_leaves([ELIDED.to_string()]));
            } else {
                stack.push((node, depth, true));
                for child in node.children.iter().rev() {
                    stack.push((child, depth + 1, false));
                }
            }
        }

        finished
            .pop()
            .unwrap_or_else(|| termtree::Tree::new(self.value.to_string()))
    }
}

/// Levels rendered by `Display` before deeper subtrees are elided.
pub const DISPLAY_DEPTH: usize = 64;

/// Marker standing in for subtrees below the display depth.
pub const ELIDED: &str = "…";

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_tree(DISPLAY_DEPTH))
    }
}

// Unlinks descendants onto a heap stack so very deep trees do not recurse on drop.
impl Drop for Tree {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

#[derive(Debug)]
pub struct BreadthFirst<'a> {
    queue: VecDeque<&'a Tree>,
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children.iter());
        Some(node)
    }
}

#[derive(Debug)]
pub struct DepthFirst<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
