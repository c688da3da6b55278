//! Prefix tree over the acceptable words, used to cut search branches early.
//!
//! Nodes live in a flat arena and are addressed by index. The search carries the node
//! for its current letters and steps one child per extension, so each prefix check is a
//! single map lookup. A branch whose letters fall off the tree cannot spell any
//! acceptable word, which makes pruning it invisible in the search output.

use std::collections::HashMap;

/// Index of a node in the arena.
pub type NodeId = usize;

#[derive(Debug, Default, Clone)]
struct Node {
    children: HashMap<char, NodeId>,
    terminal: bool,
}

#[derive(Debug, Clone)]
pub struct PrefixTree {
    nodes: Vec<Node>,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self { nodes: vec![Node::default()] }
    }
}

impl PrefixTree {
    pub const ROOT: NodeId = 0;

    pub fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tree = Self::default();
        for word in words {
            tree.insert(word);
        }
        tree
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = Self::ROOT;
        for c in word.chars() {
            node = match self.nodes[node].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(c, child);
                    child
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// The node reached from `node` by `c`, if any word continues that way.
    #[must_use]
    pub fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node].children.get(&c).copied()
    }

    /// Walk `prefix` from the root.
    #[must_use]
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix.chars().try_fold(Self::ROOT, |node, c| self.child(node, c))
    }

    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| self.nodes[node].terminal)
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
