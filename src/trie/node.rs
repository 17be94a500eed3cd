//! Arena node for the prefix tree.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::types::{Letter, Outcome};

/// Handle to a node in a [`Trie`](crate::trie::Trie) arena.
///
/// Handles are plain indices; they are only valid for the trie that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Handle of the root node (the empty prefix).
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of the node within its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}", self.0)
    }
}

/// A node in the prefix tree.
///
/// Each node represents one prefix of the dictionary. Child edges are kept
/// in an ordered map so that traversal order is always lexicographic, which
/// the deterministic tie-break during path extraction relies on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixNode {
    pub(crate) children: BTreeMap<Letter, NodeId>,
    pub(crate) terminal: bool,
    pub(crate) outcome: Outcome,
    pub(crate) horizon: u32,
}

impl PrefixNode {
    pub(crate) fn new() -> Self {
        PrefixNode {
            children: BTreeMap::new(),
            terminal: false,
            outcome: Outcome::Undetermined,
            horizon: 0,
        }
    }

    /// Look up the child reached by appending `letter`.
    ///
    /// `None` means no word in the dictionary continues with that letter
    /// from this prefix.
    pub fn child(&self, letter: Letter) -> Option<NodeId> {
        self.children.get(&letter).copied()
    }

    /// Child edges in lexicographic letter order.
    pub fn children(&self) -> impl Iterator<Item = (Letter, NodeId)> + '_ {
        self.children.iter().map(|(letter, id)| (*letter, *id))
    }

    /// Number of child edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True iff the prefix ending at this node is a complete dictionary word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Forced result for the player about to move from this node.
    ///
    /// Only meaningful once [`Trie::propagate`](crate::trie::Trie::propagate)
    /// has run; `Undetermined` before that.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Plies from this node until some word completes under shortest-line
    /// play. Written by propagation; zero where there is no move to make.
    pub fn horizon(&self) -> u32 {
        self.horizon
    }
}
