//! Structural and outcome statistics over a trie.

use std::collections::VecDeque;

use serde::Serialize;

use crate::{
    trie::Trie,
    types::Outcome,
};

/// Node counts at one depth of the trie.
#[derive(Debug, Clone, Serialize)]
pub struct DepthStats {
    pub depth: usize,
    pub nodes: usize,
    pub terminal: usize,
    pub wins: usize,
    pub losses: usize,
}

/// Summary statistics for a trie, computed over reachable nodes only.
///
/// Trimmed subtrees survive as unreachable arena slots and are not counted.
/// Win/lose tallies are zero for a trie that has not been propagated yet.
#[derive(Debug, Clone, Serialize)]
pub struct TrieStats {
    pub reachable_nodes: usize,
    pub terminal_words: usize,
    pub max_depth: usize,
    pub by_depth: Vec<DepthStats>,
}

impl TrieStats {
    /// Walk the trie breadth-first and tally nodes per depth.
    pub fn collect(trie: &Trie) -> Self {
        let mut by_depth: Vec<DepthStats> = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back((trie.root(), 0usize));

        while let Some((id, depth)) = queue.pop_front() {
            if by_depth.len() <= depth {
                by_depth.push(DepthStats {
                    depth,
                    nodes: 0,
                    terminal: 0,
                    wins: 0,
                    losses: 0,
                });
            }
            let node = trie.node(id);
            let stats = &mut by_depth[depth];
            stats.nodes += 1;
            if node.is_terminal() {
                stats.terminal += 1;
            }
            match node.outcome() {
                Outcome::Win => stats.wins += 1,
                Outcome::Lose => stats.losses += 1,
                Outcome::Undetermined => {}
            }

            for (_, child) in node.children() {
                queue.push_back((child, depth + 1));
            }
        }

        TrieStats {
            reachable_nodes: by_depth.iter().map(|d| d.nodes).sum(),
            terminal_words: by_depth.iter().map(|d| d.terminal).sum(),
            max_depth: by_depth.len().saturating_sub(1),
            by_depth,
        }
    }
}
