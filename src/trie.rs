//! Prefix-tree representation of a Ghost dictionary.
//!
//! The tree is an arena of nodes addressed by index, built once from a word
//! list and then frozen: construction must finish before outcome
//! propagation, and propagation seals the structure against further
//! insertion.

pub mod node;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    types::{Letter, Word},
};
pub use node::{NodeId, PrefixNode};

/// A Ghost dictionary as a prefix tree.
///
/// Words are inserted with [`add_word`](Trie::add_word), outcomes computed
/// once with [`propagate`](crate::trie::Trie::propagate), and queries issued
/// through [`find_prefix`](Trie::find_prefix) and the solver methods. The
/// trie is an explicit value; independent dictionaries can coexist freely.
///
/// # Examples
///
/// ```
/// use ghost::Trie;
///
/// let mut trie = Trie::new();
/// trie.add_word("cat").unwrap();
/// trie.add_word("cats").unwrap();
///
/// let node = trie.find_prefix("cat").unwrap();
/// assert!(trie.node(node).is_terminal());
/// // "cats" was trimmed away: play cannot continue past a complete word.
/// assert!(trie.find_prefix("cats").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trie {
    nodes: Vec<PrefixNode>,
    propagated: bool,
}

impl Trie {
    /// Create an empty dictionary: a lone root representing the empty prefix.
    pub fn new() -> Self {
        Trie {
            nodes: vec![PrefixNode::new()],
            propagated: false,
        }
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Borrow a node by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this trie.
    pub fn node(&self, id: NodeId) -> &PrefixNode {
        &self.nodes[id.index()]
    }

    /// Whether [`propagate`](crate::trie::Trie::propagate) has already run.
    pub fn is_propagated(&self) -> bool {
        self.propagated
    }

    /// Insert a word into the dictionary.
    ///
    /// Walks from the root creating missing children, marks the final node
    /// terminal, and discards that node's children: once a prefix is a
    /// complete word the game cannot continue past it, so any longer word
    /// sharing the prefix is unreachable in play and is dropped. For the
    /// same reason the walk stops early at an existing terminal node, making
    /// the insertion of such longer words a no-op. Re-inserting a word is
    /// idempotent.
    ///
    /// The word is validated in full before the tree is touched; a rejected
    /// word mutates nothing.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyWord`] or [`Error::InvalidLetter`] for malformed input,
    /// [`Error::AlreadyPropagated`] once outcomes have been computed.
    pub fn add_word(&mut self, word: &str) -> Result<()> {
        if self.propagated {
            return Err(Error::AlreadyPropagated);
        }
        let word = Word::parse(word)?;

        let mut curr = NodeId::ROOT;
        for letter in word.letters() {
            if self.nodes[curr.index()].terminal {
                break;
            }
            curr = match self.nodes[curr.index()].child(letter) {
                Some(next) => next,
                None => {
                    let next = self.push_node();
                    self.nodes[curr.index()].children.insert(letter, next);
                    next
                }
            };
        }

        // The loop always descends at least once (the root is never
        // terminal), so `curr` is not the root here.
        let end = &mut self.nodes[curr.index()];
        end.terminal = true;
        end.children.clear();
        Ok(())
    }

    /// Resolve a textual prefix to its node.
    ///
    /// The empty prefix resolves to the root. The returned handle is usable
    /// as a fresh root for sub-game queries.
    ///
    /// # Errors
    ///
    /// [`Error::PrefixNotFound`] if any character along the path has no
    /// matching child, including characters outside the alphabet and walks
    /// that would continue past a complete word.
    pub fn find_prefix(&self, prefix: &str) -> Result<NodeId> {
        let mut curr = NodeId::ROOT;
        for c in prefix.chars() {
            let next = Letter::from_char(c).and_then(|letter| self.node(curr).child(letter));
            match next {
                Some(child) => curr = child,
                None => {
                    return Err(Error::PrefixNotFound {
                        prefix: prefix.to_string(),
                    });
                }
            }
        }
        Ok(curr)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut PrefixNode {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn seal(&mut self) {
        self.propagated = true;
    }

    fn push_node(&mut self) -> NodeId {
        self.nodes.push(PrefixNode::new());
        NodeId::new(self.nodes.len() - 1)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserted_words_are_terminal() {
        let mut trie = Trie::new();
        for word in ["do", "dog", "cat"] {
            trie.add_word(word).unwrap();
        }
        let node = trie.find_prefix("do").unwrap();
        assert!(trie.node(node).is_terminal());
        let node = trie.find_prefix("cat").unwrap();
        assert!(trie.node(node).is_terminal());
    }

    #[test]
    fn terminal_trimming_drops_longer_words() {
        let mut trie = Trie::new();
        trie.add_word("cat").unwrap();
        trie.add_word("cats").unwrap();

        let cat = trie.find_prefix("cat").unwrap();
        assert!(trie.node(cat).is_terminal());
        assert_eq!(trie.node(cat).child_count(), 0);
        assert!(matches!(
            trie.find_prefix("cats"),
            Err(Error::PrefixNotFound { .. })
        ));
    }

    #[test]
    fn shorter_word_shadows_existing_longer_word() {
        let mut trie = Trie::new();
        trie.add_word("dog").unwrap();
        trie.add_word("do").unwrap();

        let node = trie.find_prefix("do").unwrap();
        assert!(trie.node(node).is_terminal());
        assert_eq!(trie.node(node).child_count(), 0);
        assert!(trie.find_prefix("dog").is_err());
    }

    #[test]
    fn reinsertion_is_idempotent() {
        let mut trie = Trie::new();
        trie.add_word("cat").unwrap();
        let before = trie.nodes.len();
        trie.add_word("cat").unwrap();
        assert_eq!(trie.nodes.len(), before);
    }

    #[test]
    fn malformed_word_mutates_nothing() {
        let mut trie = Trie::new();
        assert!(trie.add_word("ca t").is_err());
        assert_eq!(trie.node(NodeId::ROOT).child_count(), 0);
        assert!(trie.add_word("").is_err());
        assert_eq!(trie.node(NodeId::ROOT).child_count(), 0);
    }

    #[test]
    fn lookup_folds_case() {
        let mut trie = Trie::new();
        trie.add_word("CAT").unwrap();
        assert!(trie.find_prefix("cAt").is_ok());
    }

    #[test]
    fn empty_prefix_resolves_to_root() {
        let trie = Trie::new();
        assert_eq!(trie.find_prefix("").unwrap(), trie.root());
        assert!(!trie.node(trie.root()).is_terminal());
    }
}
