//! Shared helpers for the ghost integration test suite.

use ghost::Trie;
use rand::{Rng, rngs::StdRng};

/// Build a trie from a word list and propagate outcomes.
pub fn solved(words: &[&str]) -> Trie {
    let mut trie = Trie::new();
    for word in words {
        trie.add_word(word).expect("test words are well-formed");
    }
    trie.propagate().expect("first propagation succeeds");
    trie
}

/// Generate a random dictionary over a small alphabet.
///
/// A small alphabet keeps prefixes colliding, which is what exercises the
/// trimming and propagation logic; fully random words over 26 letters
/// barely share nodes.
pub fn random_words(rng: &mut StdRng, count: usize, max_len: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(1..=max_len);
            (0..len)
                .map(|_| (b'a' + rng.random_range(0..4u8)) as char)
                .collect()
        })
        .collect()
}

/// Every reachable node of a trie, discovered breadth-first.
pub fn reachable_nodes(trie: &Trie) -> Vec<ghost::NodeId> {
    let mut nodes = vec![trie.root()];
    let mut index = 0;
    while index < nodes.len() {
        let id = nodes[index];
        index += 1;
        for (_, child) in trie.node(id).children() {
            nodes.push(child);
        }
    }
    nodes
}
