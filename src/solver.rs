//! Outcome propagation and forced-win search.
//!
//! The game rule being solved: players alternate appending one letter, and
//! whoever completes a dictionary word loses. Outcomes are stored
//! mover-relative, as the forced result for the player about to move from a
//! node, and computed by backward induction in a single post-order pass.

use crate::{
    Error, Result,
    trie::{NodeId, Trie},
    types::{Letter, Outcome, Player, Word},
};

impl Trie {
    /// Label every node with the forced outcome for its mover.
    ///
    /// Must be invoked exactly once, after all insertions. Children are
    /// finalized strictly before their parents via an explicit post-order
    /// worklist, so arbitrarily long words cannot overflow the call stack.
    ///
    /// Labeling rules:
    /// - a terminal node is a `Win` for its mover: the opponent has just
    ///   completed the word;
    /// - a node with children is a `Win` iff some child is labeled `Lose`
    ///   (move-values are the flip of the child's outcome, and a terminal
    ///   child is therefore always a losing move);
    /// - a non-terminal node with no children is a `Lose`: a player with
    ///   no legal move forfeits. Only the root of an empty dictionary hits
    ///   this case.
    ///
    /// The pass also records each node's `horizon`, the number of plies
    /// until some word completes under shortest-line play, which the path
    /// extractor uses for its tie-break.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyPropagated`] on a second invocation.
    pub fn propagate(&mut self) -> Result<()> {
        if self.is_propagated() {
            return Err(Error::AlreadyPropagated);
        }

        let mut stack = vec![(NodeId::ROOT, false)];
        while let Some((id, children_done)) = stack.pop() {
            if children_done {
                self.finalize(id);
            } else {
                stack.push((id, true));
                for (_, child) in self.node(id).children() {
                    stack.push((child, false));
                }
            }
        }

        self.seal();
        Ok(())
    }

    /// Compute one node's outcome and horizon from its finalized children.
    fn finalize(&mut self, id: NodeId) {
        if self.node(id).is_terminal() {
            let node = self.node_mut(id);
            node.outcome = Outcome::Win;
            node.horizon = 0;
            return;
        }

        let mut nearest_win: Option<u32> = None;
        let mut nearest_any: Option<u32> = None;
        for (_, child) in self.node(id).children() {
            let child = self.node(child);
            nearest_any = Some(nearest_any.map_or(child.horizon(), |h| h.min(child.horizon())));
            if child.outcome().flip() == Outcome::Win {
                nearest_win =
                    Some(nearest_win.map_or(child.horizon(), |h| h.min(child.horizon())));
            }
        }

        let (outcome, horizon) = match (nearest_win, nearest_any) {
            (Some(h), _) => (Outcome::Win, h + 1),
            (None, Some(h)) => (Outcome::Lose, h + 1),
            (None, None) => (Outcome::Lose, 0),
        };
        let node = self.node_mut(id);
        node.outcome = outcome;
        node.horizon = horizon;
    }

    /// Forced outcome for the player about to move from `node`.
    ///
    /// # Errors
    ///
    /// [`Error::NotPropagated`] if queried before [`propagate`](Trie::propagate).
    pub fn outcome_of(&self, node: NodeId) -> Result<Outcome> {
        if !self.is_propagated() {
            return Err(Error::NotPropagated);
        }
        Ok(self.node(node).outcome())
    }

    /// Extract one concrete word realizing the mover's forced win at `node`.
    ///
    /// Follows the forced line: at the mover's turn, the winning move with
    /// the shortest continuation (lexicographically smallest letter on
    /// ties); at the opponent's turn, the reply chosen by the same rule.
    /// Any opponent reply preserves the win, so the rule exists purely to
    /// make the output reproducible and the realized word shortest. The
    /// walk ends when the opponent is made to step onto a terminal node,
    /// completing the word.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghost::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add_word("cat").unwrap();
    /// trie.add_word("do").unwrap();
    /// trie.propagate().unwrap();
    ///
    /// let word = trie.find_a_winner(trie.root()).unwrap();
    /// assert_eq!(word.to_string(), "do");
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::NotPropagated`] before propagation; [`Error::NoForcedWin`]
    /// if the mover at `node` is not forced to win, or if there is no legal
    /// move there at all (a terminal node: the game is already over).
    pub fn find_a_winner(&self, node: NodeId) -> Result<Word> {
        if !self.is_propagated() {
            return Err(Error::NotPropagated);
        }
        let start = self.node(node);
        if start.outcome() != Outcome::Win || start.is_terminal() {
            return Err(Error::NoForcedWin {
                outcome: start.outcome(),
            });
        }

        let mut letters = Vec::new();
        let mut curr = node;
        loop {
            let winning_only = self.node(curr).outcome() == Outcome::Win;
            let (letter, child) = self
                .shortest_move(curr, winning_only)
                .expect("a node on a forced line always has a move");
            letters.push(letter);
            if self.node(child).is_terminal() {
                return Ok(Word::from_letters(letters));
            }
            curr = child;
        }
    }

    /// The move with the shortest continuation, lexicographically smallest
    /// letter on ties. With `winning_only`, only moves into `Lose` children
    /// (winning moves for the mover) are considered.
    fn shortest_move(&self, id: NodeId, winning_only: bool) -> Option<(Letter, NodeId)> {
        let mut best: Option<(Letter, NodeId, u32)> = None;
        for (letter, child) in self.node(id).children() {
            let node = self.node(child);
            if winning_only && node.outcome() != Outcome::Lose {
                continue;
            }
            match best {
                Some((_, _, horizon)) if horizon <= node.horizon() => {}
                _ => best = Some((letter, child, node.horizon())),
            }
        }
        best.map(|(letter, child, _)| (letter, child))
    }
}

/// Map a mover-relative outcome at a prefix to the player who owns the
/// forced win, given who moved first and how many letters have been played.
///
/// # Examples
///
/// ```
/// use ghost::{forced_winner, types::{Outcome, Player}};
///
/// // Mover-relative Win at the empty prefix: the first player wins.
/// let winner = forced_winner(Outcome::Win, 0, Player::First).unwrap();
/// assert_eq!(winner, Player::First);
///
/// // After one letter it is the second player's turn, so a Lose for the
/// // mover there hands the win back to the first player.
/// let winner = forced_winner(Outcome::Lose, 1, Player::First).unwrap();
/// assert_eq!(winner, Player::First);
/// ```
///
/// # Errors
///
/// [`Error::NotPropagated`] for an `Undetermined` outcome.
pub fn forced_winner(outcome: Outcome, plies_played: usize, first_player: Player) -> Result<Player> {
    let mover = if plies_played % 2 == 0 {
        first_player
    } else {
        first_player.opponent()
    };
    match outcome {
        Outcome::Win => Ok(mover),
        Outcome::Lose => Ok(mover.opponent()),
        Outcome::Undetermined => Err(Error::NotPropagated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.add_word(word).unwrap();
        }
        trie.propagate().unwrap();
        trie
    }

    #[test]
    fn even_length_word_is_a_first_mover_win() {
        let trie = solved(&["abcd"]);
        assert_eq!(trie.outcome_of(trie.root()).unwrap(), Outcome::Win);
    }

    #[test]
    fn odd_length_word_is_a_first_mover_loss() {
        let trie = solved(&["abc"]);
        assert_eq!(trie.outcome_of(trie.root()).unwrap(), Outcome::Lose);
    }

    #[test]
    fn terminal_node_is_a_win_for_its_mover() {
        let trie = solved(&["do"]);
        let node = trie.find_prefix("do").unwrap();
        assert_eq!(trie.outcome_of(node).unwrap(), Outcome::Win);
    }

    #[test]
    fn empty_dictionary_mover_forfeits() {
        let mut trie = Trie::new();
        trie.propagate().unwrap();
        assert_eq!(trie.outcome_of(trie.root()).unwrap(), Outcome::Lose);
        assert!(matches!(
            trie.find_a_winner(trie.root()),
            Err(Error::NoForcedWin { .. })
        ));
    }

    #[test]
    fn queries_before_propagation_are_rejected() {
        let mut trie = Trie::new();
        trie.add_word("cat").unwrap();
        assert!(matches!(
            trie.outcome_of(trie.root()),
            Err(Error::NotPropagated)
        ));
        assert!(matches!(
            trie.find_a_winner(trie.root()),
            Err(Error::NotPropagated)
        ));
    }

    #[test]
    fn propagation_seals_the_dictionary() {
        let mut trie = Trie::new();
        trie.add_word("cat").unwrap();
        trie.propagate().unwrap();
        assert!(matches!(
            trie.add_word("dog"),
            Err(Error::AlreadyPropagated)
        ));
        assert!(matches!(trie.propagate(), Err(Error::AlreadyPropagated)));
    }

    #[test]
    fn extraction_requires_a_winning_mover() {
        let trie = solved(&["abc"]);
        let root = trie.root();
        assert!(matches!(
            trie.find_a_winner(root),
            Err(Error::NoForcedWin {
                outcome: Outcome::Lose
            })
        ));

        // Terminal node: a Win label, but the game is already over.
        let trie = solved(&["do"]);
        let node = trie.find_prefix("do").unwrap();
        assert!(matches!(
            trie.find_a_winner(node),
            Err(Error::NoForcedWin {
                outcome: Outcome::Win
            })
        ));
    }

    #[test]
    fn tie_break_prefers_lexicographically_smallest() {
        // Both 'a' and 'c' open equally short forced wins.
        let trie = solved(&["ab", "cb", "cdef"]);
        let word = trie.find_a_winner(trie.root()).unwrap();
        assert_eq!(word.to_string(), "ab");
    }

    #[test]
    fn tie_break_prefers_shortest_forced_win() {
        // 'a' opens a four-letter forced win, 'w' a two-letter one.
        let trie = solved(&["abcd", "wb"]);
        let word = trie.find_a_winner(trie.root()).unwrap();
        assert_eq!(word.to_string(), "wb");
    }

    #[test]
    fn forced_winner_tracks_parity() {
        assert_eq!(
            forced_winner(Outcome::Win, 2, Player::First).unwrap(),
            Player::First
        );
        assert_eq!(
            forced_winner(Outcome::Win, 1, Player::First).unwrap(),
            Player::Second
        );
        assert_eq!(
            forced_winner(Outcome::Lose, 0, Player::Second).unwrap(),
            Player::First
        );
        assert!(forced_winner(Outcome::Undetermined, 0, Player::First).is_err());
    }
}
