//! Solver for the word game Ghost
//!
//! Two players alternate appending letters to a growing prefix; whoever
//! completes a dictionary word loses. This crate provides:
//! - A trie-based game-state representation over a fixed dictionary
//! - Backward-induction outcome propagation for the two alternating players
//! - Prefix lookup and forced-win path extraction
//! - Dictionary file loading and JSON persistence of solved tries
//! - A CLI for solving, analyzing, and exporting dictionaries

pub mod analysis;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod solver;
pub mod trie;
pub mod types;

pub use error::{Error, Result};
pub use solver::forced_winner;
pub use trie::{NodeId, PrefixNode, Trie};
pub use types::{Letter, Outcome, Player, Word};
