//! CLI commands for the ghost solver

pub mod analyze;
pub mod export;
pub mod solve;

use std::path::Path;

use anyhow::Result;

use crate::{cli::output, dictionary, trie::Trie};

/// Load a dictionary file and build the solved trie, with progress
/// reporting shared by all commands.
fn build_with_progress(path: &Path) -> Result<(Trie, usize)> {
    let words = dictionary::load_file(path)?;

    let pb = output::create_insert_progress(words.len() as u64);
    let mut trie = Trie::new();
    for word in &words {
        trie.add_word(word)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let spinner = output::create_spinner("Propagating outcomes...");
    trie.propagate()?;
    spinner.finish_and_clear();

    Ok((trie, words.len()))
}
