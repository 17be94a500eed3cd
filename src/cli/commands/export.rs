//! Export command - per-prefix outcomes as CSV

use std::{collections::VecDeque, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{cli::output, trie::Trie};

#[derive(Parser, Debug)]
#[command(about = "Export every reachable prefix and its outcome as CSV")]
pub struct ExportArgs {
    /// Path to the dictionary file (one word per line, '#' comments allowed)
    #[arg(long, short = 'd')]
    pub dictionary: PathBuf,

    /// Output CSV file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Only export prefixes up to this depth
    #[arg(long)]
    pub max_depth: Option<usize>,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let (trie, _) = super::build_with_progress(&args.dictionary)?;

    let rows = export_outcomes(&trie, &args.output, args.max_depth)?;
    println!(
        "Exported {} prefixes to: {}",
        output::format_number(rows),
        args.output.display()
    );

    Ok(())
}

/// Walk reachable prefixes breadth-first and write one CSV row per node.
fn export_outcomes(trie: &Trie, path: &PathBuf, max_depth: Option<usize>) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["prefix", "depth", "terminal", "mover_outcome", "winning_continuation"])?;

    let mut rows = 0;
    let mut queue = VecDeque::new();
    queue.push_back((trie.root(), String::new()));
    while let Some((id, prefix)) = queue.pop_front() {
        let depth = prefix.len();
        if max_depth.is_some_and(|limit| depth > limit) {
            continue;
        }

        let node = trie.node(id);
        let continuation = match trie.find_a_winner(id) {
            Ok(word) => word.to_string(),
            Err(_) => String::new(),
        };
        writer.write_record([
            prefix.clone(),
            depth.to_string(),
            node.is_terminal().to_string(),
            node.outcome().to_string(),
            continuation,
        ])?;
        rows += 1;

        for (letter, child) in node.children() {
            queue.push_back((child, format!("{prefix}{letter}")));
        }
    }

    writer.flush()?;
    Ok(rows)
}
