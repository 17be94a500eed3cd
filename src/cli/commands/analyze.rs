//! Analyze command - structural statistics for a solved dictionary

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{analysis::TrieStats, cli::output};

#[derive(Parser, Debug)]
#[command(about = "Analyze the prefix tree built from a dictionary")]
pub struct AnalyzeArgs {
    /// Path to the dictionary file (one word per line, '#' comments allowed)
    #[arg(long, short = 'd')]
    pub dictionary: PathBuf,

    /// Export per-depth statistics to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let (trie, word_count) = super::build_with_progress(&args.dictionary)?;
    let stats = TrieStats::collect(&trie);

    output::print_section("Trie statistics");
    output::print_kv("Dictionary", &args.dictionary.display().to_string());
    output::print_kv("Words read", &output::format_number(word_count));
    output::print_kv(
        "Surviving words",
        &output::format_number(stats.terminal_words),
    );
    output::print_kv(
        "Reachable nodes",
        &output::format_number(stats.reachable_nodes),
    );
    output::print_kv("Max depth", &stats.max_depth.to_string());

    println!("\nNodes by depth:");
    for depth in &stats.by_depth {
        println!(
            "  Depth {}: {} nodes ({} terminal, {} win / {} lose for the mover)",
            depth.depth, depth.nodes, depth.terminal, depth.wins, depth.losses
        );
    }

    if let Some(path) = args.export {
        export_stats(&stats, &path)?;
        println!("\nStatistics exported to: {}", path.display());
    }

    Ok(())
}

/// Export per-depth statistics to a CSV file
fn export_stats(stats: &TrieStats, path: &PathBuf) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["depth", "nodes", "terminal", "wins", "losses"])?;
    for depth in &stats.by_depth {
        writer.write_record([
            depth.depth.to_string(),
            depth.nodes.to_string(),
            depth.terminal.to_string(),
            depth.wins.to_string(),
            depth.losses.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
