//! Ghost CLI - solve, analyze, and export Ghost dictionaries
//!
//! This CLI provides a unified interface for:
//! - Solving a dictionary and reporting forced outcomes for any prefix
//! - Analyzing the structure of the resulting prefix tree
//! - Exporting per-prefix outcomes for further analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ghost")]
#[command(version, about = "Solver for the word game Ghost", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a dictionary and report the forced outcome for a prefix
    Solve(ghost::cli::commands::solve::SolveArgs),

    /// Analyze the prefix tree built from a dictionary
    Analyze(ghost::cli::commands::analyze::AnalyzeArgs),

    /// Export every reachable prefix and its outcome as CSV
    Export(ghost::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => ghost::cli::commands::solve::execute(args),
        Commands::Analyze(args) => ghost::cli::commands::analyze::execute(args),
        Commands::Export(args) => ghost::cli::commands::export::execute(args),
    }
}
