//! Solve command - forced outcome and winning continuation for a prefix

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{Error, cli::output, dictionary, forced_winner, types::Player};

#[derive(Parser, Debug)]
#[command(about = "Solve a dictionary and report the forced outcome for a prefix")]
pub struct SolveArgs {
    /// Path to the dictionary file (one word per line, '#' comments allowed)
    #[arg(long, short = 'd')]
    pub dictionary: PathBuf,

    /// Prefix to query; defaults to the empty prefix (the opening position)
    #[arg(long, short = 'p', default_value = "")]
    pub prefix: String,

    /// Which player opened the game (made the very first move)
    #[arg(long, value_enum, default_value = "first")]
    pub opener: Opener,

    /// Save the solved dictionary as JSON for later queries
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Opener {
    /// The player we call "first" opened the game
    First,
    /// The player we call "second" opened the game
    Second,
}

impl Opener {
    fn player(&self) -> Player {
        match self {
            Opener::First => Player::First,
            Opener::Second => Player::Second,
        }
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let (trie, word_count) = super::build_with_progress(&args.dictionary)?;

    output::print_section("Ghost solver");
    output::print_kv("Dictionary", &args.dictionary.display().to_string());
    output::print_kv("Words", &output::format_number(word_count));

    let prefix_display = if args.prefix.is_empty() {
        "(empty)".to_string()
    } else {
        args.prefix.to_lowercase()
    };
    output::print_kv("Prefix", &prefix_display);

    let node = trie.find_prefix(&args.prefix)?;
    let outcome = trie.outcome_of(node)?;
    let plies_played = args.prefix.chars().count();
    let winner = forced_winner(outcome, plies_played, args.opener.player())?;

    output::print_kv("Mover outcome", &outcome.to_string());
    output::print_kv("Forced winner", &winner.to_string());

    if trie.node(node).is_terminal() {
        println!("\nThe prefix is already a complete word; the game is over.");
    } else {
        match trie.find_a_winner(node) {
            Ok(continuation) => {
                println!("\nWinning continuation: {continuation}");
                println!(
                    "Completed word:       {}{continuation}",
                    args.prefix.to_lowercase()
                );
            }
            Err(Error::NoForcedWin { .. }) => {
                println!("\nNo forced win for the player to move; every reply loses eventually.");
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = args.save {
        dictionary::save_json(&trie, &path)?;
        println!("\nSolved dictionary saved to: {}", path.display());
    }

    Ok(())
}
