//! clap definitions for the `holdem` binary.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "holdem",
    about = "Multi-player Texas Hold'em hand simulator",
    version
)]
pub struct HoldemCli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play hands with one human seat against AI opponents
    Play {
        /// Number of seats at the table, the human included
        #[arg(long, default_value_t = 3)]
        seats: usize,
        /// Number of hands to play
        #[arg(long, default_value_t = 1)]
        hands: u32,
        /// RNG seed for reproducible decks (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Starting chip stack per seat
        #[arg(long, default_value_t = 1000)]
        chips: u32,
    },
    /// Pit strategy families against each other and tally wins
    Sim {
        /// Which families face off (two seats per side)
        #[arg(long, value_enum, default_value = "random-vs-minimax")]
        matchup: Matchup,
        /// Number of single-hand games to play
        #[arg(long, default_value_t = 100)]
        hands: u32,
        /// Base RNG seed (hand i uses seed + i; random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal one complete board and show every seat's evaluated hand
    Deal {
        /// RNG seed for a reproducible deal (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seats to deal to
        #[arg(long, default_value_t = 3)]
        seats: usize,
        /// Emit the deal as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum Matchup {
    RandomVsMinimax,
    RandomVsAlphabeta,
    MinimaxVsAlphabeta,
}

impl Matchup {
    /// The two strategy-family names, in seat order A, A, B, B.
    pub fn families(self) -> (&'static str, &'static str) {
        match self {
            Matchup::RandomVsMinimax => ("random", "minimax"),
            Matchup::RandomVsAlphabeta => ("random", "alphabeta"),
            Matchup::MinimaxVsAlphabeta => ("minimax", "alphabeta"),
        }
    }
}
