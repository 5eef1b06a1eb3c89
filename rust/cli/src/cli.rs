//! Command-line definitions (clap derive).

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "simple-poker",
    version,
    about = "Four-card showdown against the computer"
)]
pub struct SimplePokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds against the computer
    Play {
        /// Play this many rounds without waiting for input
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        /// Seed for reproducible deals
        #[arg(long)]
        seed: Option<u64>,
        /// Milliseconds between two player card reveals
        #[arg(
            long = "reveal-ms",
            value_parser = clap::value_parser!(u64).range(0..=crate::config::MAX_REVEAL_DELAY_MS)
        )]
        reveal_ms: Option<u64>,
    },
    /// Deal and resolve a single round
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Print the round as a JSON record
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a four-card hand, e.g. `eval Ah Ad 7s 8c`
    Eval {
        #[arg(num_args = 4, required = true)]
        cards: Vec<String>,
    },
    /// Show the effective configuration
    Cfg,
}
