//! Command-line surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "highcard",
    version,
    about = "High-card duel against the computer"
)]
pub struct HighcardCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive game in the terminal
    Play {
        /// RNG seed for card values and opponent choices
        #[arg(long)]
        seed: Option<u64>,
        /// Cards dealt to each side
        #[arg(long = "hand-size", value_parser = clap::value_parser!(u16).range(1..=26))]
        hand_size: Option<u16>,
        /// Delay multiplier; 0 plays instantly
        #[arg(long)]
        pace: Option<f64>,
        /// Write resolved rounds to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
        /// Stop after this many resolved rounds
        #[arg(long)]
        rounds: Option<u32>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
