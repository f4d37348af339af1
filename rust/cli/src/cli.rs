//! Command-line definitions.

use clap::{Args, Parser, Subcommand};
use holdem_ai::Difficulty;

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Texas Hold'em rules engine and bot simulator"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal one hand and show hole cards, blinds and the upcoming board
    Deal {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Score a hand: five cards, or hole cards plus a board
    Eval {
        /// Cards such as "As Ks" or "As,Ks,Qs,Js,10s"
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Community cards, e.g. "Qs Js 10s"
        #[arg(long)]
        board: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Play bot-only hands and optionally record them as JSONL
    Sim {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// JSONL hand history output
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Table settings shared by commands that deal hands.
#[derive(Args, Debug, Default, Clone)]
pub struct TableArgs {
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of bots at the table (2-8)
    #[arg(long)]
    pub bots: Option<u8>,
    #[arg(long)]
    pub chips: Option<u32>,
    #[arg(long)]
    pub small_blind: Option<u32>,
    #[arg(long)]
    pub big_blind: Option<u32>,
}

impl TableArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            num_bots: self.bots,
            starting_chips: self.chips,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            seed: self.seed,
            ..Overrides::default()
        }
    }
}
