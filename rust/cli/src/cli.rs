//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::config::MAX_AI_PLAYERS;

#[derive(Debug, Parser)]
#[command(
    name = "holdem",
    version,
    about = "Texas Hold'em table: play against AI opponents, simulate hands, rank cards"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play hands at one table against AI opponents
    Play {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_AI_PLAYERS as u64))]
        ai_players: Option<u64>,
        /// Pause before each AI decision, in milliseconds
        #[arg(long)]
        think_delay_ms: Option<u64>,
    },
    /// Play AI-only hands without delays and optionally record them as JSONL
    Sim {
        #[arg(long)]
        hands: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u64).range(2..=(MAX_AI_PLAYERS as u64 + 1)))]
        players: Option<u64>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal one hand and show every player's cards
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u64).range(2..=(MAX_AI_PLAYERS as u64 + 1)))]
        players: Option<u64>,
    },
    /// Evaluate seven cards, e.g. `rank As Ks Qs Js Ts 2c 3d`
    Rank {
        #[arg(num_args = 7, required = true)]
        cards: Vec<String>,
        /// Show kicker ranks as well as the category
        #[arg(long)]
        kickers: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub const NAMES: [&'static str; 5] = ["play", "sim", "deal", "rank", "cfg"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_command_parses() {
        let commands = vec![
            vec!["holdem", "play"],
            vec!["holdem", "sim", "--hands", "1"],
            vec!["holdem", "deal"],
            vec!["holdem", "rank", "As", "Ks", "Qs", "Js", "Ts", "2c", "3d"],
            vec!["holdem", "cfg"],
        ];
        assert_eq!(commands.len(), Commands::NAMES.len());
        for args in commands {
            let result = HoldemCli::try_parse_from(&args);
            assert!(result.is_ok(), "Failed to parse: {:?}", args);
        }
    }

    #[test]
    fn ai_player_count_is_bounded() {
        assert!(HoldemCli::try_parse_from(["holdem", "play", "--ai-players", "0"]).is_err());
        assert!(HoldemCli::try_parse_from(["holdem", "play", "--ai-players", "23"]).is_err());
        assert!(HoldemCli::try_parse_from(["holdem", "play", "--ai-players", "22"]).is_ok());
    }

    #[test]
    fn rank_needs_exactly_seven_cards() {
        assert!(HoldemCli::try_parse_from(["holdem", "rank", "As", "Ks"]).is_err());
        let cli = HoldemCli::try_parse_from([
            "holdem", "rank", "As", "Ks", "Qs", "Js", "Ts", "2c", "3d", "--kickers",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Rank { cards, kickers } => {
                assert_eq!(cards.len(), 7);
                assert!(kickers);
            }
            other => panic!("expected rank, got {:?}", other),
        }
    }
}
