//! # holdem CLI Library
//!
//! Command-line front end for the Hold'em table: play against AI opponents,
//! simulate AI-only hands, deal and rank hands, and inspect configuration.
//!
//! The entry point is [`run`], which parses arguments and dispatches to a
//! subcommand handler with injected output streams.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["holdem", "rank", "As", "Ks", "Qs", "Js", "Ts", "2c", "3d"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against AI opponents, reading actions from stdin
//! - `sim`: Play AI-only hands and optionally write JSONL hand history
//! - `deal`: Deal one hand for inspection
//! - `rank`: Evaluate seven cards
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod facilitated;
pub mod formatters;
pub mod io_utils;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    PlayOptions, handle_cfg_command, handle_deal_command, handle_play_command,
    handle_rank_command, handle_sim_command,
};

pub use error::CliError;

/// Parses `args` and runs the selected command.
///
/// Returns the process exit code: `0` on success, `2` on errors, `130` when input
/// ends while the player is being asked for an action.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play {
            hands,
            seed,
            ai_players,
            think_delay_ms,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            let opts = PlayOptions {
                hands,
                seed,
                ai_players,
                think_delay_ms,
            };
            handle_play_command(opts, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            hands,
            seed,
            players,
            output,
        } => handle_sim_command(hands, seed, players, output, out, err),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Rank { cards, kickers } => handle_rank_command(&cards, kickers, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = writeln!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut report = || -> std::io::Result<()> {
        writeln!(err, "{}", e)?;
        writeln!(err)?;
        writeln!(err, "holdem: Texas Hold'em table")?;
        writeln!(err, "Usage: holdem <command> [options]\n")?;
        writeln!(err, "Commands:")?;
        for c in Commands::NAMES {
            writeln!(err, "  {}", c)?;
        }
        writeln!(err, "\nFor full help, run: holdem --help")
    };
    let _ = report();
    exit_code::ERROR
}
