//! `play`: one human seat against AI opponents, driven from a line-based input.

use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::{format_event, render_table};
use crate::io_utils::read_stdin_line;
use crate::session::{TableEvent, TableSession};
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use holdem_ai::create_ai;
use holdem_engine::game::GameState;
use holdem_engine::player::Command;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Command-line overrides for the configured table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    pub hands: Option<u32>,
    pub seed: Option<u64>,
    pub ai_players: Option<u64>,
    pub think_delay_ms: Option<u64>,
}

pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    execute_play_command(&cfg, opts, out, err, stdin)
}

fn execute_play_command(
    cfg: &Config,
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = opts.hands.unwrap_or(1);
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let ai_players = opts.ai_players.map_or(cfg.ai_players, |n| n as usize);
    let think_delay = Duration::from_millis(opts.think_delay_ms.unwrap_or(cfg.think_delay_ms));

    let policy = create_ai(&cfg.ai_strategy).map_err(|e| CliError::Config(e.to_string()))?;
    let table = GameState::with_ai_opponents(ai_players, cfg.starting_balance)?
        .with_tie_break(cfg.tie_break);
    let mut session = TableSession::new(table, policy, seed, think_delay);

    writeln!(
        out,
        "play: ai_players={} hands={} seed={} policy={}",
        ai_players,
        hands,
        seed,
        session.policy_name()
    )?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut played = 0u32;
    for i in 1..=hands {
        writeln!(out, "Hand {}", i)?;
        session.start_hand()?;
        writeln!(out, "{}", render_table(&session.snapshot()))?;

        if !play_hand(&runtime, &mut session, out, err, stdin)? {
            break;
        }
        writeln!(out, "{}", render_table(&session.snapshot()))?;
        played += 1;
    }

    writeln!(out, "Hands played: {}", played)?;
    Ok(())
}

/// Plays the current hand to its end. Returns `false` when the user quit.
fn play_hand(
    runtime: &tokio::runtime::Runtime,
    session: &mut TableSession,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    while !session.state().is_hand_over() {
        let human = match session.human_seat() {
            Some(id) if session.human_can_act() => id,
            _ => {
                let events = runtime.block_on(session.play_out())?;
                if events.is_empty() && !session.state().is_hand_over() {
                    return Err(CliError::Engine("table made no progress".to_string()));
                }
                print_events(session, &events, out)?;
                continue;
            }
        };

        let to_call = session
            .state()
            .player(human)
            .map_or(0, |p| session.state().current_bet().saturating_sub(p.current_round_bet()));
        write!(
            out,
            "Your action, {} to call (check/call/raise N/fold/q): ",
            to_call
        )?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Err(CliError::Interrupted("input closed mid-hand".to_string()));
        };
        let action = match parse_player_action(&line) {
            ParseResult::Action(action) => action,
            ParseResult::Quit => return Ok(false),
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        let command = Command {
            player_id: human,
            action,
        };
        match runtime.block_on(session.submit(command)) {
            Ok(events) => print_events(session, &events, out)?,
            Err(e) if e.is_invalid_action() => ui::write_error(err, &e.to_string())?,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(true)
}

fn print_events(
    session: &TableSession,
    events: &[TableEvent],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let snapshot = session.snapshot();
    for event in events {
        writeln!(out, "{}", format_event(&snapshot, event))?;
    }
    Ok(())
}
