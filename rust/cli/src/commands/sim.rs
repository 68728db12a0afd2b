//! `sim`: AI-only hands at one table, played without thinking delays.

use crate::config::{self, Config};
use crate::error::CliError;
use crate::session::TableSession;
use crate::ui;
use holdem_ai::create_ai;
use holdem_engine::game::GameState;
use holdem_engine::logger::HandLogger;
use std::io::Write;
use std::time::Duration;

pub fn handle_sim_command(
    hands: u64,
    seed: Option<u64>,
    players: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    execute_sim_command(&cfg, hands, seed, players, output, out, err)
}

fn execute_sim_command(
    cfg: &Config,
    hands: u64,
    seed: Option<u64>,
    players: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let seats = players.map_or(cfg.ai_players + 1, |n| n as usize);

    let mut logger = match output.as_deref() {
        Some(path) => match HandLogger::create(path) {
            Ok(l) => Some(l),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open output file: {}", e))?;
                return Err(CliError::Io(e));
            }
        },
        None => None,
    };

    let policy = create_ai(&cfg.ai_strategy).map_err(|e| CliError::Config(e.to_string()))?;
    let table = GameState::all_ai(seats, cfg.starting_balance)?.with_tie_break(cfg.tie_break);
    let mut session = TableSession::new(table, policy, seed, Duration::ZERO);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut wins = vec![0u64; seats];
    for _ in 0..hands {
        session.start_hand()?;
        runtime.block_on(session.play_out())?;
        let Some(winner) = session.state().winner() else {
            return Err(CliError::Engine("hand ended without a winner".to_string()));
        };
        wins[winner] += 1;

        if let Some(logger) = logger.as_mut() {
            let hand_id = logger.next_id();
            logger.write(&session.state().hand_record(hand_id, Some(seed)))?;
        }
    }

    writeln!(out, "Simulated: {} hands (seed {})", hands, seed)?;
    for p in session.state().players() {
        writeln!(
            out,
            "{}: balance {} wins {}",
            p.name(),
            p.balance(),
            wins[p.id()]
        )?;
    }
    tracing::info!(hands, seed, "simulation finished");
    Ok(())
}
