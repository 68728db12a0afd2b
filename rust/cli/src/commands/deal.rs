//! `deal`: one dealt hand with every seat's cards and best category.

use crate::error::CliError;
use crate::formatters::{format_board, format_cards};
use holdem_engine::deck::Deck;
use holdem_engine::game::GameState;
use holdem_engine::hand::evaluate;
use holdem_engine::player::STARTING_BALANCE;
use std::io::Write;

pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let seats = players.unwrap_or(2) as usize;

    let mut table = GameState::all_ai(seats, STARTING_BALANCE)?;
    table.new_hand(&mut Deck::new_with_seed(seed))?;
    let board = table.community_cards();

    writeln!(out, "Seed: {}", seed)?;
    for p in table.players() {
        let hole = p.hole_cards();
        let cards: Vec<_> = hole.iter().chain(board.iter()).copied().collect();
        writeln!(
            out,
            "Hole P{}: {} ({})",
            p.id() + 1,
            format_board(&hole),
            evaluate(&cards).category.label()
        )?;
    }
    let board: Vec<_> = board.iter().flatten().copied().collect();
    writeln!(out, "Board: {}", format_cards(&board))?;
    Ok(())
}
