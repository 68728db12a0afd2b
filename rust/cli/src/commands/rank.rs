//! `rank`: best category of seven cards.

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::ui;
use crate::validation::parse_cards;
use holdem_engine::cards::{Card, Rank};
use holdem_engine::hand::{evaluate_hand, evaluate_ranked};
use std::io::Write;

pub fn handle_rank_command(
    cards: &[String],
    kickers: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let parsed = match parse_cards(cards) {
        Ok(c) => c,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };
    let seven: [Card; 7] = parsed.as_slice().try_into().map_err(|_| {
        CliError::InvalidInput(format!("expected 7 cards, got {}", parsed.len()))
    })?;

    let strength = evaluate_hand(&seven);
    writeln!(out, "Cards: {}", format_cards(&seven))?;
    writeln!(out, "Hand: {}", strength.category.label())?;

    if kickers {
        let slots: Vec<Option<Card>> = seven.iter().copied().map(Some).collect();
        if let Some(ranked) = evaluate_ranked(&slots) {
            let ranks: Vec<String> = ranked
                .kickers
                .iter()
                .filter_map(|&v| Rank::from_u8(v))
                .map(|r| r.symbol().to_string())
                .collect();
            writeln!(out, "Kickers: {}", ranks.join(" "))?;
        }
    }
    Ok(())
}
