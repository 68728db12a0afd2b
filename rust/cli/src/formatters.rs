//! Card, board, action and table formatters for terminal display.
//!
//! Suits render as Unicode symbols (♥ ♦ ♣ ♠) where the terminal supports them and as
//! ASCII letters (h d c s) otherwise. On Windows, support is detected from modern
//! terminal environment variables; other platforms are assumed to support Unicode.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = [Some(ace_spades), None, None, None, None];
//! assert!(format_board(&board).starts_with("[A"));
//! assert!(format_board(&board).ends_with("?? ?? ?? ??]"));
//! ```

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::logger::Street;
use holdem_engine::player::PlayerAction;
use holdem_engine::snapshot::{PlayerSnapshot, TableSnapshot};

use crate::session::TableEvent;

/// Placeholder for a concealed or unassigned card.
pub const HIDDEN_CARD: &str = "??";

pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_rank(rank: &Rank) -> String {
    rank.symbol().to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

fn format_slot(slot: &Option<Card>) -> String {
    slot.as_ref()
        .map(format_card)
        .unwrap_or_else(|| HIDDEN_CARD.to_string())
}

/// Board slots in order, `??` for each concealed one.
pub fn format_board(slots: &[Option<Card>]) -> String {
    let cards: Vec<String> = slots.iter().map(format_slot).collect();
    format!("[{}]", cards.join(" "))
}

pub fn format_cards(cards: &[Card]) -> String {
    let cards: Vec<String> = cards.iter().map(format_card).collect();
    cards.join(" ")
}

pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Raise(to) => format!("raise to {}", to),
        other => other.name().to_string(),
    }
}

fn seat_label(snapshot: &TableSnapshot, id: usize) -> String {
    snapshot
        .players
        .get(id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("Seat {}", id))
}

/// One line per event, naming players as the snapshot does.
pub fn format_event(snapshot: &TableSnapshot, event: &TableEvent) -> String {
    match event {
        TableEvent::Acted { player, action } => {
            format!("{}: {}", seat_label(snapshot, *player), format_action(action))
        }
        TableEvent::StreetAdvanced(street) => {
            let shown = match street {
                Street::Flop => 3,
                Street::Turn => 4,
                Street::River | Street::Showdown => 5,
            };
            let mut board = snapshot.community_cards;
            board.iter_mut().skip(shown).for_each(|slot| *slot = None);
            format!("--- {} --- {}", street.as_str(), format_board(&board))
        }
        TableEvent::HandWon {
            winner,
            hand,
            amount,
        } => format!(
            "{} wins {} with {}",
            seat_label(snapshot, *winner),
            amount,
            hand
        ),
    }
}

fn format_player(p: &PlayerSnapshot) -> String {
    let hole = match p.hole {
        Some(cards) => format_board(&cards),
        None => format_board(&[None, None]),
    };
    let mut line = format!("{:<10} {:>6} {}", p.name, p.balance, hole);
    if p.folded {
        line.push_str(" folded");
    } else if let Some(action) = p.action {
        line.push_str(&format!(" {} ({})", format_action(&action), p.current_round_bet));
    }
    line
}

/// Multi-line table view: street, board, pot, then one row per seat.
pub fn render_table(snapshot: &TableSnapshot) -> String {
    let mut lines = vec![
        format!(
            "{} {}  pot {}  bet {}",
            snapshot.betting_round.as_str(),
            format_board(&snapshot.community_cards),
            snapshot.pot,
            snapshot.current_bet
        ),
    ];
    lines.extend(snapshot.players.iter().map(format_player));
    if let (Some(winner), Some(hand)) = (snapshot.winner, &snapshot.winning_hand) {
        lines.push(format!("Winner: {} ({})", seat_label(snapshot, winner), hand));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::deck::Deck;
    use holdem_engine::game::GameState;

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "T");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");
        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn board_marks_hidden_slots() {
        assert_eq!(format_board(&[None, None]), "[?? ??]");
        let ace = Card {
            rank: Rank::Ace,
            suit: Suit::Spades,
        };
        let board = format_board(&[Some(ace), None]);
        assert!(board.starts_with("[A"));
        assert!(board.ends_with(" ??]"));
    }

    #[test]
    fn actions_read_as_typed() {
        assert_eq!(format_action(&PlayerAction::Fold), "fold");
        assert_eq!(format_action(&PlayerAction::Check), "check");
        assert_eq!(format_action(&PlayerAction::Call), "call");
        assert_eq!(format_action(&PlayerAction::Raise(120)), "raise to 120");
    }

    #[test]
    fn table_hides_ai_cards_and_turn_slots() {
        let mut gs = GameState::with_ai_opponents(1, 1000).unwrap();
        gs.new_hand(&mut Deck::new_with_seed(4)).unwrap();
        let text = render_table(&gs.snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("flop"));
        assert!(lines[0].contains("?? ??]"));
        assert!(!lines[1].contains(HIDDEN_CARD));
        assert!(lines[2].contains("[?? ??]"));
    }

    #[test]
    fn events_name_players() {
        let gs = GameState::with_ai_opponents(1, 1000).unwrap();
        let snapshot = gs.snapshot();
        let won = TableEvent::HandWon {
            winner: 0,
            hand: "Flush".into(),
            amount: 300,
        };
        let line = format_event(&snapshot, &won);
        assert!(line.ends_with("wins 300 with Flush"), "{}", line);
        let street = format_event(&snapshot, &TableEvent::StreetAdvanced(Street::Turn));
        assert!(street.starts_with("--- turn ---"));
    }
}
