//! Read-only view of a table for front ends, plus opaque persistence of the full state.
//!
//! The snapshot only exposes what a spectator of the table may see: hole cards are
//! included when the player's cards are revealed, community cards when their street is.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::GameState;
use crate::logger::Street;
use crate::player::{PlayerAction, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub balance: u32,
    pub folded: bool,
    pub current_round_bet: u32,
    pub action: Option<PlayerAction>,
    pub action_value: u32,
    pub cards_revealed: bool,
    /// Present only while `cards_revealed` is set
    pub hole: Option<[Option<Card>; 2]>,
    pub is_ai: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub pot: u32,
    pub current_bet: u32,
    pub betting_round: Street,
    /// One entry per community slot; `None` while concealed or unassigned
    pub community_cards: [Option<Card>; 5],
    pub winner: Option<PlayerId>,
    pub winning_hand: Option<String>,
}

impl TableSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl GameState {
    pub fn snapshot(&self) -> TableSnapshot {
        let players = self
            .players()
            .iter()
            .map(|p| PlayerSnapshot {
                id: p.id(),
                name: p.name().to_string(),
                balance: p.balance(),
                folded: p.is_folded(),
                current_round_bet: p.current_round_bet(),
                action: p.last_action(),
                action_value: p.action_value(),
                cards_revealed: p.cards_revealed(),
                hole: p.cards_revealed().then(|| p.hole_cards()),
                is_ai: p.is_ai(),
            })
            .collect();

        let mut community_cards = [None; 5];
        for (i, slot) in community_cards.iter_mut().enumerate() {
            if self.is_slot_revealed(i) {
                *slot = self.community_cards()[i];
            }
        }

        TableSnapshot {
            players,
            pot: self.pot(),
            current_bet: self.current_bet(),
            betting_round: self.street(),
            community_cards,
            winner: self.winner(),
            winning_hand: self.winning_hand().map(str::to_string),
        }
    }

    /// Serializes the complete table, hidden cards included, for later [`GameState::from_json`].
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
