use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Seat index; stable for the lifetime of a table.
pub type PlayerId = usize;

/// Who decides a seat's actions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    /// Actions arrive as commands from the front end
    Human,
    /// Actions come from an AI policy driven by the orchestrator
    Ai,
}

/// Represents a player action during a betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if nothing is owed)
    Check,
    /// Match the current bet
    Call,
    /// Raise the current bet *to* the given total for this street
    Raise(u32),
}

impl PlayerAction {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::Fold => "fold",
            PlayerAction::Check => "check",
            PlayerAction::Call => "call",
            PlayerAction::Raise(_) => "raise",
        }
    }
}

/// A player command submitted by the front end.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub player_id: PlayerId,
    pub action: PlayerAction,
}

/// Default starting balance for each player in chips
pub const STARTING_BALANCE: u32 = 1_000;

/// A seated player with balance, hole cards, and per-street betting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    balance: u32,
    /// Hole cards; `None` until assigned
    hole: [Option<Card>; 2],
    folded: bool,
    /// Chips committed on the current street
    current_round_bet: u32,
    last_action: Option<PlayerAction>,
    /// Chips moved by `last_action`
    action_value: u32,
    cards_revealed: bool,
    controller: Controller,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        balance: u32,
        controller: Controller,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            hole: [None, None],
            folded: false,
            current_round_bet: 0,
            last_action: None,
            action_value: 0,
            cards_revealed: false,
            controller,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
    pub fn balance(&self) -> u32 {
        self.balance
    }
    pub fn set_balance(&mut self, balance: u32) {
        self.balance = balance;
    }
    pub fn controller(&self) -> Controller {
        self.controller
    }
    pub(crate) fn set_controller(&mut self, controller: Controller) {
        self.controller = controller;
    }
    pub fn is_ai(&self) -> bool {
        self.controller == Controller::Ai
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn current_round_bet(&self) -> u32 {
        self.current_round_bet
    }
    pub fn last_action(&self) -> Option<PlayerAction> {
        self.last_action
    }
    pub fn action_value(&self) -> u32 {
        self.action_value
    }
    pub fn cards_revealed(&self) -> bool {
        self.cards_revealed
    }
    pub fn set_cards_revealed(&mut self, revealed: bool) {
        self.cards_revealed = revealed;
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn has_cards(&self) -> bool {
        self.hole.iter().all(Option::is_some)
    }

    pub fn set_hole_card(&mut self, slot: usize, card: Option<Card>) {
        if let Some(s) = self.hole.get_mut(slot) {
            *s = card;
        }
    }

    pub fn give_cards(&mut self, a: Card, b: Card) {
        self.hole = [Some(a), Some(b)];
    }

    pub fn clear_cards(&mut self) {
        self.hole = [None, None];
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Moves `amount` from the balance into this street's contribution.
    pub(crate) fn commit(&mut self, amount: u32) {
        debug_assert!(amount <= self.balance);
        self.balance -= amount;
        self.current_round_bet += amount;
    }

    /// Takes chips off the balance without counting them toward the street's
    /// contribution; used by manually recorded actions.
    pub(crate) fn pay(&mut self, amount: u32) {
        debug_assert!(amount <= self.balance);
        self.balance -= amount;
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn record_action(&mut self, action: PlayerAction, value: u32) {
        self.last_action = Some(action);
        self.action_value = value;
    }

    /// Clears per-street betting state when a new street begins.
    pub(crate) fn reset_street(&mut self) {
        self.current_round_bet = 0;
        self.last_action = None;
        self.action_value = 0;
    }

    /// Clears everything tied to the previous hand, keeping the balance.
    pub(crate) fn reset_hand(&mut self) {
        self.reset_street();
        self.folded = false;
        self.clear_cards();
        self.cards_revealed = false;
    }

    pub(crate) fn sit_out(&mut self) {
        self.folded = true;
        self.clear_cards();
    }
}
