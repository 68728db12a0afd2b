//! Manual facilitation: a dealer records what happens at a physical table.
//!
//! Unlike [`GameState::apply_action`], manual actions carry the chips moved explicitly
//! and are not validated against the current bet. Turn order is tracked so the front
//! end can highlight who is next.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::{Award, GameState};
use crate::logger::{ActionRecord, Street};
use crate::player::{Controller, Player, PlayerAction, PlayerId};

pub const MIN_FACILITATED_PLAYERS: usize = 2;
pub const MAX_FACILITATED_PLAYERS: usize = 50;

/// An action as recorded by a facilitator. Amounts are chips moved into the pot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManualAction {
    Check,
    Call(u32),
    Raise(u32),
    Fold,
}

impl ManualAction {
    pub fn amount(&self) -> u32 {
        match self {
            ManualAction::Call(n) | ManualAction::Raise(n) => *n,
            ManualAction::Check | ManualAction::Fold => 0,
        }
    }

    fn as_player_action(&self) -> PlayerAction {
        match self {
            ManualAction::Check => PlayerAction::Check,
            ManualAction::Call(_) => PlayerAction::Call,
            ManualAction::Raise(n) => PlayerAction::Raise(*n),
            ManualAction::Fold => PlayerAction::Fold,
        }
    }
}

impl GameState {
    /// A facilitated table of `count` human seats named "Player N", with no cards dealt.
    pub fn facilitated(count: usize, starting_balance: u32) -> Result<Self, GameError> {
        if !(MIN_FACILITATED_PLAYERS..=MAX_FACILITATED_PLAYERS).contains(&count) {
            return Err(GameError::InvalidConfiguration(format!(
                "player count must be between {} and {}",
                MIN_FACILITATED_PLAYERS, MAX_FACILITATED_PLAYERS
            )));
        }
        let players = (0..count)
            .map(|seat| Player::new(seat, default_name(seat), starting_balance, Controller::Human))
            .collect();
        let mut gs = Self::new(players, starting_balance)?;
        gs.current_turn = Some(0);
        Ok(gs)
    }

    pub fn current_turn(&self) -> Option<PlayerId> {
        self.current_turn
    }

    pub fn set_turn(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.seat(id)?;
        self.current_turn = Some(id);
        Ok(())
    }

    /// Moves the turn to the next non-folded seat after the current one, wrapping around.
    pub fn advance_turn(&mut self) -> Option<PlayerId> {
        let n = self.players.len();
        let next = match self.current_turn {
            None => Some(0),
            Some(cur) => (1..=n)
                .map(|step| (cur + step) % n)
                .find(|&i| !self.players[i].is_folded())
                .or(Some((cur + 1) % n)),
        };
        self.current_turn = next;
        next
    }

    /// Records an action with an explicit chip amount and passes the turn on.
    ///
    /// The facilitator has the last word at a physical table, so folded seats and
    /// hands that already have a winner are not refused; only the balance is checked.
    pub fn record_manual_action(
        &mut self,
        id: PlayerId,
        action: ManualAction,
    ) -> Result<Option<PlayerId>, GameError> {
        let street = self.street;
        let player = self.seat_mut(id)?;
        let amount = action.amount();
        if amount > player.balance() {
            return Err(GameError::InsufficientChips {
                needed: amount,
                available: player.balance(),
            });
        }
        player.pay(amount);
        if action == ManualAction::Fold {
            player.fold();
        }
        player.record_action(action.as_player_action(), amount);
        self.pot += amount;
        self.actions.push(ActionRecord {
            player_id: id,
            street,
            action: action.as_player_action(),
        });
        tracing::debug!(player_id = id, action = ?action, pot = self.pot, "manual action recorded");
        Ok(self.advance_turn())
    }

    pub fn set_controller(
        &mut self,
        id: PlayerId,
        controller: Controller,
    ) -> Result<(), GameError> {
        self.seat_mut(id)?.set_controller(controller);
        Ok(())
    }

    /// Switches a seat between human and AI control. Returns the new controller.
    pub fn toggle_ai(&mut self, id: PlayerId) -> Result<Controller, GameError> {
        let player = self.seat_mut(id)?;
        let next = match player.controller() {
            Controller::Human => Controller::Ai,
            Controller::Ai => Controller::Human,
        };
        player.set_controller(next);
        tracing::debug!(player_id = id, controller = ?next, "seat control changed");
        Ok(next)
    }

    /// The seat holding the turn, if it is AI-controlled and still in the hand.
    pub fn ai_to_act(&self) -> Option<PlayerId> {
        if self.is_hand_over() {
            return None;
        }
        self.current_turn
            .and_then(|id| self.player(id))
            .filter(|p| p.is_ai() && !p.is_folded())
            .map(Player::id)
    }

    /// Resets one seat's action, fold flag, cards and visibility.
    pub fn clear_player(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.seat_mut(id)?.reset_hand();
        Ok(())
    }

    /// Assigns or clears (`None`) one of a player's two hole cards.
    pub fn assign_hole_card(
        &mut self,
        id: PlayerId,
        slot: usize,
        card: Option<Card>,
    ) -> Result<(), GameError> {
        if slot > 1 {
            return Err(GameError::InvalidConfiguration(format!(
                "hole card slot {} out of range",
                slot
            )));
        }
        self.seat_mut(id)?.set_hole_card(slot, card);
        Ok(())
    }

    pub fn set_community_card(&mut self, slot: usize, card: Option<Card>) -> Result<(), GameError> {
        let target = self.community.get_mut(slot).ok_or_else(|| {
            GameError::InvalidConfiguration(format!("community slot {} out of range", slot))
        })?;
        *target = card;
        Ok(())
    }

    /// Shows or hides the community cards of a street. Showdown has no cards of its own.
    pub fn set_street_revealed(&mut self, street: Street, revealed: bool) {
        match street {
            Street::Flop => self.revealed[0] = revealed,
            Street::Turn => self.revealed[1] = revealed,
            Street::River => self.revealed[2] = revealed,
            Street::Showdown => {}
        }
    }

    /// Renames a seat; an empty name falls back to "Player N".
    pub fn set_player_name(&mut self, id: PlayerId, name: &str) -> Result<(), GameError> {
        let name = name.trim();
        let player = self.seat_mut(id)?;
        if name.is_empty() {
            player.set_name(default_name(id));
        } else {
            player.set_name(name);
        }
        Ok(())
    }

    /// Overrides a seat's balance.
    ///
    /// # Errors
    ///
    /// [`GameError::ChipOverflow`] if the table's chips would no longer fit in a `u32`.
    pub fn set_balance(&mut self, id: PlayerId, balance: u32) -> Result<(), GameError> {
        let current = self.seat(id)?.balance();
        let fits = self
            .total_chips()
            .and_then(|total| (total - current).checked_add(balance))
            .is_some();
        if !fits {
            return Err(GameError::ChipOverflow);
        }
        self.seat_mut(id)?.set_balance(balance);
        Ok(())
    }

    pub fn reveal_player_cards(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.seat_mut(id)?.set_cards_revealed(true);
        Ok(())
    }

    pub fn hide_player_cards(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.seat_mut(id)?.set_cards_revealed(false);
        Ok(())
    }

    /// Declares a winner chosen by the facilitator and pays out the pot.
    pub fn set_winner(&mut self, id: PlayerId, hand: &str) -> Result<Award, GameError> {
        self.seat(id)?;
        if hand.trim().is_empty() {
            return Err(GameError::InvalidConfiguration(
                "a winning hand must be given".into(),
            ));
        }
        Ok(self.award(id, hand.trim()))
    }

    pub fn clear_winner(&mut self) {
        self.winner = None;
        self.winning_hand = None;
    }

    /// Empties the pot without paying anyone. Returns the chips removed.
    pub fn reset_pot(&mut self) -> u32 {
        let removed = std::mem::take(&mut self.pot);
        if removed > 0 {
            tracing::warn!(removed, "pot reset by facilitator");
        }
        removed
    }

    fn seat(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    fn seat_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players.get_mut(id).ok_or(GameError::UnknownPlayer(id))
    }
}

fn default_name(seat: PlayerId) -> String {
    format!("Player {}", seat + 1)
}
