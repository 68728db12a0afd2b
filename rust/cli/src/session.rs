//! Turn orchestration for one table.
//!
//! A [`TableSession`] owns the table state and drives the AI seats between human
//! actions: after each accepted human command the AI seats act in seat order, then
//! the betting round is checked for completion. The only suspension point is the
//! per-decision thinking delay, so actions never interleave.

use std::time::Duration;

use holdem_ai::AIOpponent;
use holdem_engine::deck::Deck;
use holdem_engine::errors::GameError;
use holdem_engine::game::{ActionOutcome, Award, GameState, RoundProgress};
use holdem_engine::logger::Street;
use holdem_engine::player::{Command, PlayerAction, PlayerId};
use holdem_engine::snapshot::TableSnapshot;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Something that happened at the table, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    Acted {
        player: PlayerId,
        action: PlayerAction,
    },
    StreetAdvanced(Street),
    HandWon {
        winner: PlayerId,
        hand: String,
        amount: u32,
    },
}

impl From<Award> for TableEvent {
    fn from(award: Award) -> Self {
        TableEvent::HandWon {
            winner: award.winner,
            hand: award.hand,
            amount: award.amount,
        }
    }
}

pub struct TableSession {
    state: GameState,
    deck: Deck,
    rng: ChaCha20Rng,
    policy: Box<dyn AIOpponent>,
    think_delay: Duration,
    seed: u64,
}

impl TableSession {
    /// Cards and AI decisions both derive from `seed`, on separate ChaCha streams.
    pub fn new(
        state: GameState,
        policy: Box<dyn AIOpponent>,
        seed: u64,
        think_delay: Duration,
    ) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        rng.set_stream(1);
        Self {
            state,
            deck: Deck::new_with_seed(seed),
            rng,
            policy,
            think_delay,
            seed,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> TableSnapshot {
        self.state.snapshot()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Deals a new hand with the session's deck.
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        self.state.new_hand(&mut self.deck)
    }

    /// First human-controlled seat, if any.
    pub fn human_seat(&self) -> Option<PlayerId> {
        self.state.players().iter().find(|p| !p.is_ai()).map(|p| p.id())
    }

    /// A human is still in the hand and may be asked for an action.
    pub fn human_can_act(&self) -> bool {
        !self.state.is_hand_over()
            && self
                .state
                .players()
                .iter()
                .any(|p| !p.is_ai() && !p.is_folded())
    }

    fn human_owes_action(&self) -> bool {
        self.state
            .players()
            .iter()
            .any(|p| !p.is_ai() && self.state.owes_action(p.id()))
    }

    /// Applies a player's command, then lets the AI seats respond.
    ///
    /// A rejected command returns its error with the table untouched and no AI
    /// activity.
    pub async fn submit(&mut self, command: Command) -> Result<Vec<TableEvent>, GameError> {
        let outcome = self.state.apply_action(command.player_id, command.action)?;
        let mut events = vec![TableEvent::Acted {
            player: command.player_id,
            action: command.action,
        }];
        if let ActionOutcome::HandOver(award) = outcome {
            events.push(award.into());
            return Ok(events);
        }
        self.advance(&mut events).await?;
        Ok(events)
    }

    /// Runs AI turns and street advances until a human has to act or the hand ends.
    /// On a table without an active human this plays the hand to completion.
    pub async fn play_out(&mut self) -> Result<Vec<TableEvent>, GameError> {
        let mut events = Vec::new();
        self.advance(&mut events).await?;
        Ok(events)
    }

    async fn advance(&mut self, events: &mut Vec<TableEvent>) -> Result<(), GameError> {
        while !self.state.is_hand_over() {
            events.extend(self.run_ai_turns().await?);
            match self.state.check_round_complete()? {
                RoundProgress::Pending => break,
                RoundProgress::Advanced(street) => {
                    events.push(TableEvent::StreetAdvanced(street));
                    if self.human_can_act() {
                        break;
                    }
                }
                RoundProgress::Finished(award) => {
                    events.push(award.into());
                    break;
                }
            }
        }
        Ok(())
    }

    /// Lets every AI seat that still has to act do so, in seat order.
    ///
    /// Folded seats and seats that already acted and matched the current bet are
    /// skipped. After each full pass the loop yields if a human now owes an action;
    /// it ends when a pass makes no action or the hand is over.
    pub async fn run_ai_turns(&mut self) -> Result<Vec<TableEvent>, GameError> {
        let mut events = Vec::new();
        loop {
            let mut acted = false;
            for id in 0..self.state.players().len() {
                if self.state.is_hand_over() {
                    return Ok(events);
                }
                let Some(player) = self.state.player(id) else {
                    continue;
                };
                if !player.is_ai() || player.is_folded() || self.state.is_settled(id) {
                    continue;
                }

                if !self.think_delay.is_zero() {
                    tokio::time::sleep(self.think_delay).await;
                }
                let (action, outcome) = self.take_ai_turn(id)?;
                events.push(TableEvent::Acted { player: id, action });
                acted = true;
                if let ActionOutcome::HandOver(award) = outcome {
                    events.push(award.into());
                    return Ok(events);
                }
            }
            if !acted || self.human_owes_action() {
                return Ok(events);
            }
        }
    }

    fn take_ai_turn(&mut self, id: PlayerId) -> Result<(PlayerAction, ActionOutcome), GameError> {
        let decision = self
            .policy
            .get_action(&self.state, id, &mut self.rng)
            .unwrap_or(PlayerAction::Check);
        match self.state.apply_action(id, decision) {
            Ok(outcome) => Ok((decision, outcome)),
            Err(e) if e.is_invalid_action() => {
                let fallback = self.fallback_action(id);
                tracing::warn!(
                    player_id = id,
                    decision = ?decision,
                    fallback = ?fallback,
                    error = %e,
                    "AI decision rejected"
                );
                let outcome = self.state.apply_action(id, fallback)?;
                Ok((fallback, outcome))
            }
            Err(e) => Err(e),
        }
    }

    /// Check when nothing is owed, call when affordable, fold otherwise.
    fn fallback_action(&self, id: PlayerId) -> PlayerAction {
        let Some(p) = self.state.player(id) else {
            return PlayerAction::Fold;
        };
        let to_call = self.state.current_bet().saturating_sub(p.current_round_bet());
        if to_call == 0 {
            PlayerAction::Check
        } else if p.balance() >= to_call {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    }
}
