//! Driver for a manually facilitated table with AI-controlled seats.
//!
//! The facilitator records actions for human seats. Whenever the turn lands on a
//! seat switched to AI control, that seat's [`FacilitatorAI`] suggestion is recorded
//! automatically after the thinking delay.

use std::time::Duration;

use holdem_ai::facilitator::FacilitatorAI;
use holdem_engine::errors::GameError;
use holdem_engine::facilitator::ManualAction;
use holdem_engine::game::GameState;
use holdem_engine::player::{Controller, PlayerId};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// One recorded action, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualMove {
    pub player: PlayerId,
    pub action: ManualAction,
}

pub struct FacilitatedSession {
    state: GameState,
    policy: FacilitatorAI,
    rng: ChaCha20Rng,
    think_delay: Duration,
}

impl FacilitatedSession {
    pub fn new(state: GameState, seed: u64, think_delay: Duration) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        rng.set_stream(1);
        Self {
            state,
            policy: FacilitatorAI::new(),
            rng,
            think_delay,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for card, name and balance edits.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Records a facilitator-entered action, then lets any AI seats that now hold
    /// the turn act.
    pub async fn record(
        &mut self,
        player: PlayerId,
        action: ManualAction,
    ) -> Result<Vec<ManualMove>, GameError> {
        self.state.record_manual_action(player, action)?;
        let mut moves = vec![ManualMove { player, action }];
        moves.extend(self.run_ai_seats().await?);
        Ok(moves)
    }

    /// Switches a seat between human and AI. A seat handed to the AI on its own
    /// turn acts straight away.
    pub async fn toggle_ai(&mut self, player: PlayerId) -> Result<Vec<ManualMove>, GameError> {
        if self.state.toggle_ai(player)? == Controller::Ai
            && self.state.ai_to_act() == Some(player)
        {
            return self.run_ai_seats().await;
        }
        Ok(Vec::new())
    }

    /// Records AI suggestions while the turn sits on an AI seat.
    ///
    /// Stops at a human seat, when at most one player is left in the hand, or after
    /// one lap of the table so an all-AI table hands control back between laps.
    pub async fn run_ai_seats(&mut self) -> Result<Vec<ManualMove>, GameError> {
        let mut moves = Vec::new();
        while moves.len() < self.state.players().len() {
            let Some(player) = self.state.ai_to_act() else {
                break;
            };
            if self.state.active_players().count() <= 1 {
                break;
            }
            if !self.think_delay.is_zero() {
                tokio::time::sleep(self.think_delay).await;
            }
            let action = self.policy.suggest(&self.state, player, &mut self.rng);
            self.state.record_manual_action(player, action)?;
            tracing::debug!(player_id = player, action = ?action, "AI seat acted");
            moves.push(ManualMove { player, action });
        }
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn human_turns_do_not_trigger_the_ai() {
        let state = GameState::facilitated(3, 500).unwrap();
        let mut session = FacilitatedSession::new(state, 1, Duration::ZERO);
        assert!(session.run_ai_seats().await.unwrap().is_empty());
        assert_eq!(session.state().current_turn(), Some(0));
    }

    #[tokio::test]
    async fn toggling_back_to_human_is_silent() {
        let state = GameState::facilitated(2, 500).unwrap();
        let mut session = FacilitatedSession::new(state, 1, Duration::ZERO);
        session.toggle_ai(1).await.unwrap();
        assert!(session.toggle_ai(1).await.unwrap().is_empty());
        assert!(!session.state().players()[1].is_ai());
    }
}
