//! Suggestions for a manually facilitated table.
//!
//! The facilitator policy reacts to the most recent action of the nearest
//! non-folded player before it and sizes bets from the pot, producing a
//! [`ManualAction`] a dealer can record as-is.

use crate::AIOpponent;
use holdem_engine::facilitator::ManualAction;
use holdem_engine::game::GameState;
use holdem_engine::player::{PlayerAction, PlayerId};
use rand::{Rng, RngCore};

const CALL_SHARE: f64 = 0.3;
const RAISE_SHARE: f64 = 0.6;
const MIN_CALL: u32 = 10;
const MIN_RAISE: u32 = 20;

#[derive(Debug, Clone, Default)]
pub struct FacilitatorAI;

impl FacilitatorAI {
    pub fn new() -> Self {
        Self
    }

    /// Suggests a manual action for `player_id`. Players without both hole cards or
    /// without chips always fold.
    pub fn suggest(
        &self,
        state: &GameState,
        player_id: PlayerId,
        rng: &mut dyn RngCore,
    ) -> ManualAction {
        let Some(player) = state.player(player_id) else {
            return ManualAction::Fold;
        };
        if !player.has_cards() || player.balance() == 0 {
            return ManualAction::Fold;
        }
        let sizes = Sizes::new(state.pot(), player.balance());
        let facing = matches!(
            previous_action(state, player_id),
            Some(PlayerAction::Call | PlayerAction::Raise(_))
        );
        pick(facing, rng.random(), sizes)
    }
}

#[derive(Debug, Clone, Copy)]
struct Sizes {
    call: u32,
    raise: u32,
}

impl Sizes {
    /// Pot shares with minimums, never more than the balance.
    fn new(pot: u32, balance: u32) -> Self {
        let share = |f: f64, min: u32| {
            let n = (pot as f64 * f).floor() as u32;
            n.max(min).min(balance)
        };
        Self {
            call: share(CALL_SHARE, MIN_CALL),
            raise: share(RAISE_SHARE, MIN_RAISE),
        }
    }
}

fn pick(facing: bool, draw: f64, sizes: Sizes) -> ManualAction {
    if facing {
        if draw < 0.25 {
            ManualAction::Fold
        } else if draw < 0.70 {
            ManualAction::Call(sizes.call)
        } else {
            ManualAction::Raise(sizes.raise)
        }
    } else if draw < 0.15 {
        ManualAction::Fold
    } else if draw < 0.50 {
        ManualAction::Check
    } else if draw < 0.75 {
        ManualAction::Call(sizes.call)
    } else {
        ManualAction::Raise(sizes.raise)
    }
}

/// Last action of the closest non-folded seat before `player_id` that has acted.
fn previous_action(state: &GameState, player_id: PlayerId) -> Option<PlayerAction> {
    let players = state.players();
    let n = players.len();
    (1..n)
        .map(|step| &players[(player_id + n - step) % n])
        .filter(|p| !p.is_folded())
        .find_map(|p| p.last_action())
}

impl AIOpponent for FacilitatorAI {
    /// Maps the suggestion onto a table action. A raise amount is the chips put in
    /// on top of the current bet.
    fn get_action(
        &self,
        state: &GameState,
        player_id: PlayerId,
        rng: &mut dyn RngCore,
    ) -> Option<PlayerAction> {
        Some(match self.suggest(state, player_id, rng) {
            ManualAction::Fold => PlayerAction::Fold,
            ManualAction::Check => PlayerAction::Check,
            ManualAction::Call(_) => PlayerAction::Call,
            ManualAction::Raise(n) => PlayerAction::Raise(state.current_bet() + n),
        })
    }

    fn name(&self) -> &str {
        "FacilitatorAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::Card;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn seated(n: usize) -> GameState {
        let mut gs = GameState::facilitated(n, 500).unwrap();
        for id in 0..n {
            let a: Card = ["2c", "3c", "4c", "5c"][id].parse().unwrap();
            let b: Card = ["2d", "3d", "4d", "5d"][id].parse().unwrap();
            gs.assign_hole_card(id, 0, Some(a)).unwrap();
            gs.assign_hole_card(id, 1, Some(b)).unwrap();
        }
        gs
    }

    #[test]
    fn sizes_follow_the_pot_with_minimums() {
        let s = Sizes::new(1000, 500);
        assert_eq!((s.call, s.raise), (300, 500));
        let s = Sizes::new(20, 500);
        assert_eq!((s.call, s.raise), (10, 20));
        let s = Sizes::new(20, 15);
        assert_eq!((s.call, s.raise), (10, 15));
    }

    #[test]
    fn bands_when_facing_a_bet() {
        let s = Sizes { call: 30, raise: 60 };
        assert_eq!(pick(true, 0.24, s), ManualAction::Fold);
        assert_eq!(pick(true, 0.25, s), ManualAction::Call(30));
        assert_eq!(pick(true, 0.69, s), ManualAction::Call(30));
        assert_eq!(pick(true, 0.70, s), ManualAction::Raise(60));
    }

    #[test]
    fn bands_when_unopened() {
        let s = Sizes { call: 30, raise: 60 };
        assert_eq!(pick(false, 0.14, s), ManualAction::Fold);
        assert_eq!(pick(false, 0.15, s), ManualAction::Check);
        assert_eq!(pick(false, 0.50, s), ManualAction::Call(30));
        assert_eq!(pick(false, 0.75, s), ManualAction::Raise(60));
    }

    #[test]
    fn previous_action_skips_folded_and_silent_seats() {
        let mut gs = seated(4);
        gs.record_manual_action(0, ManualAction::Raise(40)).unwrap();
        gs.record_manual_action(1, ManualAction::Fold).unwrap();
        assert_eq!(previous_action(&gs, 3), Some(PlayerAction::Raise(40)));
        assert_eq!(previous_action(&gs, 2), Some(PlayerAction::Raise(40)));
        assert_eq!(previous_action(&gs, 0), None);
    }

    #[test]
    fn folds_without_cards_or_chips() {
        let mut gs = seated(2);
        let ai = FacilitatorAI::new();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        gs.assign_hole_card(0, 1, None).unwrap();
        assert_eq!(ai.suggest(&gs, 0, &mut rng), ManualAction::Fold);
        gs.set_balance(1, 0).unwrap();
        assert_eq!(ai.suggest(&gs, 1, &mut rng), ManualAction::Fold);
    }

    #[test]
    fn suggestions_are_always_recordable() {
        let mut gs = seated(3);
        let ai = FacilitatorAI::new();
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        for round in 0..30 {
            let id = round % 3;
            if gs.players()[id].is_folded() {
                continue;
            }
            let action = ai.suggest(&gs, id, &mut rng);
            gs.record_manual_action(id, action).unwrap();
        }
    }
}
