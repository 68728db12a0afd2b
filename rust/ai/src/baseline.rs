//! Baseline AI: a stochastic policy driven only by the betting situation.
//!
//! The policy never looks at cards. Facing a bet it folds more often the larger
//! the call is relative to its balance; with nothing to call it mostly checks and
//! sometimes makes a minimum raise.

use crate::AIOpponent;
use holdem_engine::game::GameState;
use holdem_engine::player::{PlayerAction, PlayerId};
use rand::{Rng, RngCore};

/// Smallest raise increment over the current bet.
pub const MIN_RAISE_STEP: u32 = 10;

/// The numbers the baseline policy decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Situation {
    pub balance: u32,
    pub pot: u32,
    pub current_bet: u32,
    pub current_round_bet: u32,
}

impl Situation {
    pub fn of(state: &GameState, player_id: PlayerId) -> Option<Self> {
        let p = state.player(player_id)?;
        Some(Self {
            balance: p.balance(),
            pot: state.pot(),
            current_bet: state.current_bet(),
            current_round_bet: p.current_round_bet(),
        })
    }

    pub fn to_call(&self) -> u32 {
        self.current_bet.saturating_sub(self.current_round_bet)
    }
}

/// Picks an action for `s` using one uniform draw, plus a second one when sizing a
/// raise against a bet.
///
/// Facing a bet:
/// - fold when the balance cannot cover the call, or the draw is below
///   `0.05 + 0.25 * call / balance`
/// - call when the draw is below 0.65
/// - otherwise raise to `current_bet + 10 + floor(draw2 * pot / 2)`, capped at
///   `current_bet + balance` and never below `current_bet + 10`
///
/// With nothing to call: check below 0.70, raise to `current_bet + 10` below 0.90,
/// otherwise no decision (`None`).
pub fn decide(s: Situation, rng: &mut dyn RngCore) -> Option<PlayerAction> {
    let draw: f64 = rng.random();
    choose(s, draw, || rng.random())
}

fn choose(s: Situation, draw: f64, raise_draw: impl FnOnce() -> f64) -> Option<PlayerAction> {
    let call = s.to_call();
    if call > 0 {
        let pressure = call as f64 / s.balance.max(1) as f64;
        if s.balance < call || draw < 0.05 + pressure * 0.25 {
            Some(PlayerAction::Fold)
        } else if draw < 0.65 {
            Some(PlayerAction::Call)
        } else {
            let floor = s.current_bet + MIN_RAISE_STEP;
            let sized = (raise_draw() * s.pot as f64 * 0.5).floor() as u32 + floor;
            let to = sized.min(s.current_bet + s.balance).max(floor);
            Some(PlayerAction::Raise(to))
        }
    } else if draw < 0.70 {
        Some(PlayerAction::Check)
    } else if draw < 0.90 {
        Some(PlayerAction::Raise(s.current_bet + MIN_RAISE_STEP))
    } else {
        None
    }
}

/// Table-facing wrapper around [`decide`].
///
/// # Example
///
/// ```rust
/// use holdem_ai::baseline::BaselineAI;
/// use holdem_ai::AIOpponent;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }
}

impl AIOpponent for BaselineAI {
    fn get_action(
        &self,
        state: &GameState,
        player_id: PlayerId,
        rng: &mut dyn RngCore,
    ) -> Option<PlayerAction> {
        let player = state.player(player_id)?;
        if player.is_folded() {
            return None;
        }
        decide(Situation::of(state, player_id)?, rng)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn facing(call: u32, balance: u32, pot: u32) -> Situation {
        Situation {
            balance,
            pot,
            current_bet: 40 + call,
            current_round_bet: 40,
        }
    }

    fn unbet(pot: u32) -> Situation {
        Situation {
            balance: 500,
            pot,
            current_bet: 0,
            current_round_bet: 0,
        }
    }

    #[test]
    fn no_bet_bands() {
        let s = unbet(120);
        assert_eq!(choose(s, 0.0, || 0.0), Some(PlayerAction::Check));
        assert_eq!(choose(s, 0.69, || 0.0), Some(PlayerAction::Check));
        assert_eq!(choose(s, 0.70, || 0.0), Some(PlayerAction::Raise(10)));
        assert_eq!(choose(s, 0.89, || 0.0), Some(PlayerAction::Raise(10)));
        assert_eq!(choose(s, 0.90, || 0.0), None);
        assert_eq!(choose(s, 0.999, || 0.0), None);
    }

    #[test]
    fn fold_threshold_grows_with_pressure() {
        // call 100 of 400: threshold 0.05 + 0.0625
        let s = facing(100, 400, 200);
        assert_eq!(choose(s, 0.11, || 0.0), Some(PlayerAction::Fold));
        assert_eq!(choose(s, 0.12, || 0.0), Some(PlayerAction::Call));

        // tiny call barely moves it
        let s = facing(1, 10_000, 200);
        assert_eq!(choose(s, 0.049, || 0.0), Some(PlayerAction::Fold));
        assert_eq!(choose(s, 0.051, || 0.0), Some(PlayerAction::Call));
    }

    #[test]
    fn unaffordable_call_always_folds() {
        let s = facing(100, 60, 200);
        assert_eq!(choose(s, 0.99, || 0.99), Some(PlayerAction::Fold));
    }

    #[test]
    fn raise_is_sized_from_the_pot() {
        let s = facing(20, 1000, 300);
        assert_eq!(choose(s, 0.64, || 0.0), Some(PlayerAction::Call));
        // floor = 60 + 10
        assert_eq!(choose(s, 0.65, || 0.0), Some(PlayerAction::Raise(70)));
        // 0.5 * 300 * 0.5 = 75
        assert_eq!(choose(s, 0.80, || 0.5), Some(PlayerAction::Raise(145)));
    }

    #[test]
    fn raise_is_capped_by_balance_but_not_below_the_floor() {
        let s = facing(20, 30, 10_000);
        assert_eq!(choose(s, 0.99, || 0.99), Some(PlayerAction::Raise(90)));

        // cap 45 + 8 sits below the floor of 45 + 10
        let s = facing(5, 8, 0);
        assert_eq!(choose(s, 0.99, || 0.99), Some(PlayerAction::Raise(55)));
    }

    #[test]
    fn seeded_rng_follows_the_band_shares() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let s = unbet(0);
        let (mut checks, mut raises, mut none) = (0, 0, 0);
        for _ in 0..10_000 {
            match decide(s, &mut rng) {
                Some(PlayerAction::Check) => checks += 1,
                Some(PlayerAction::Raise(10)) => raises += 1,
                None => none += 1,
                other => panic!("unexpected {:?}", other),
            }
        }
        assert!((6_700..7_300).contains(&checks), "checks {}", checks);
        assert!((1_700..2_300).contains(&raises), "raises {}", raises);
        assert!((800..1_200).contains(&none), "none {}", none);
    }

    #[test]
    fn same_seed_same_decisions() {
        let s = facing(50, 500, 400);
        let mut a = ChaCha20Rng::seed_from_u64(77);
        let mut b = ChaCha20Rng::seed_from_u64(77);
        let xs: Vec<_> = (0..50).map(|_| decide(s, &mut a)).collect();
        let ys: Vec<_> = (0..50).map(|_| decide(s, &mut b)).collect();
        assert_eq!(xs, ys);
    }
}
