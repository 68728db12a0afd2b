//! # holdem-ai: Automated Opponents
//!
//! Decision policies for AI-controlled seats. Every policy draws its randomness from
//! the caller's RNG, so a seeded RNG replays the same decisions.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`baseline`] - Stochastic betting policy used at the table
//! - [`facilitator`] - Suggestions for a manually facilitated table
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::{create_ai, AIOpponent};
//! use holdem_engine::deck::Deck;
//! use holdem_engine::game::GameState;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let ai = create_ai("baseline").unwrap();
//!
//! let mut table = GameState::with_ai_opponents(1, 1000).unwrap();
//! table.new_hand(&mut Deck::new_with_seed(42)).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let action = ai.get_action(&table, 1, &mut rng);
//! println!("AI chose action: {:?}", action);
//! ```

use holdem_engine::game::GameState;
use holdem_engine::player::{PlayerAction, PlayerId};
use rand::RngCore;
use thiserror::Error;

pub mod baseline;
pub mod facilitator;

/// Interface for AI opponents.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::AIOpponent;
/// use holdem_engine::game::GameState;
/// use holdem_engine::player::{PlayerAction, PlayerId};
/// use rand::RngCore;
///
/// struct AlwaysCheck;
///
/// impl AIOpponent for AlwaysCheck {
///     fn get_action(
///         &self,
///         _state: &GameState,
///         _player_id: PlayerId,
///         _rng: &mut dyn RngCore,
///     ) -> Option<PlayerAction> {
///         Some(PlayerAction::Check)
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCheck"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Decide the next action for `player_id`.
    ///
    /// `None` means the policy made no decision; the table treats it as a check. The
    /// returned action is not guaranteed to be legal and may be rejected by the table.
    fn get_action(
        &self,
        state: &GameState,
        player_id: PlayerId,
        rng: &mut dyn RngCore,
    ) -> Option<PlayerAction>;

    /// Return the name/identifier of this AI implementation.
    fn name(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown AI type: {0} (expected one of: {names})", names = AI_TYPES.join(", "))]
pub struct UnknownAiType(pub String);

/// Names accepted by [`create_ai`].
pub const AI_TYPES: [&str; 2] = ["baseline", "facilitator"];

/// Factory function to create AI opponents by type string.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle").is_err());
/// ```
pub fn create_ai(ai_type: &str) -> Result<Box<dyn AIOpponent>, UnknownAiType> {
    match ai_type {
        "baseline" => Ok(Box::new(baseline::BaselineAI::new())),
        "facilitator" => Ok(Box::new(facilitator::FacilitatorAI::new())),
        other => Err(UnknownAiType(other.to_string())),
    }
}
