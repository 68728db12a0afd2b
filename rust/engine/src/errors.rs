use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot check: {to_call} to call")]
    CannotCheck { to_call: u32 },
    #[error("Nothing to call - use check instead")]
    NothingToCall,
    #[error("Raise must exceed the current bet of {current_bet} (got {amount})")]
    RaiseTooSmall { amount: u32, current_bet: u32 },
    #[error("Insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("Player {0} is not seated at this table")]
    UnknownPlayer(PlayerId),
    #[error("Player already folded")]
    PlayerAlreadyFolded,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Unable to draw a unique card after {attempts} attempts")]
    ExhaustedDeck { attempts: u32 },
    #[error("Cannot deal {requested} cards, only {available} remain")]
    TooManyCards { requested: usize, available: usize },
    #[error("No player holds a rankable hand")]
    NoRankableHand,
    #[error("Total chips on the table would exceed 4294967295")]
    ChipOverflow,
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl GameError {
    /// True for rejections of a single player's action. These never mutate state and
    /// are reported back to the acting player only.
    pub fn is_invalid_action(&self) -> bool {
        matches!(
            self,
            GameError::CannotCheck { .. }
                | GameError::NothingToCall
                | GameError::RaiseTooSmall { .. }
                | GameError::InsufficientChips { .. }
                | GameError::UnknownPlayer(_)
                | GameError::PlayerAlreadyFolded
                | GameError::HandAlreadyComplete
        )
    }
}
