use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// An action that passed validation, carrying the chips it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Call moving `delta` chips
    Call { delta: u32 },
    /// Raise to `to`, moving `delta` chips
    Raise { to: u32, delta: u32 },
}

impl ValidatedAction {
    /// Chips this action moves from the balance into the pot.
    pub fn chips(&self) -> u32 {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call { delta } | ValidatedAction::Raise { delta, .. } => *delta,
        }
    }
}

/// Validates a player action against the betting state of the current street.
///
/// # Arguments
///
/// * `balance` - Player's remaining chips
/// * `current_round_bet` - Chips the player already committed this street
/// * `current_bet` - Highest commitment any active player made this street
/// * `action` - The action the player wishes to perform
///
/// # Errors
///
/// - [`GameError::CannotCheck`] - check while a call is owed
/// - [`GameError::NothingToCall`] - call with nothing owed
/// - [`GameError::RaiseTooSmall`] - raise to an amount at or below the current bet
/// - [`GameError::InsufficientChips`] - call or raise the balance cannot cover
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// let result = validate_action(1000, 0, 50, PlayerAction::Call);
/// assert_eq!(result, Ok(ValidatedAction::Call { delta: 50 }));
///
/// // Raise is expressed as the new street total; only the difference is paid
/// let result = validate_action(1000, 50, 50, PlayerAction::Raise(120));
/// assert_eq!(result, Ok(ValidatedAction::Raise { to: 120, delta: 70 }));
/// ```
///
/// ```
/// use holdem_engine::rules::validate_action;
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::errors::GameError;
///
/// let result = validate_action(1000, 0, 50, PlayerAction::Check);
/// assert!(matches!(result, Err(GameError::CannotCheck { to_call: 50 })));
///
/// let result = validate_action(1000, 0, 50, PlayerAction::Raise(50));
/// assert!(matches!(result, Err(GameError::RaiseTooSmall { .. })));
/// ```
pub fn validate_action(
    balance: u32,
    current_round_bet: u32,
    current_bet: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let to_call = current_bet.saturating_sub(current_round_bet);
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::CannotCheck { to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                Err(GameError::NothingToCall)
            } else if balance < to_call {
                Err(GameError::InsufficientChips {
                    needed: to_call,
                    available: balance,
                })
            } else {
                Ok(ValidatedAction::Call { delta: to_call })
            }
        }
        A::Raise(to) => {
            if to <= current_bet {
                return Err(GameError::RaiseTooSmall {
                    amount: to,
                    current_bet,
                });
            }
            let delta = to - current_round_bet;
            if delta > balance {
                Err(GameError::InsufficientChips {
                    needed: delta,
                    available: balance,
                })
            } else {
                Ok(ValidatedAction::Raise { to, delta })
            }
        }
    }
}
