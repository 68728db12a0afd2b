use holdem_engine::errors::GameError;
use holdem_engine::player::PlayerAction as A;
use holdem_engine::rules::{validate_action, ValidatedAction};

#[test]
fn check_only_when_nothing_is_owed() {
    assert_eq!(validate_action(500, 0, 0, A::Check), Ok(ValidatedAction::Check));
    assert_eq!(validate_action(500, 40, 40, A::Check), Ok(ValidatedAction::Check));
    assert_eq!(
        validate_action(500, 20, 40, A::Check),
        Err(GameError::CannotCheck { to_call: 20 })
    );
}

#[test]
fn call_requires_an_outstanding_bet() {
    assert_eq!(validate_action(500, 0, 0, A::Call), Err(GameError::NothingToCall));
    assert_eq!(
        validate_action(500, 20, 40, A::Call),
        Ok(ValidatedAction::Call { delta: 20 })
    );
}

#[test]
fn call_beyond_balance_is_rejected_not_all_in() {
    let err = validate_action(15, 0, 40, A::Call).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientChips {
            needed: 40,
            available: 15
        }
    );
    assert!(err.is_invalid_action());
}

#[test]
fn raise_must_exceed_current_bet() {
    match validate_action(500, 0, 40, A::Raise(40)) {
        Err(GameError::RaiseTooSmall {
            amount: 40,
            current_bet: 40,
        }) => {}
        other => panic!("expected RaiseTooSmall, got {:?}", other),
    }
    assert!(matches!(
        validate_action(500, 0, 40, A::Raise(10)),
        Err(GameError::RaiseTooSmall { .. })
    ));
}

#[test]
fn raise_pays_only_the_difference_to_the_new_total() {
    assert_eq!(
        validate_action(500, 40, 40, A::Raise(100)),
        Ok(ValidatedAction::Raise { to: 100, delta: 60 })
    );
    // the whole balance may go in, but not more
    assert_eq!(
        validate_action(60, 40, 40, A::Raise(100)),
        Ok(ValidatedAction::Raise { to: 100, delta: 60 })
    );
    assert_eq!(
        validate_action(59, 40, 40, A::Raise(100)),
        Err(GameError::InsufficientChips {
            needed: 60,
            available: 59
        })
    );
}

#[test]
fn fold_is_always_valid() {
    assert_eq!(validate_action(0, 0, 300, A::Fold), Ok(ValidatedAction::Fold));
    assert_eq!(ValidatedAction::Fold.chips(), 0);
    assert_eq!(ValidatedAction::Raise { to: 90, delta: 70 }.chips(), 70);
}
