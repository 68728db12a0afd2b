use holdem_engine::deck::Deck;
use holdem_engine::errors::GameError;
use holdem_engine::game::GameState;
use holdem_engine::player::PlayerAction as A;

fn assert_invariants(gs: &GameState, start_total: u32) {
    let balances: u32 = gs.players().iter().map(|p| p.balance()).sum();
    assert_eq!(balances + gs.pot(), start_total, "chips created or lost");
    for p in gs.active_players() {
        assert!(
            p.current_round_bet() <= gs.current_bet(),
            "player {} committed {} over current bet {}",
            p.id(),
            p.current_round_bet(),
            gs.current_bet()
        );
    }
}

#[test]
fn pot_is_the_sum_of_everything_committed() {
    let mut gs = GameState::with_ai_opponents(3, 500).unwrap();
    gs.new_hand(&mut Deck::new_with_seed(21)).unwrap();
    let script = [
        (0, A::Check),
        (1, A::Raise(40)),
        (2, A::Call),
        (3, A::Raise(100)),
        (0, A::Fold),
        (1, A::Call),
        (2, A::Call),
    ];
    for (id, action) in script {
        gs.apply_action(id, action).unwrap();
        assert_invariants(&gs, 2000);
    }
    assert_eq!(gs.pot(), 300);
    assert!(gs.is_round_complete());
}

#[test]
fn rejected_actions_move_no_chips() {
    let mut gs = GameState::with_ai_opponents(1, 100).unwrap();
    gs.new_hand(&mut Deck::new_with_seed(22)).unwrap();
    gs.apply_action(0, A::Raise(80)).unwrap();
    assert!(gs.apply_action(1, A::Raise(200)).is_err());
    assert!(gs.apply_action(1, A::Check).is_err());
    assert_invariants(&gs, 200);
    assert_eq!(gs.pot(), 80);
    assert_eq!(gs.players()[1].balance(), 100);
}

#[test]
fn award_empties_the_pot_into_the_winner() {
    let mut gs = GameState::with_ai_opponents(1, 100).unwrap();
    gs.new_hand(&mut Deck::new_with_seed(23)).unwrap();
    gs.apply_action(0, A::Raise(100)).unwrap();
    gs.apply_action(1, A::Fold).unwrap();
    assert_eq!(gs.pot(), 0);
    assert_eq!(gs.players()[0].balance(), 100);
    assert_invariants(&gs, 200);
}

#[test]
fn tables_whose_chips_overflow_are_rejected() {
    assert_eq!(
        GameState::with_ai_opponents(1, 3_000_000_000),
        Err(GameError::ChipOverflow)
    );
    assert_eq!(GameState::all_ai(4, u32::MAX / 3), Err(GameError::ChipOverflow));

    let gs = GameState::with_ai_opponents(1, u32::MAX / 2).unwrap();
    assert_eq!(gs.total_chips(), Some(u32::MAX - 1));
}

#[test]
fn largest_table_plays_an_all_in_without_overflow() {
    let stack = u32::MAX / 2;
    let mut gs = GameState::with_ai_opponents(1, stack).unwrap();
    gs.new_hand(&mut Deck::new_with_seed(24)).unwrap();
    gs.apply_action(0, A::Raise(stack)).unwrap();
    gs.apply_action(1, A::Call).unwrap();
    assert_eq!(gs.pot(), stack * 2);
    assert_invariants(&gs, stack * 2);
}

#[test]
fn balance_override_cannot_overflow_the_table() {
    let mut gs = GameState::facilitated(2, 1000).unwrap();
    assert_eq!(gs.set_balance(1, u32::MAX), Err(GameError::ChipOverflow));
    assert_eq!(gs.players()[1].balance(), 1000);
    gs.set_balance(1, u32::MAX - 1000).unwrap();
    assert_eq!(gs.total_chips(), Some(u32::MAX));
}
