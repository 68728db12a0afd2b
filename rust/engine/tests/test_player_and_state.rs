use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::game::GameState;
use holdem_engine::player::{Controller, Player, PlayerAction, STARTING_BALANCE};

#[test]
fn players_start_with_the_default_balance() {
    let gs = GameState::with_ai_opponents(5, STARTING_BALANCE).unwrap();
    assert_eq!(gs.players().len(), 6);
    assert!(gs.players().iter().all(|p| p.balance() == 1_000));
    assert_eq!(gs.players()[0].name(), "You");
    assert!(!gs.players()[0].is_ai());
    assert_eq!(gs.players()[3].name(), "AI Player 3");
    assert!(gs.players()[3].is_ai());
}

#[test]
fn player_receives_two_hole_cards() {
    let mut p = Player::new(0, "Ann", STARTING_BALANCE, Controller::Human);
    let a = Card {
        suit: Suit::Spades,
        rank: Rank::Ace,
    };
    let k = Card {
        suit: Suit::Spades,
        rank: Rank::King,
    };
    assert!(!p.has_cards());
    p.give_cards(a, k);
    assert_eq!(p.hole_cards(), [Some(a), Some(k)]);
    assert!(p.has_cards());

    p.set_hole_card(1, None);
    assert!(!p.has_cards());
    p.clear_cards();
    assert_eq!(p.hole_cards(), [None, None]);
}

#[test]
fn seat_ids_must_follow_seat_order() {
    let players = vec![
        Player::new(1, "A", 100, Controller::Human),
        Player::new(0, "B", 100, Controller::Human),
    ];
    assert!(GameState::new(players, 100).is_err());
}

#[test]
fn last_action_and_value_are_recorded() {
    let mut gs = GameState::with_ai_opponents(1, 1000).unwrap();
    gs.apply_action(0, PlayerAction::Raise(75)).unwrap();
    gs.apply_action(1, PlayerAction::Call).unwrap();
    let p0 = &gs.players()[0];
    assert_eq!(p0.last_action(), Some(PlayerAction::Raise(75)));
    assert_eq!(p0.action_value(), 75);
    let p1 = &gs.players()[1];
    assert_eq!(p1.last_action(), Some(PlayerAction::Call));
    assert_eq!(p1.action_value(), 75);
    assert_eq!(p1.balance(), 925);
}

#[test]
fn game_state_survives_a_json_round_trip() {
    let mut gs = GameState::with_ai_opponents(2, 1000).unwrap();
    gs.new_hand(&mut holdem_engine::deck::Deck::new_with_seed(8))
        .unwrap();
    gs.apply_action(1, PlayerAction::Raise(30)).unwrap();
    let json = gs.to_json().unwrap();
    let restored = GameState::from_json(&json).unwrap();
    assert_eq!(restored, gs);
    assert!(GameState::from_json("{\"players\": 3}").is_err());
}
