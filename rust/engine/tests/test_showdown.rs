use holdem_engine::cards::Card;
use holdem_engine::errors::GameError;
use holdem_engine::game::GameState;
use holdem_engine::hand::TieBreak;
use holdem_engine::logger::Street;
use holdem_engine::player::PlayerAction as A;

fn c(s: &str) -> Card {
    s.parse().expect("valid card")
}

/// Seat 0 holds a pair of threes, seat 1 a pair of aces, on a board that pairs neither.
fn pairs_table(n: usize, tie_break: TieBreak) -> GameState {
    let mut gs = GameState::facilitated(n, 1000).unwrap().with_tie_break(tie_break);
    for (slot, card) in ["2c", "7d", "9h", "Jc", "Ks"].iter().enumerate() {
        gs.set_community_card(slot, Some(c(card))).unwrap();
    }
    let holes = [["3h", "3d"], ["Ah", "Ad"], ["4s", "5s"]];
    for (id, hole) in holes.iter().enumerate().take(n) {
        gs.assign_hole_card(id, 0, Some(c(hole[0]))).unwrap();
        gs.assign_hole_card(id, 1, Some(c(hole[1]))).unwrap();
    }
    gs
}

#[test]
fn equal_categories_go_to_the_first_seat() {
    let mut gs = pairs_table(2, TieBreak::CategoryOnly);
    let award = gs.showdown().unwrap();
    assert_eq!(award.winner, 0);
    assert_eq!(award.hand, "One Pair");
    assert_eq!(gs.street(), Street::Showdown);
}

#[test]
fn kicker_mode_awards_the_higher_pair() {
    let mut gs = pairs_table(2, TieBreak::Kickers);
    let award = gs.showdown().unwrap();
    assert_eq!(award.winner, 1);
    assert_eq!(award.hand, "One Pair");
}

#[test]
fn folded_players_are_not_evaluated() {
    let mut gs = pairs_table(3, TieBreak::Kickers);
    gs.apply_action(1, A::Fold).unwrap();
    let award = gs.showdown().unwrap();
    assert_eq!(award.winner, 0);
}

#[test]
fn higher_category_beats_seat_order() {
    let mut gs = pairs_table(2, TieBreak::CategoryOnly);
    // seat 1 now makes three aces
    gs.set_community_card(4, Some(c("Ac"))).unwrap();
    let award = gs.showdown().unwrap();
    assert_eq!(award.winner, 1);
    assert_eq!(award.hand, "Three of a Kind");
}

#[test]
fn incomplete_hands_sit_out_the_showdown() {
    let mut gs = pairs_table(2, TieBreak::CategoryOnly);
    gs.assign_hole_card(0, 1, None).unwrap();
    let award = gs.showdown().unwrap();
    assert_eq!(award.winner, 1, "seat 0 lacks a card and cannot win");
}

#[test]
fn no_rankable_hand_leaves_the_pot_in_place() {
    let mut gs = GameState::facilitated(3, 1000).unwrap();
    gs.apply_action(0, A::Raise(40)).unwrap();
    assert_eq!(gs.showdown(), Err(GameError::NoRankableHand));
    assert_eq!(gs.pot(), 40);
    assert!(gs.winner().is_none());

    let award = gs.set_winner(2, "Split by agreement").unwrap();
    assert_eq!(award.amount, 40);
    assert_eq!(gs.players()[2].balance(), 1040);
}
