use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{compare_ranked, evaluate, evaluate_ranked, Category, RankedHand, TieBreak};
use crate::logger::{ActionRecord, HandRecord, Street};
use crate::player::{Controller, Player, PlayerAction, PlayerId};
use crate::rules::{validate_action, ValidatedAction};

/// Label recorded when everyone else folded.
pub const LAST_PLAYER_STANDING: &str = "Last Player Standing";

/// Pot payout at the end of a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub winner: PlayerId,
    pub hand: String,
    pub amount: u32,
}

/// Result of a successfully applied action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Betting continues on this street
    Continue,
    /// Only one player remains; the pot was awarded
    HandOver(Award),
}

/// Result of a round-completion check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundProgress {
    /// Someone still has to act or match the current bet
    Pending,
    /// The next street was revealed and betting state reset
    Advanced(Street),
    /// The hand ended, by showdown or last player standing
    Finished(Award),
}

/// Table state for one hand: players, community cards, pot, and the betting round.
///
/// Mutated only through [`GameState::apply_action`], [`GameState::check_round_complete`],
/// [`GameState::new_hand`], and the facilitation operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: Vec<Player>,
    pub(crate) community: [Option<Card>; 5],
    /// Reveal flags for flop, turn, river
    pub(crate) revealed: [bool; 3],
    pub(crate) street: Street,
    pub(crate) pot: u32,
    pub(crate) current_bet: u32,
    /// Seats that acted on this street since the last raise
    pub(crate) acted: Vec<PlayerId>,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) winning_hand: Option<String>,
    pub(crate) current_turn: Option<PlayerId>,
    pub(crate) starting_balance: u32,
    pub(crate) tie_break: TieBreak,
    pub(crate) actions: Vec<ActionRecord>,
    /// Chips paid out by the last award of this hand
    pub(crate) awarded: u32,
}

impl GameState {
    /// Creates a table with the given players seated in order. Player ids must match
    /// their seat index. No cards are dealt.
    ///
    /// Every chip on the table has to fit in the pot, so both the seated balances and a
    /// full restore to `starting_balance` must sum to at most `u32::MAX`.
    pub fn new(players: Vec<Player>, starting_balance: u32) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::InvalidConfiguration(
                "at least two players are required".into(),
            ));
        }
        if players.iter().enumerate().any(|(seat, p)| p.id() != seat) {
            return Err(GameError::InvalidConfiguration(
                "player ids must match seat order".into(),
            ));
        }
        let seated = players
            .iter()
            .try_fold(0u32, |total, p| total.checked_add(p.balance()));
        let restored = u32::try_from(players.len())
            .ok()
            .and_then(|n| n.checked_mul(starting_balance));
        if seated.is_none() || restored.is_none() {
            return Err(GameError::ChipOverflow);
        }
        Ok(Self {
            players,
            community: [None; 5],
            revealed: [false; 3],
            street: Street::Flop,
            pot: 0,
            current_bet: 0,
            acted: Vec::new(),
            winner: None,
            winning_hand: None,
            current_turn: None,
            starting_balance,
            tie_break: TieBreak::default(),
            actions: Vec::new(),
            awarded: 0,
        })
    }

    /// One human in seat 0 ("You") against `ai_players` automated opponents.
    pub fn with_ai_opponents(ai_players: usize, starting_balance: u32) -> Result<Self, GameError> {
        let mut players = vec![Player::new(0, "You", starting_balance, Controller::Human)];
        players.extend((1..=ai_players).map(|seat| {
            Player::new(seat, format!("AI Player {}", seat), starting_balance, Controller::Ai)
        }));
        Self::new(players, starting_balance)
    }

    /// A table where every seat is automated.
    pub fn all_ai(players: usize, starting_balance: u32) -> Result<Self, GameError> {
        let seats = (0..players)
            .map(|seat| {
                let name = format!("AI Player {}", seat + 1);
                Player::new(seat, name, starting_balance, Controller::Ai)
            })
            .collect();
        Self::new(seats, starting_balance)
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn acted(&self) -> &[PlayerId] {
        &self.acted
    }
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }
    pub fn winning_hand(&self) -> Option<&str> {
        self.winning_hand.as_deref()
    }
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
    pub fn starting_balance(&self) -> u32 {
        self.starting_balance
    }
    pub fn community_cards(&self) -> [Option<Card>; 5] {
        self.community
    }
    pub fn action_log(&self) -> &[ActionRecord] {
        &self.actions
    }

    /// Chips in play: every balance plus the pot. `None` if the sum overflows.
    pub fn total_chips(&self) -> Option<u32> {
        self.players
            .iter()
            .try_fold(self.pot, |total, p| total.checked_add(p.balance()))
    }

    pub fn is_hand_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether the community slot at `index` (0..5) is visible.
    pub fn is_slot_revealed(&self, index: usize) -> bool {
        match index {
            0..=2 => self.revealed[0],
            3 => self.revealed[1],
            4 => self.revealed[2],
            _ => false,
        }
    }

    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_folded())
    }

    pub fn has_acted(&self, id: PlayerId) -> bool {
        self.acted.contains(&id)
    }

    /// Acted on this street and matched the current bet.
    pub fn is_settled(&self, id: PlayerId) -> bool {
        self.player(id)
            .is_some_and(|p| self.has_acted(id) && p.current_round_bet() == self.current_bet)
    }

    /// A non-folded player facing a bet they have not answered since the last raise.
    pub fn owes_action(&self, id: PlayerId) -> bool {
        self.player(id).is_some_and(|p| {
            !p.is_folded() && p.current_round_bet() < self.current_bet && !self.has_acted(id)
        })
    }

    /// Starts a new hand: resets table state, deals two hole cards to every player with
    /// chips and all five community cards, and reveals the flop.
    ///
    /// When at most one player still has chips, every balance is restored to the
    /// starting balance first. Otherwise balances carry over and broke players sit out.
    ///
    /// # Errors
    ///
    /// [`GameError::TooManyCards`] or [`GameError::ExhaustedDeck`] if the deal does not
    /// fit the deck; the table is left untouched in that case.
    pub fn new_hand(&mut self, deck: &mut Deck) -> Result<(), GameError> {
        let hard_reset = self.players.iter().filter(|p| p.balance() > 0).count() <= 1;
        let balance_of = |p: &Player| {
            if hard_reset {
                self.starting_balance
            } else {
                p.balance()
            }
        };
        let seated: Vec<bool> = self.players.iter().map(|p| balance_of(p) > 0).collect();
        let hole_count = seated.iter().filter(|&&s| s).count();

        deck.reset();
        let mut cards = deck.deal_hand(hole_count * 2 + 5)?.into_iter();

        if hard_reset {
            tracing::info!(
                starting_balance = self.starting_balance,
                "restoring all balances"
            );
        }
        for (player, &in_hand) in self.players.iter_mut().zip(seated.iter()) {
            if hard_reset {
                player.set_balance(self.starting_balance);
            }
            player.reset_hand();
            if in_hand {
                if let (Some(a), Some(b)) = (cards.next(), cards.next()) {
                    player.give_cards(a, b);
                }
                player.set_cards_revealed(player.controller() == Controller::Human);
            } else {
                tracing::debug!(player_id = player.id(), "sitting out with zero balance");
                player.sit_out();
            }
        }
        for slot in self.community.iter_mut() {
            *slot = cards.next();
        }

        self.revealed = [true, false, false];
        self.street = Street::Flop;
        self.pot = 0;
        self.current_bet = 0;
        self.acted.clear();
        self.winner = None;
        self.winning_hand = None;
        self.actions.clear();
        self.awarded = 0;
        let first = self.active_players().next().map(Player::id);
        self.current_turn = first;
        tracing::info!(players = hole_count, "new hand dealt");
        Ok(())
    }

    /// Applies one player's action to the current street.
    ///
    /// Rejected actions leave the state untouched. A raise reopens betting: the acted set
    /// is cleared so every other active player must respond, then the raiser is recorded.
    /// If the action leaves a single active player, the pot is awarded immediately.
    pub fn apply_action(
        &mut self,
        player_id: PlayerId,
        action: PlayerAction,
    ) -> Result<ActionOutcome, GameError> {
        if self.is_hand_over() {
            return Err(GameError::HandAlreadyComplete);
        }
        let player = self
            .players
            .get(player_id)
            .ok_or(GameError::UnknownPlayer(player_id))?;
        if player.is_folded() {
            return Err(GameError::PlayerAlreadyFolded);
        }
        let validated = validate_action(
            player.balance(),
            player.current_round_bet(),
            self.current_bet,
            action,
        )
        .inspect_err(|e| {
            tracing::debug!(player_id, action = ?action, error = %e, "action rejected");
        })?;

        let player = &mut self.players[player_id];
        match validated {
            ValidatedAction::Fold => player.fold(),
            ValidatedAction::Check => {}
            ValidatedAction::Call { delta } => {
                player.commit(delta);
                self.pot += delta;
            }
            ValidatedAction::Raise { to, delta } => {
                player.commit(delta);
                self.pot += delta;
                self.current_bet = to;
                self.acted.clear();
            }
        }
        player.record_action(action, validated.chips());
        if !self.acted.contains(&player_id) {
            self.acted.push(player_id);
        }
        self.actions.push(ActionRecord {
            player_id,
            street: self.street,
            action,
        });
        tracing::debug!(
            player_id,
            action = ?action,
            pot = self.pot,
            current_bet = self.current_bet,
            "action applied"
        );

        Ok(match self.last_player_standing() {
            Some(award) => ActionOutcome::HandOver(award),
            None => ActionOutcome::Continue,
        })
    }

    /// Whether every active player has acted and matched the current bet.
    pub fn is_round_complete(&self) -> bool {
        self.active_players()
            .all(|p| self.has_acted(p.id()) && p.current_round_bet() == self.current_bet)
    }

    /// Advances the hand when the betting round is complete.
    ///
    /// Flop and turn advance to the next street with betting state reset; the river
    /// goes to showdown. Calling this again without new actions is a no-op.
    pub fn check_round_complete(&mut self) -> Result<RoundProgress, GameError> {
        if self.is_hand_over() {
            return Ok(RoundProgress::Pending);
        }
        if let Some(award) = self.last_player_standing() {
            return Ok(RoundProgress::Finished(award));
        }
        if !self.is_round_complete() {
            return Ok(RoundProgress::Pending);
        }
        match self.street {
            Street::Flop | Street::Turn => {
                self.street = self.street.next();
                let flag = if self.street == Street::Turn { 1 } else { 2 };
                self.revealed[flag] = true;
                for p in self.players.iter_mut() {
                    p.reset_street();
                }
                self.acted.clear();
                self.current_bet = 0;
                tracing::info!(street = self.street.as_str(), pot = self.pot, "street advanced");
                Ok(RoundProgress::Advanced(self.street))
            }
            Street::River | Street::Showdown => self.showdown().map(RoundProgress::Finished),
        }
    }

    /// Evaluates every active player holding seven resolvable cards and awards the pot to
    /// the best hand. Under [`TieBreak::CategoryOnly`] the first player evaluated keeps
    /// a tie.
    ///
    /// # Errors
    ///
    /// [`GameError::NoRankableHand`] when nobody has a complete hand; the pot stays on
    /// the table for manual settlement.
    pub fn showdown(&mut self) -> Result<Award, GameError> {
        if self.is_hand_over() {
            return Err(GameError::HandAlreadyComplete);
        }
        self.street = Street::Showdown;
        self.revealed = [true; 3];
        for p in self.players.iter_mut().filter(|p| !p.is_folded()) {
            p.set_cards_revealed(true);
        }

        let mut best: Option<(PlayerId, Category, Option<RankedHand>)> = None;
        for p in self.active_players() {
            let hole = p.hole_cards();
            let cards = [
                hole[0],
                hole[1],
                self.community[0],
                self.community[1],
                self.community[2],
                self.community[3],
                self.community[4],
            ];
            let strength = evaluate(&cards);
            if !strength.is_rankable() {
                tracing::debug!(player_id = p.id(), "excluded from showdown: incomplete hand");
                continue;
            }
            let better = match (&best, self.tie_break) {
                (None, _) => true,
                (Some((_, cat, _)), TieBreak::CategoryOnly) => strength.category > *cat,
                (Some((_, _, ranked)), TieBreak::Kickers) => {
                    match (evaluate_ranked(&cards), ranked) {
                        (Some(mine), Some(theirs)) => compare_ranked(&mine, theirs).is_gt(),
                        _ => false,
                    }
                }
            };
            if better {
                let ranked = match self.tie_break {
                    TieBreak::Kickers => evaluate_ranked(&cards),
                    TieBreak::CategoryOnly => None,
                };
                best = Some((p.id(), strength.category, ranked));
            }
        }

        let (winner, category, _) = best.ok_or(GameError::NoRankableHand)?;
        Ok(self.award(winner, category.label()))
    }

    fn last_player_standing(&mut self) -> Option<Award> {
        let only = {
            let mut active = self.active_players();
            let only = active.next()?.id();
            if active.next().is_some() {
                return None;
            }
            only
        };
        Some(self.award(only, LAST_PLAYER_STANDING))
    }

    pub(crate) fn award(&mut self, winner: PlayerId, hand: &str) -> Award {
        let amount = self.pot;
        if let Some(p) = self.players.get_mut(winner) {
            p.add_chips(amount);
        }
        for p in self.players.iter_mut() {
            p.set_cards_revealed(true);
        }
        self.pot = 0;
        self.awarded = amount;
        self.winner = Some(winner);
        self.winning_hand = Some(hand.to_string());
        tracing::info!(winner, hand, amount, "pot awarded");
        Award {
            winner,
            hand: hand.to_string(),
            amount,
        }
    }

    /// Builds a hand-history record for the hand as played so far.
    pub fn hand_record(&self, hand_id: String, seed: Option<u64>) -> HandRecord {
        HandRecord {
            hand_id,
            seed,
            actions: self.actions.clone(),
            board: self.community.iter().flatten().copied().collect(),
            winner: self.winner,
            winning_hand: self.winning_hand.clone(),
            pot: self.awarded,
            ts: None,
        }
    }
}
