use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{all_ranks, all_suits, Card};
use crate::errors::GameError;

/// Retry ceiling for a single unique draw.
pub const MAX_DRAW_ATTEMPTS: u32 = 1_000;

pub const DECK_SIZE: usize = 52;

/// Draw tracker for one deal: samples random cards and remembers what was issued
/// so no card appears twice within a hand.
#[derive(Debug)]
pub struct Deck {
    issued: HashSet<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            issued: HashSet::with_capacity(DECK_SIZE),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draws a card that has not been issued in this deal.
    ///
    /// # Errors
    ///
    /// [`GameError::ExhaustedDeck`] when every card is already issued or the retry
    /// ceiling is hit.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.issued.len() >= DECK_SIZE {
            return Err(GameError::ExhaustedDeck { attempts: 0 });
        }
        let suits = all_suits();
        let ranks = all_ranks();
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let card = Card {
                suit: suits[self.rng.random_range(0..suits.len())],
                rank: ranks[self.rng.random_range(0..ranks.len())],
            };
            if self.issued.insert(card) {
                return Ok(card);
            }
        }
        Err(GameError::ExhaustedDeck {
            attempts: MAX_DRAW_ATTEMPTS,
        })
    }

    /// Deals `n` unique cards, refusing up front when the deal cannot fit in the deck.
    pub fn deal_hand(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.remaining() {
            return Err(GameError::TooManyCards {
                requested: n,
                available: self.remaining(),
            });
        }
        (0..n).map(|_| self.draw()).collect()
    }

    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    pub fn reset(&mut self) {
        self.issued.clear();
    }

    pub fn remaining(&self) -> usize {
        DECK_SIZE.saturating_sub(self.issued.len())
    }
}
