//! # holdem-engine: Texas Hold'em Table Core
//!
//! Betting-round state machine and seven-card hand evaluator for a single-pot
//! Texas Hold'em table. Hands open on the flop; play moves through turn and river
//! to a showdown, or ends early when a single player is left.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Duplicate-free card draws with a seeded ChaCha20 RNG
//! - [`hand`] - Best-of-21 hand evaluation and the kicker extension
//! - [`player`] - Player state, actions, and commands
//! - [`rules`] - Action validation against the current street
//! - [`game`] - `GameState`: pot, current bet, acted set, street advancement, showdown
//! - [`facilitator`] - Manual recording for a dealer-run physical table
//! - [`snapshot`] - Read-only table view for front ends
//! - [`logger`] - Streets, action records and JSONL hand history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! let cards = [
//!     Card { suit: Suit::Spades, rank: Rank::Ace },
//!     Card { suit: Suit::Spades, rank: Rank::King },
//!     Card { suit: Suit::Spades, rank: Rank::Queen },
//!     Card { suit: Suit::Spades, rank: Rank::Jack },
//!     Card { suit: Suit::Spades, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let strength = evaluate_hand(&cards);
//! assert_eq!(strength.category, Category::RoyalFlush);
//! ```
//!
//! ## Playing a Street
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//! use holdem_engine::game::{GameState, RoundProgress};
//! use holdem_engine::logger::Street;
//! use holdem_engine::player::PlayerAction;
//!
//! let mut table = GameState::with_ai_opponents(1, 1000).unwrap();
//! table.new_hand(&mut Deck::new_with_seed(7)).unwrap();
//!
//! table.apply_action(0, PlayerAction::Raise(50)).unwrap();
//! table.apply_action(1, PlayerAction::Call).unwrap();
//! assert_eq!(table.pot(), 100);
//! assert_eq!(table.check_round_complete().unwrap(), RoundProgress::Advanced(Street::Turn));
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod facilitator;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod snapshot;
