//! # simple-poker-engine: Four-Card Showdown Core
//!
//! A deterministic core for a two-player (player vs. computer) simplified poker
//! game played with a 32-card deck (Seven through Ace). Each side receives four
//! cards; hands are ranked only by matching ranks (pairs, two pair, trips, quads)
//! and the better hand wins.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Fisher–Yates shuffling with seeded ChaCha20 RNG and dealing
//! - [`hand`] - Four-card hand evaluation
//! - [`verdict`] - Winner arbitration and verdict messages
//! - [`round`] - Round state and its reducer
//! - [`logger`] - RoundRecord JSON serialization
//! - [`errors`] - Error types for unchecked input
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_poker_engine::cards::{Card, Rank, Suit};
//! use simple_poker_engine::hand::{evaluate, Category, Hand};
//!
//! let hand = Hand::new([
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Diamonds),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Clubs),
//! ]);
//!
//! let eval = evaluate(&hand);
//! assert_eq!(eval.category, Category::TwoPair);
//! assert_eq!(eval.tie_break, 13);
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use simple_poker_engine::round::{RoundEvent, RoundPhase, RoundState};
//!
//! let mut state = RoundState::new().reduce(RoundEvent::DealRequested { seed: 42 });
//! while state.needs_tick() {
//!     state = state.reduce(RoundEvent::RevealTick);
//! }
//! assert_eq!(state.phase(), RoundPhase::Resolved);
//! assert!(state.verdict().is_some());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod round;
pub mod verdict;
