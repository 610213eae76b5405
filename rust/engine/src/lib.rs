//! # holdem-engine: Texas Hold'em Hand Simulator Core
//!
//! Simulates a multi-player Texas Hold'em hand end-to-end: dealing, staged
//! betting across four streets, and showdown resolution, with reproducible
//! seeded shuffling.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Multi-deck shoe with deterministic ChaCha20 shuffling
//! - [`dealer`] - Hole-card and community dealing with burn cards
//! - [`hand`] - Hand evaluation: total-ordered ranking and winner selection
//! - [`table`] - Pot and per-street bet bookkeeping
//! - [`game`] - The round state machine: positions, blinds, betting, showdown
//! - [`player`] - Seat state: stack, street bet, hole cards, position
//! - [`rules`] - Action validation against stack and call requirements
//! - [`strategy`] - The decision contract seats are driven through
//! - [`errors`] - Error types for configuration and betting violations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::hand::evaluate_hand;
//!
//! // Rank a 7-card hand
//! let cards = [
//!     Card { rank: Rank::Ace, suit: Suit::Hearts },
//!     Card { rank: Rank::King, suit: Suit::Hearts },
//!     Card { rank: Rank::Queen, suit: Suit::Hearts },
//!     Card { rank: Rank::Jack, suit: Suit::Hearts },
//!     Card { rank: Rank::Ten, suit: Suit::Hearts },
//!     Card { rank: Rank::Two, suit: Suit::Clubs },
//!     Card { rank: Rank::Three, suit: Suit::Diamonds },
//! ];
//!
//! let rank = evaluate_hand(&cards).unwrap();
//! println!("Hand category: {:?}", rank.category);
//! ```
//!
//! ## Playing a Hand
//!
//! A [`game::Game`] owns the seats and drives one hand at a time through a
//! [`strategy::Strategy`] per seat:
//!
//! ```rust
//! use holdem_engine::game::Game;
//! use holdem_engine::player::Seat;
//! use holdem_engine::strategy::{DecisionView, SeatAction, Strategy};
//!
//! struct CallBot;
//!
//! impl Strategy for CallBot {
//!     fn decide(&mut self, view: &DecisionView<'_>) -> SeatAction {
//!         if view.call_amount == 0 { SeatAction::Check } else { SeatAction::Call }
//!     }
//!     fn name(&self) -> &str {
//!         "CallBot"
//!     }
//! }
//!
//! let seats = vec![Seat::new("Alice", 1000), Seat::new("Bob", 1000)];
//! let strategies: Vec<Box<dyn Strategy>> = vec![Box::new(CallBot), Box::new(CallBot)];
//! let mut game = Game::with_seed(seats, strategies, 1, 42).unwrap();
//! let outcome = game.play_hand().unwrap();
//! assert!(!outcome.winners.is_empty());
//! ```
//!
//! ## Logging
//!
//! Progress (positions, blinds, street transitions, showdown results) is
//! emitted as `tracing` events; install a subscriber to see them. Logging is
//! a side channel only and never part of the state machine's control flow.

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod rules;
pub mod strategy;
pub mod table;
