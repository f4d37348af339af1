//! # holdem-engine: Texas Hold'em Rules Engine
//!
//! Tracks a table of players through one hand of no-limit Texas Hold'em:
//! dealing from a shared deck, validating and applying betting actions,
//! advancing streets and paying out the pot at showdown. Every piece of
//! randomness comes from a caller-supplied RNG so hands replay exactly.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Deck construction, seeded RNG and shuffling
//! - [`hand`] - Five-card scoring and best-hand search
//! - [`player`] - Seats, per-hand player state and actions
//! - [`config`] - Blinds and table settings
//! - [`game`] - `GameState` construction and queries
//! - [`engine`] - Action application and the street state machine
//! - [`rules`] - Action validation and legal action sets
//! - [`pot`] - Showdown and pot distribution
//! - [`logger`] - Hand history records and JSONL output
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::config::{DealerChoice, TableConfig};
//! use holdem_engine::deck::seeded_rng;
//! use holdem_engine::engine::apply_action;
//! use holdem_engine::game::{GameState, Phase};
//! use holdem_engine::player::{PlayerAction, Seat};
//!
//! let seats = vec![
//!     Seat::new(1, "alice", 1000, 0),
//!     Seat::new(2, "bob", 1000, 1),
//!     Seat::new(3, "carol", 1000, 2),
//! ];
//! let mut rng = seeded_rng(42);
//! let mut state =
//!     GameState::new_hand(&seats, &TableConfig::default(), DealerChoice::Fixed(0), &mut rng)
//!         .unwrap();
//!
//! // everyone folds to the big blind
//! state = apply_action(state, PlayerAction::Fold);
//! state = apply_action(state, PlayerAction::Fold);
//!
//! assert_eq!(state.phase, Phase::Showdown);
//! assert_eq!(state.players[2].chips, 1010);
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{find_best_hand, HandRank};
//!
//! let hole = parse_cards("Ah Kh").unwrap();
//! let board = parse_cards("Qh Jh 10h 2c 3d").unwrap();
//! let best = find_best_hand(&hole, &board).unwrap();
//! assert_eq!(best.rank, HandRank::RoyalFlush);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
