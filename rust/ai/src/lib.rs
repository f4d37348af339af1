//! # holdem-ai: Bot Opponents for Texas Hold'em
//!
//! Heuristic bots that pick actions from hand strength, draw potential,
//! table position and pot odds, scaled by a [`Difficulty`].
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait implemented by every bot
//! - [`PolicyAI`] - The heuristic bot
//! - [`create_ai`] - Factory building a bot from its name
//! - [`driver::play_out_hand`] - Plays a hand to completion with bots only
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::{create_ai, AIOpponent};
//! use holdem_engine::config::{DealerChoice, TableConfig};
//! use holdem_engine::deck::seeded_rng;
//! use holdem_engine::game::GameState;
//! use holdem_engine::player::Seat;
//!
//! let seats = [Seat::new(1, "bot-1", 1000, 0), Seat::new(2, "bot-2", 1000, 1)];
//! let mut rng = seeded_rng(42);
//! let state = GameState::new_hand(&seats, &TableConfig::default(), DealerChoice::Fixed(0), &mut rng)
//!     .unwrap();
//!
//! let ai = create_ai("hard").unwrap();
//! let actor = state.active_player().unwrap().id;
//! let action = ai.decide(actor, &state, &mut rng).unwrap();
//! assert!(state.legal_actions().unwrap().allows(action));
//! ```

use holdem_engine::errors::GameError;
use holdem_engine::game::GameState;
use holdem_engine::player::{PlayerAction, PlayerId};
use rand::RngCore;

pub mod difficulty;
pub mod driver;
pub mod policy;
pub mod position;
pub mod strength;

pub use difficulty::Difficulty;

/// Interface shared by all bots.
///
/// ```rust
/// use holdem_ai::AIOpponent;
/// use holdem_engine::errors::GameError;
/// use holdem_engine::game::GameState;
/// use holdem_engine::player::{PlayerAction, PlayerId};
/// use rand::RngCore;
///
/// struct CallingStation;
///
/// impl AIOpponent for CallingStation {
///     fn decide(
///         &self,
///         _player_id: PlayerId,
///         _state: &GameState,
///         _rng: &mut dyn RngCore,
///     ) -> Result<PlayerAction, GameError> {
///         Ok(PlayerAction::Call)
///     }
///
///     fn name(&self) -> &str {
///         "CallingStation"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Picks the next action for `player_id`, drawing any randomness from `rng`.
    fn decide(
        &self,
        player_id: PlayerId,
        state: &GameState,
        rng: &mut dyn RngCore,
    ) -> Result<PlayerAction, GameError>;

    fn name(&self) -> &str;
}

/// Bot following the heuristic policy in [`policy::decide`].
#[derive(Debug, Clone)]
pub struct PolicyAI {
    difficulty: Difficulty,
    name: String,
}

impl PolicyAI {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            name: format!("PolicyAI({difficulty})"),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Default for PolicyAI {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl AIOpponent for PolicyAI {
    fn decide(
        &self,
        player_id: PlayerId,
        state: &GameState,
        rng: &mut dyn RngCore,
    ) -> Result<PlayerAction, GameError> {
        let player = state
            .player(player_id)
            .ok_or(GameError::PlayerNotFound(player_id))?;
        policy::decide(player, state, self.difficulty, rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Builds a bot by name: a difficulty (`easy`, `medium`, `hard`, `pro`),
/// optionally prefixed with `policy:`.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// assert_eq!(create_ai("pro").unwrap().name(), "PolicyAI(pro)");
/// assert_eq!(create_ai("policy:easy").unwrap().name(), "PolicyAI(easy)");
/// assert!(create_ai("baseline").is_err());
/// ```
pub fn create_ai(kind: &str) -> Result<Box<dyn AIOpponent>, GameError> {
    let level = kind.strip_prefix("policy:").unwrap_or(kind);
    let difficulty: Difficulty = level.parse()?;
    Ok(Box::new(PolicyAI::new(difficulty)))
}
