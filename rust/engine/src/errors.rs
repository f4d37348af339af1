use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid action: {reason}")]
    InvalidAction { reason: String },
    #[error("Hand evaluation needs {needed} cards, only {available} available")]
    InsufficientCards { needed: usize, available: usize },
    #[error("Too many cards: at most {max}, got {got}")]
    TooManyCards { max: usize, got: usize },
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Not enough players with chips: need {needed}, have {funded}")]
    NotEnoughPlayers { needed: usize, funded: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand still in progress")]
    HandInProgress,
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),
}

impl GameError {
    pub(crate) fn invalid_action(reason: impl Into<String>) -> Self {
        GameError::InvalidAction {
            reason: reason.into(),
        }
    }
}
