use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Most seats a single deck supports comfortably (2 * 10 + 5 = 25 cards).
pub const MAX_SEATS: usize = 10;

/// Forced bets posted before the cards are seen.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Blinds {
    pub fn new(small: u32, big: u32) -> Self {
        Self { small, big }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.small == 0 {
            return Err(GameError::InvalidConfig("small blind must be > 0".into()));
        }
        if self.big < self.small {
            return Err(GameError::InvalidConfig(format!(
                "big blind {} is below small blind {}",
                self.big, self.small
            )));
        }
        Ok(())
    }
}

impl Default for Blinds {
    fn default() -> Self {
        Self { small: 10, big: 20 }
    }
}

/// Per-table settings handed to the engine at construction time.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct TableConfig {
    pub blinds: Blinds,
}

impl TableConfig {
    pub fn new(blinds: Blinds) -> Self {
        Self { blinds }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.blinds.validate()
    }
}

/// How the dealer button is placed for a new hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum DealerChoice {
    /// Uniformly among seats that have chips
    Random,
    /// A specific seat index
    Fixed(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinds_must_be_positive_and_ordered() {
        assert!(Blinds::new(10, 20).validate().is_ok());
        assert!(Blinds::new(10, 10).validate().is_ok());
        assert!(matches!(
            Blinds::new(0, 20).validate(),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            Blinds::new(20, 10).validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
