use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Stable identifier of a player for the lifetime of a table.
pub type PlayerId = u32;

/// Represents a player action during a betting round.
/// `Raise` carries the new total bet for the round, not the increment.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "amount", rename_all = "lowercase")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid if nothing is owed)
    Check,
    /// Match the current bet
    Call,
    /// Raise the round's bet to the given total
    Raise(u32),
}

/// Roster entry supplied by the caller when a hand is constructed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
    pub chips: u32,
    /// Seat index, 0..N-1, unique at the table.
    pub seat: usize,
}

impl Seat {
    pub fn new(id: PlayerId, name: impl Into<String>, chips: u32, seat: usize) -> Self {
        Self {
            id,
            name: name.into(),
            chips,
            seat,
        }
    }
}

/// A player's state within one hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Chips behind, never negative
    pub chips: u32,
    /// Seat index (equals the index in `GameState::players`)
    pub position: usize,
    /// Hole cards, empty for seats sitting the hand out
    pub cards: Vec<Card>,
    /// Chips committed in the current betting round
    pub bet: u32,
    /// Chips committed over the whole hand
    pub committed: u32,
    /// Still contesting the pot
    pub is_active: bool,
    pub is_turn: bool,
    pub is_dealer: bool,
    /// Has acted since the last raise in this round
    pub has_acted: bool,
}

impl Player {
    pub(crate) fn from_seat(seat: &Seat) -> Self {
        Self {
            id: seat.id,
            name: seat.name.clone(),
            chips: seat.chips,
            position: seat.seat,
            cards: Vec::with_capacity(2),
            bet: 0,
            committed: 0,
            is_active: seat.chips > 0,
            is_turn: false,
            is_dealer: false,
            has_acted: false,
        }
    }

    /// Active and with chips left to bet.
    pub fn can_act(&self) -> bool {
        self.is_active && self.chips > 0
    }

    pub fn is_all_in(&self) -> bool {
        self.is_active && self.chips == 0
    }

    /// Moves up to `amount` from the stack into the current bet.
    /// Returns what was actually paid; a short stack goes all-in.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.bet += paid;
        self.committed += paid;
        paid
    }

    pub fn to_seat(&self) -> Seat {
        Seat::new(self.id, self.name.clone(), self.chips, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_caps_at_stack() {
        let mut p = Player::from_seat(&Seat::new(1, "a", 50, 0));
        assert_eq!(p.commit(80), 50);
        assert_eq!(p.chips, 0);
        assert_eq!(p.bet, 50);
        assert_eq!(p.committed, 50);
        assert!(p.is_all_in());
        assert!(!p.can_act());
    }

    #[test]
    fn busted_seat_starts_inactive() {
        let p = Player::from_seat(&Seat::new(2, "b", 0, 1));
        assert!(!p.is_active);
        assert!(!p.is_all_in());
    }

    #[test]
    fn action_serializes_with_tag() {
        let json = serde_json::to_string(&PlayerAction::Raise(60)).unwrap();
        assert_eq!(json, r#"{"action":"raise","amount":60}"#);
        let back: PlayerAction = serde_json::from_str(r#"{"action":"fold"}"#).unwrap();
        assert_eq!(back, PlayerAction::Fold);
    }
}
