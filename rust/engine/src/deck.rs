use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Ordered cards remaining to be dealt. Cards are consumed from the tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Deterministic RNG used by tests, the CLI and hand replays.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// A fresh, unshuffled deck of 52 distinct cards.
pub fn build_deck() -> Deck {
    Deck { cards: full_deck() }
}

/// Returns a uniformly shuffled copy; `deck` itself is untouched.
pub fn shuffle<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Deck {
    deck.shuffled(rng)
}

impl Deck {
    /// Builds a deck that deals `deal_order[0]` first, then `deal_order[1]`, ...
    /// Duplicates are rejected.
    pub fn stacked(deal_order: Vec<Card>) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(deal_order.len());
        if let Some(dup) = deal_order.iter().find(|c| !seen.insert(**c)) {
            return Err(GameError::InvalidConfig(format!("duplicate card {dup} in deck")));
        }
        let mut cards = deal_order;
        cards.reverse();
        Ok(Self { cards })
    }

    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Deck {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Deck { cards }
    }

    pub fn deal(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::DeckExhausted);
        }
        (0..n).map(|_| self.deal()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards; the last element is the next one dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn deal_takes_from_the_tail() {
        let mut deck = build_deck();
        let last = *deck.cards().last().unwrap();
        assert_eq!(deck.deal().unwrap(), last);
        assert_eq!(deck.remaining(), 51);
    }

    #[test]
    fn deal_n_refuses_partial_deals() {
        let mut deck = build_deck();
        deck.deal_n(50).unwrap();
        assert_eq!(deck.deal_n(3), Err(GameError::DeckExhausted));
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn stacked_deck_deals_in_given_order() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let k = Card::new(Rank::King, Suit::Hearts);
        let mut deck = Deck::stacked(vec![a, k]).unwrap();
        assert_eq!(deck.deal().unwrap(), a);
        assert_eq!(deck.deal().unwrap(), k);
        assert_eq!(deck.deal(), Err(GameError::DeckExhausted));
    }

    #[test]
    fn stacked_deck_rejects_duplicates() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert!(matches!(
            Deck::stacked(vec![a, a]),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
