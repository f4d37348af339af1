use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Hand categories from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum HandRank {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandRank {
    /// Category floor of the score. Tiebreaks stay below 100 so a category
    /// never overlaps the next one.
    pub fn base_score(self) -> u32 {
        match self {
            HandRank::HighCard => 100,
            HandRank::OnePair => 200,
            HandRank::TwoPair => 300,
            HandRank::ThreeOfAKind => 400,
            HandRank::Straight => 500,
            HandRank::Flush => 600,
            HandRank::FullHouse => 700,
            HandRank::FourOfAKind => 800,
            HandRank::StraightFlush => 900,
            HandRank::RoyalFlush => 1000,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of scoring five cards. Higher `score` wins; equal scores split.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub rank: HandRank,
    pub score: u32,
    /// The five cards, deciding groups first (e.g. the quads, then the kicker).
    pub cards: [Card; 5],
}

/// Scores exactly five cards.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate_hand, HandRank};
///
/// let cards: [_; 5] = parse_cards("As Ks Qs Js 10s").unwrap().try_into().unwrap();
/// let result = evaluate_hand(&cards);
/// assert_eq!(result.rank, HandRank::RoyalFlush);
/// assert_eq!(result.score, 1000);
/// ```
pub fn evaluate_hand(cards: &[Card; 5]) -> HandResult {
    let mut sorted = *cards;
    sorted.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));

    let is_flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let straight_high = straight_high(&sorted);

    // (count, rank) sorted by count then rank, both descending
    let mut groups: Vec<(u8, Rank)> = Vec::with_capacity(5);
    for c in &sorted {
        match groups.iter_mut().find(|(_, r)| *r == c.rank) {
            Some((n, _)) => *n += 1,
            None => groups.push((1, c.rank)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let top = groups[0];
    let second = groups.get(1).copied().unwrap_or((0, Rank::Two));
    let high = sorted[0].rank.value() as u32;

    let (rank, tiebreak) = match (is_flush, straight_high) {
        (true, Some(14)) => (HandRank::RoyalFlush, 0),
        (true, Some(h)) => (HandRank::StraightFlush, h as u32),
        _ if top.0 == 4 => (HandRank::FourOfAKind, top.1.value() as u32),
        _ if top.0 == 3 && second.0 == 2 => (HandRank::FullHouse, top.1.value() as u32),
        (true, None) => (HandRank::Flush, high),
        (false, Some(h)) => (HandRank::Straight, h as u32),
        _ if top.0 == 3 => (HandRank::ThreeOfAKind, top.1.value() as u32),
        _ if top.0 == 2 && second.0 == 2 => (HandRank::TwoPair, two_pair_tiebreak(top.1, second.1)),
        _ if top.0 == 2 => (HandRank::OnePair, top.1.value() as u32),
        _ => (HandRank::HighCard, high),
    };

    HandResult {
        rank,
        score: rank.base_score() + tiebreak,
        cards: arrange(&sorted, &groups, straight_high == Some(5)),
    }
}

/// Scores a slice that must hold exactly five cards.
pub fn evaluate_slice(cards: &[Card]) -> Result<HandResult, GameError> {
    let five: &[Card; 5] = cards.try_into().map_err(|_| {
        if cards.len() < 5 {
            GameError::InsufficientCards {
                needed: 5,
                available: cards.len(),
            }
        } else {
            GameError::TooManyCards {
                max: 5,
                got: cards.len(),
            }
        }
    })?;
    Ok(evaluate_hand(five))
}

/// Best five-card hand out of hole cards plus community cards.
///
/// Every 5-card subset of the pool is scored (at most 21 for seven cards);
/// the first maximum wins. Fewer than five cards in total is an error.
pub fn find_best_hand(hole: &[Card], community: &[Card]) -> Result<HandResult, GameError> {
    if hole.len() > 2 {
        return Err(GameError::TooManyCards {
            max: 2,
            got: hole.len(),
        });
    }
    if community.len() > 5 {
        return Err(GameError::TooManyCards {
            max: 5,
            got: community.len(),
        });
    }
    let pool: Vec<Card> = hole.iter().chain(community).copied().collect();
    if pool.len() < 5 {
        return Err(GameError::InsufficientCards {
            needed: 5,
            available: pool.len(),
        });
    }

    let mut best: Option<HandResult> = None;
    for combo in five_card_combinations(&pool) {
        let result = evaluate_hand(&combo);
        if best.is_none_or(|b| result.score > b.score) {
            best = Some(result);
        }
    }
    best.ok_or(GameError::InsufficientCards {
        needed: 5,
        available: pool.len(),
    })
}

pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    a.score.cmp(&b.score)
}

/// All 5-card subsets of `pool`, in lexicographic index order.
pub fn five_card_combinations(pool: &[Card]) -> Vec<[Card; 5]> {
    let n = pool.len();
    let mut out = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        out.push([pool[a], pool[b], pool[c], pool[d], pool[e]]);
                    }
                }
            }
        }
    }
    out
}

/// High card of a straight, if the descending-sorted cards form one.
/// The wheel (A-5-4-3-2) counts the ace low and reports 5.
fn straight_high(sorted_desc: &[Card; 5]) -> Option<u8> {
    let v: Vec<u8> = sorted_desc.iter().map(|c| c.rank.value()).collect();
    if v.windows(2).all(|w| w[0] == w[1] + 1) {
        return Some(v[0]);
    }
    if v == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

// Packs (high pair, low pair) into 0..78, preserving lexicographic order.
fn two_pair_tiebreak(high: Rank, low: Rank) -> u32 {
    let h = (high.value() - 2) as u32;
    let l = (low.value() - 2) as u32;
    h * (h.saturating_sub(1)) / 2 + l
}

fn arrange(sorted_desc: &[Card; 5], groups: &[(u8, Rank)], wheel: bool) -> [Card; 5] {
    let mut out = *sorted_desc;
    if wheel {
        out.rotate_left(1);
        return out;
    }
    let ordered = groups
        .iter()
        .flat_map(|(_, r)| sorted_desc.iter().filter(move |c| c.rank == *r));
    for (slot, card) in out.iter_mut().zip(ordered) {
        *slot = *card;
    }
    out
}
