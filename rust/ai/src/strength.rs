use std::collections::{BTreeSet, HashMap};

use holdem_engine::cards::{Card, Rank};
use holdem_engine::errors::GameError;
use holdem_engine::game::Phase;
use holdem_engine::hand::{find_best_hand, HandRank};

use crate::difficulty::Difficulty;

/// How good a holding looks to a bot of a given difficulty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStrength {
    /// Evaluator score scaled by the difficulty multiplier
    pub score: f64,
    /// `None` while fewer than five cards are visible
    pub rank: Option<HandRank>,
    /// 0.0, 0.3, 0.4 or 0.7
    pub draw_potential: f64,
}

impl HandStrength {
    pub fn effective(&self, phase: Phase) -> f64 {
        (self.score + self.draw_potential * 200.0) * phase_multiplier(phase)
    }
}

pub fn analyze(hole: &[Card], community: &[Card], difficulty: Difficulty) -> Result<HandStrength, GameError> {
    let (score, rank) = if hole.len() + community.len() >= 5 {
        let best = find_best_hand(hole, community)?;
        (best.score, Some(best.rank))
    } else {
        (preflop_score(hole), None)
    };
    Ok(HandStrength {
        score: score as f64 * difficulty.multiplier(),
        rank,
        draw_potential: draw_potential(hole, community),
    })
}

/// Hole-card score on the evaluator's scale: a pocket pair is a one-pair
/// score, anything else a high-card score.
pub fn preflop_score(hole: &[Card]) -> u32 {
    let high = hole.iter().map(|c| c.rank.value() as u32).max().unwrap_or(0);
    match hole {
        [a, b] if a.rank == b.rank => 200 + high,
        _ => 100 + high,
    }
}

/// Flush draw (four of a suit) adds 0.4, straight draw (four ranks inside a
/// five-rank window) adds 0.3. Zero until the flop is out.
pub fn draw_potential(hole: &[Card], community: &[Card]) -> f64 {
    if community.len() < 3 {
        return 0.0;
    }
    let cards = || hole.iter().chain(community);

    let mut suits = HashMap::new();
    for c in cards() {
        *suits.entry(c.suit).or_insert(0u8) += 1;
    }
    let flush_draw = suits.values().any(|&n| n == 4);

    let mut values: BTreeSet<u8> = cards().map(|c| c.rank.value()).collect();
    if values.contains(&Rank::Ace.value()) {
        values.insert(1);
    }
    let straight_draw = (1..=10u8).any(|low| values.range(low..=low + 4).count() >= 4);

    let mut potential = 0.0;
    if flush_draw {
        potential += 0.4;
    }
    if straight_draw {
        potential += 0.3;
    }
    potential
}

pub fn phase_multiplier(phase: Phase) -> f64 {
    match phase {
        Phase::Preflop | Phase::Showdown => 1.0,
        Phase::Flop => 1.2,
        Phase::Turn => 1.4,
        Phase::River => 1.6,
    }
}
