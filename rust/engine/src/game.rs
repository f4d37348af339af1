use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::config::{Blinds, DealerChoice, TableConfig, MAX_SEATS};
use crate::deck::{build_deck, Deck};
use crate::errors::GameError;
use crate::logger::{ActionRecord, ShowdownInfo};
use crate::player::{Player, PlayerId, Seat};
use crate::rules::LegalActions;

/// Betting phases of a hand, strictly in this order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    pub fn next(self) -> Phase {
        match self {
            Phase::Preflop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River | Phase::Showdown => Phase::Showdown,
        }
    }

    /// Community cards on the table once this phase has been dealt.
    pub fn board_size(self) -> usize {
        match self {
            Phase::Preflop => 0,
            Phase::Flop => 3,
            Phase::Turn => 4,
            Phase::River | Phase::Showdown => 5,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        };
        f.write_str(s)
    }
}

/// Complete state of one hand at one table.
///
/// Built once per hand and only advanced through
/// [`crate::engine::apply_action`], which consumes a state and returns the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Players in seat order
    pub players: Vec<Player>,
    pub community_cards: Vec<Card>,
    pub deck: Deck,
    /// Chips committed this hand and not yet paid out
    pub pot: u32,
    /// Bet every active player must match to close the round
    pub current_bet: u32,
    pub active_player_index: usize,
    pub dealer_index: usize,
    pub phase: Phase,
    pub blinds: Blinds,
    pub history: Vec<ActionRecord>,
    /// Filled in once the pot has been awarded
    pub showdown: Option<ShowdownInfo>,
}

impl GameState {
    /// Starts a hand: shuffles a fresh deck, places the button, deals two
    /// cards to every seat with chips and posts the blinds.
    ///
    /// ```
    /// use holdem_engine::config::{DealerChoice, TableConfig};
    /// use holdem_engine::deck::seeded_rng;
    /// use holdem_engine::game::{GameState, Phase};
    /// use holdem_engine::player::Seat;
    ///
    /// let seats: Vec<Seat> = (0..4).map(|i| Seat::new(i, format!("p{i}"), 1000, i as usize)).collect();
    /// let mut rng = seeded_rng(7);
    /// let state = GameState::new_hand(&seats, &TableConfig::default(), DealerChoice::Fixed(0), &mut rng).unwrap();
    ///
    /// assert_eq!(state.phase, Phase::Preflop);
    /// assert_eq!(state.pot, 30);
    /// assert_eq!(state.active_player_index, 3);
    /// assert!(state.players.iter().all(|p| p.cards.len() == 2));
    /// ```
    pub fn new_hand<R: Rng + ?Sized>(
        seats: &[Seat],
        config: &TableConfig,
        dealer: DealerChoice,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let dealer_index = match dealer {
            DealerChoice::Fixed(i) => i,
            DealerChoice::Random => {
                let funded: Vec<usize> = seats
                    .iter()
                    .filter(|s| s.chips > 0)
                    .map(|s| s.seat)
                    .collect();
                if funded.len() < 2 {
                    return Err(GameError::NotEnoughPlayers {
                        needed: 2,
                        funded: funded.len(),
                    });
                }
                funded[rng.random_range(0..funded.len())]
            }
        };
        let deck = build_deck().shuffled(rng);
        Self::deal(seats, config, dealer_index, deck)
    }

    /// Starts a hand from a given deck and button seat. The deck is dealt from
    /// its tail, which makes stacked decks usable for replays and tests.
    pub fn deal(
        seats: &[Seat],
        config: &TableConfig,
        dealer_index: usize,
        deck: Deck,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let players = seat_players(seats)?;

        let funded = players.iter().filter(|p| p.is_active).count();
        if funded < 2 {
            return Err(GameError::NotEnoughPlayers { needed: 2, funded });
        }
        if !players.get(dealer_index).is_some_and(|p| p.is_active) {
            return Err(GameError::InvalidConfig(format!(
                "dealer seat {dealer_index} is empty or has no chips"
            )));
        }

        let mut state = GameState {
            players,
            community_cards: Vec::with_capacity(5),
            deck,
            pot: 0,
            current_bet: 0,
            active_player_index: dealer_index,
            dealer_index,
            phase: Phase::Preflop,
            blinds: config.blinds,
            history: Vec::new(),
            showdown: None,
        };
        state.players[dealer_index].is_dealer = true;

        // one card at a time, starting left of the button
        for _ in 0..2 {
            let mut seat = dealer_index;
            for _ in 0..funded {
                seat = state.next_seat_where(seat, |p| p.is_active);
                let card = state.deck.deal()?;
                state.players[seat].cards.push(card);
            }
        }

        let sb = state.next_seat_where(dealer_index, |p| p.is_active);
        let bb = state.next_seat_where(sb, |p| p.is_active);
        let small = state.players[sb].commit(config.blinds.small);
        let big = state.players[bb].commit(config.blinds.big);
        state.pot = small + big;
        state.current_bet = config.blinds.big;
        debug!(
            dealer = dealer_index,
            small_blind_seat = sb,
            big_blind_seat = bb,
            pot = state.pot,
            "hand dealt"
        );

        let first = state.next_seat_where(bb, |p| p.is_active);
        crate::engine::open_action(state, first)
    }

    /// Builds the following hand at the same table: chips carry over and the
    /// button moves to the next seat that still has chips.
    pub fn next_hand<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, GameError> {
        if !self.is_hand_over() {
            return Err(GameError::HandInProgress);
        }
        let seats: Vec<Seat> = self.players.iter().map(Player::to_seat).collect();
        let funded = seats.iter().filter(|s| s.chips > 0).count();
        if funded < 2 {
            return Err(GameError::NotEnoughPlayers { needed: 2, funded });
        }
        let n = seats.len();
        let dealer = (1..=n)
            .map(|i| (self.dealer_index + i) % n)
            .find(|&i| seats[i].chips > 0)
            .unwrap_or(self.dealer_index);
        let config = TableConfig::new(self.blinds);
        Self::new_hand(&seats, &config, DealerChoice::Fixed(dealer), rng)
    }

    pub fn active_player(&self) -> Option<&Player> {
        if self.is_hand_over() {
            return None;
        }
        self.players.get(self.active_player_index)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn is_hand_over(&self) -> bool {
        self.phase == Phase::Showdown
    }

    /// Allowed moves for the player whose turn it is.
    pub fn legal_actions(&self) -> Option<LegalActions> {
        self.active_player()
            .map(|p| LegalActions::for_player(p, self.current_bet))
    }

    /// Chips owed by `player` to stay in the hand.
    pub fn to_call(&self, player: &Player) -> u32 {
        self.current_bet.saturating_sub(player.bet)
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active).count()
    }

    /// Stacks plus pot; constant for the life of a hand.
    pub fn chips_in_play(&self) -> u32 {
        self.players.iter().map(|p| p.chips).sum::<u32>() + self.pot
    }

    /// Next seat after `from` (cyclic, excluding `from` itself) that matches;
    /// falls back to `from` when no other seat does.
    pub(crate) fn next_seat_where(&self, from: usize, pred: impl Fn(&Player) -> bool) -> usize {
        let n = self.players.len();
        (1..n)
            .map(|i| (from + i) % n)
            .find(|&i| pred(&self.players[i]))
            .unwrap_or(from)
    }
}

fn seat_players(seats: &[Seat]) -> Result<Vec<Player>, GameError> {
    if seats.len() > MAX_SEATS {
        return Err(GameError::InvalidConfig(format!(
            "{} seats exceeds the maximum of {MAX_SEATS}",
            seats.len()
        )));
    }
    let mut ids = HashSet::with_capacity(seats.len());
    if let Some(dup) = seats.iter().find(|s| !ids.insert(s.id)) {
        return Err(GameError::InvalidConfig(format!("duplicate player id {}", dup.id)));
    }
    let total: u64 = seats.iter().map(|s| u64::from(s.chips)).sum();
    if total > u64::from(u32::MAX) {
        return Err(GameError::InvalidConfig(format!(
            "{total} chips at the table exceeds the maximum of {}",
            u32::MAX
        )));
    }
    let mut ordered: Vec<&Seat> = seats.iter().collect();
    ordered.sort_by_key(|s| s.seat);
    if ordered.iter().enumerate().any(|(i, s)| s.seat != i) {
        return Err(GameError::InvalidConfig(
            "seat indices must be 0..N-1 with no gaps".into(),
        ));
    }
    Ok(ordered.into_iter().map(Player::from_seat).collect())
}
