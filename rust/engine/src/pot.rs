use tracing::info;

use crate::errors::GameError;
use crate::game::{GameState, Phase};
use crate::hand::find_best_hand;
use crate::logger::{Payout, RevealedHand, ShowdownInfo};
use crate::player::PlayerId;

/// Splits `pot` evenly among `winners` (seat indices). Chips left over by the
/// floor division go one each to winners in seat order starting left of the
/// dealer. Returns `(seat, amount)` in that order.
pub fn split_pot(pot: u32, winners: &[usize], dealer_index: usize, seats: usize) -> Vec<(usize, u32)> {
    if winners.is_empty() || seats == 0 {
        return Vec::new();
    }
    let mut ordered = winners.to_vec();
    ordered.sort_by_key(|&seat| (seat + seats - dealer_index % seats - 1) % seats);

    let share = pot / ordered.len() as u32;
    let odd = (pot % ordered.len() as u32) as usize;
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, seat)| (seat, share + u32::from(i < odd)))
        .collect()
}

/// Gives the whole pot to the last player standing.
pub(crate) fn award_uncontested(mut state: GameState) -> GameState {
    let Some(seat) = state.players.iter().position(|p| p.is_active) else {
        return state;
    };
    let amount = state.pot;
    let winner = &mut state.players[seat];
    winner.chips += amount;
    let winner_id = winner.id;
    info!(winner = winner_id, amount, phase = %state.phase, "pot awarded uncontested");

    finish(
        &mut state,
        ShowdownInfo {
            winners: vec![winner_id],
            payouts: vec![Payout {
                player_id: winner_id,
                amount,
            }],
            hands: Vec::new(),
            uncontested: true,
        },
    );
    state
}

/// Compares the best hand of every active player and pays the pot to the
/// highest score, splitting ties.
pub(crate) fn showdown(mut state: GameState) -> Result<GameState, GameError> {
    let mut hands = Vec::new();
    for (seat, p) in state.players.iter().enumerate().filter(|(_, p)| p.is_active) {
        let result = find_best_hand(&p.cards, &state.community_cards)?;
        hands.push((seat, RevealedHand {
            player_id: p.id,
            hole_cards: p.cards.clone(),
            result,
        }));
    }

    let best = hands
        .iter()
        .map(|(_, h)| h.result.score)
        .max()
        .ok_or(GameError::NoHandInProgress)?;
    let winning_seats: Vec<usize> = hands
        .iter()
        .filter(|(_, h)| h.result.score == best)
        .map(|(seat, _)| *seat)
        .collect();

    let shares = split_pot(state.pot, &winning_seats, state.dealer_index, state.players.len());
    let mut payouts = Vec::with_capacity(shares.len());
    for (seat, amount) in shares {
        let p = &mut state.players[seat];
        p.chips += amount;
        payouts.push(Payout {
            player_id: p.id,
            amount,
        });
    }
    let winners: Vec<PlayerId> = winning_seats.iter().map(|&s| state.players[s].id).collect();
    info!(?winners, pot = state.pot, score = best, "showdown");

    finish(
        &mut state,
        ShowdownInfo {
            winners,
            payouts,
            hands: hands.into_iter().map(|(_, h)| h).collect(),
            uncontested: false,
        },
    );
    Ok(state)
}

fn finish(state: &mut GameState, info: ShowdownInfo) {
    for p in &mut state.players {
        p.bet = 0;
        p.is_turn = false;
    }
    state.pot = 0;
    state.current_bet = 0;
    state.phase = Phase::Showdown;
    state.showdown = Some(info);
}
