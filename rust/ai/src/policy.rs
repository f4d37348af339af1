use holdem_engine::errors::GameError;
use holdem_engine::game::{GameState, Phase};
use holdem_engine::player::{Player, PlayerAction};
use holdem_engine::rules::LegalActions;
use rand::Rng;
use tracing::trace;

use crate::difficulty::Difficulty;
use crate::position::{Position, PositionProfile};
use crate::strength::analyze;

/// Strength above which a bot bets or raises on its own.
const STRONG: f64 = 600.0;
/// Strength above which a bot re-raises regardless of aggression.
const VERY_STRONG: f64 = 800.0;
/// Strength above which a bot calls a bet.
const DECENT: f64 = 400.0;
/// Calls are also taken when the price is below this share of the pot.
const CHEAP_CALL_ODDS: f64 = 0.2;
const BLUFF_SIZE: f64 = 2.5;

/// Chooses an action for `player` in `state`.
///
/// The same state, difficulty and RNG stream always produce the same action.
/// Any raise returned is legal for the player; when no raise is possible the
/// policy calls (or checks) instead.
pub fn decide<R: Rng + ?Sized>(
    player: &Player,
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<PlayerAction, GameError> {
    let strength = analyze(&player.cards, &state.community_cards, difficulty)?;
    let effective = strength.effective(state.phase);
    let position = Position::classify(player.position, state.players.len());
    let profile = position.profile();
    let multiplier = difficulty.multiplier();
    let legal = LegalActions::for_player(player, state.current_bet);
    let to_call = state.to_call(player);

    let aggressive = rng.random::<f64>() < profile.raise_frequency * multiplier;

    let action = if to_call == 0 {
        if effective > STRONG || aggressive {
            let target = sized(state.pot, &profile, rng);
            raise_or_continue(target, state, &legal)
        } else {
            PlayerAction::Check
        }
    } else if effective > VERY_STRONG || (effective > STRONG && aggressive) {
        let target = sized(state.current_bet, &profile, rng);
        raise_or_continue(target, state, &legal)
    } else if effective > DECENT || pot_odds(to_call, state.pot) < CHEAP_CALL_ODDS {
        PlayerAction::Call
    } else if state.phase != Phase::River && rng.random::<f64>() < profile.bluff_frequency * multiplier {
        let target = (state.current_bet as f64 * BLUFF_SIZE) as u32;
        raise_or_continue(target, state, &legal)
    } else {
        PlayerAction::Fold
    };

    trace!(
        player = player.id,
        ?position,
        strength = strength.score,
        draw = strength.draw_potential,
        effective,
        to_call,
        aggressive,
        ?action,
        "ai decision"
    );
    Ok(action)
}

/// Share of the pot a call would represent after calling.
pub fn pot_odds(to_call: u32, pot: u32) -> f64 {
    if to_call == 0 {
        return 0.0;
    }
    to_call as f64 / (pot as f64 + to_call as f64)
}

fn sized<R: Rng + ?Sized>(base: u32, profile: &PositionProfile, rng: &mut R) -> u32 {
    (base as f64 * profile.raise_multiplier(rng.random::<f64>())) as u32
}

/// Clamps a raise target to at least one big blind over the current bet and
/// at most all-in. Without a legal raise the player just continues.
fn raise_or_continue(target: u32, state: &GameState, legal: &LegalActions) -> PlayerAction {
    match (legal.min_raise_to, legal.max_raise_to) {
        (Some(lo), Some(hi)) => {
            let floor = state.current_bet.saturating_add(state.blinds.big).max(lo);
            PlayerAction::Raise(target.max(floor).min(hi))
        }
        _ if legal.can_check => PlayerAction::Check,
        _ => PlayerAction::Call,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pot_odds_is_cost_over_pot_after_call() {
        assert_eq!(pot_odds(0, 100), 0.0);
        assert!((pot_odds(50, 150) - 0.25).abs() < 1e-12);
        assert!(pot_odds(10, 100) < CHEAP_CALL_ODDS);
    }
}
