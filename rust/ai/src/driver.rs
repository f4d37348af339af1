use std::collections::HashMap;

use holdem_engine::engine::try_apply_action;
use holdem_engine::errors::GameError;
use holdem_engine::game::GameState;
use holdem_engine::player::{PlayerAction, PlayerId};
use rand::RngCore;
use tracing::warn;

use crate::AIOpponent;

/// Bots keyed by the player they play for.
pub type Bots = HashMap<PlayerId, Box<dyn AIOpponent>>;

/// Lets the bots act until the hand is over.
///
/// A bot answering with an illegal action checks when it can and folds
/// otherwise, so every iteration moves the hand forward.
///
/// # Errors
///
/// [`GameError::PlayerNotFound`] when the player to act has no bot, or any
/// error a bot itself reports.
pub fn play_out_hand<R: RngCore>(
    mut state: GameState,
    bots: &Bots,
    rng: &mut R,
) -> Result<GameState, GameError> {
    while let Some(player) = state.active_player() {
        let id = player.id;
        let bot = bots.get(&id).ok_or(GameError::PlayerNotFound(id))?;
        let action = bot.decide(id, &state, rng)?;
        state = match try_apply_action(&state, action) {
            Ok(next) => next,
            Err(err) => {
                let fallback = match state.legal_actions() {
                    Some(legal) if legal.can_check => PlayerAction::Check,
                    _ => PlayerAction::Fold,
                };
                warn!(player = id, bot = bot.name(), ?action, ?fallback, error = %err, "illegal bot action");
                try_apply_action(&state, fallback)?
            }
        };
    }
    Ok(state)
}

/// One bot of the given kind for every seat at the table.
pub fn seat_bots(state: &GameState, kind: &str) -> Result<Bots, GameError> {
    state
        .players
        .iter()
        .map(|p| Ok((p.id, crate::create_ai(kind)?)))
        .collect()
}
