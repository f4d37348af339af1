use tracing::{debug, warn};

use crate::errors::GameError;
use crate::game::{GameState, Phase};
use crate::logger::ActionRecord;
use crate::player::{Player, PlayerAction, PlayerId};
use crate::pot;
use crate::rules::{validate_action, ValidatedAction};

/// Applies `action` for the player whose turn it is.
///
/// Illegal actions leave the state untouched: the same value comes back and a
/// warning is logged. Use [`try_apply_action`] to get the reason instead.
///
/// ```
/// use holdem_engine::config::TableConfig;
/// use holdem_engine::deck::build_deck;
/// use holdem_engine::engine::apply_action;
/// use holdem_engine::game::GameState;
/// use holdem_engine::player::{PlayerAction, Seat};
///
/// let seats = [Seat::new(1, "a", 1000, 0), Seat::new(2, "b", 1000, 1)];
/// let state = GameState::deal(&seats, &TableConfig::default(), 0, build_deck()).unwrap();
///
/// let same = apply_action(state.clone(), PlayerAction::Raise(20));
/// assert_eq!(same, state);
///
/// let next = apply_action(state, PlayerAction::Raise(60));
/// assert_eq!(next.current_bet, 60);
/// assert_eq!(next.pot, 80);
/// ```
pub fn apply_action(state: GameState, action: PlayerAction) -> GameState {
    match try_apply_action(&state, action) {
        Ok(next) => next,
        Err(err) => {
            warn!(
                player = state.active_player_index,
                ?action,
                phase = %state.phase,
                error = %err,
                "action rejected"
            );
            state
        }
    }
}

/// Like [`apply_action`] but reports why an action was rejected.
pub fn try_apply_action(state: &GameState, action: PlayerAction) -> Result<GameState, GameError> {
    if state.is_hand_over() {
        return Err(GameError::NoHandInProgress);
    }
    let idx = state.active_player_index;
    let actor = state
        .players
        .get(idx)
        .ok_or_else(|| GameError::invalid_action(format!("no player at seat {idx}")))?;
    let validated = validate_action(actor, state.current_bet, action)?;

    let mut next = state.clone();
    next.history.push(ActionRecord {
        player_id: actor.id,
        phase: state.phase,
        action,
    });

    let player = &mut next.players[idx];
    match validated {
        ValidatedAction::Fold => player.is_active = false,
        ValidatedAction::Check => {}
        ValidatedAction::Call(amount) => {
            let paid = player.commit(amount);
            next.pot += paid;
        }
        ValidatedAction::Raise { to, delta } => {
            let paid = player.commit(delta);
            next.pot += paid;
            next.current_bet = to;
            for (i, other) in next.players.iter_mut().enumerate() {
                if i != idx {
                    other.has_acted = false;
                }
            }
        }
    }
    let player = &mut next.players[idx];
    player.has_acted = true;
    player.is_turn = false;

    after_action(next, idx)
}

/// Applies `action` on behalf of `player_id`, rejecting it unless that player
/// is the one to act.
pub fn try_apply_action_for(
    state: &GameState,
    player_id: PlayerId,
    action: PlayerAction,
) -> Result<GameState, GameError> {
    let player = state
        .player(player_id)
        .ok_or(GameError::PlayerNotFound(player_id))?;
    if state.is_hand_over() {
        return Err(GameError::NoHandInProgress);
    }
    if player.position != state.active_player_index {
        return Err(GameError::invalid_action(format!(
            "it is not player {player_id}'s turn"
        )));
    }
    try_apply_action(state, action)
}

/// Hands the first decision of a betting round to the first seat from
/// `first` onwards that still owes action, or moves on if nobody does.
pub(crate) fn open_action(state: GameState, first: usize) -> Result<GameState, GameError> {
    if round_complete(&state) {
        return advance_street(state);
    }
    let n = state.players.len();
    let seat = (0..n)
        .map(|i| (first + i) % n)
        .find(|&i| needs_action(&state.players[i], state.current_bet))
        .unwrap_or(first);
    Ok(give_turn(state, seat))
}

fn after_action(state: GameState, last: usize) -> Result<GameState, GameError> {
    if state.active_count() == 1 {
        return Ok(pot::award_uncontested(state));
    }
    if round_complete(&state) {
        return advance_street(state);
    }
    let current_bet = state.current_bet;
    let seat = state.next_seat_where(last, |p| needs_action(p, current_bet));
    Ok(give_turn(state, seat))
}

fn needs_action(player: &Player, current_bet: u32) -> bool {
    player.can_act() && (!player.has_acted || player.bet < current_bet)
}

/// A round is over once nobody who can still bet owes a decision. With at
/// most one such player left there is nobody to bet against, so only an
/// outstanding call keeps the round open.
fn round_complete(state: &GameState) -> bool {
    let bettors = state.players.iter().filter(|p| p.can_act()).count();
    if bettors <= 1 {
        return !state
            .players
            .iter()
            .any(|p| p.can_act() && p.bet < state.current_bet);
    }
    !state
        .players
        .iter()
        .any(|p| needs_action(p, state.current_bet))
}

/// Moves to the next street, dealing its community cards. Streets nobody can
/// bet on are dealt straight through to showdown.
fn advance_street(mut state: GameState) -> Result<GameState, GameError> {
    loop {
        for p in &mut state.players {
            p.bet = 0;
            p.has_acted = false;
            p.is_turn = false;
        }
        state.current_bet = 0;

        if state.phase == Phase::River {
            return pot::showdown(state);
        }
        state.phase = state.phase.next();
        let count = state.phase.board_size() - state.community_cards.len();
        let cards = state.deck.deal_n(count)?;
        state.community_cards.extend(cards);
        debug!(
            phase = %state.phase,
            board = ?state.community_cards,
            pot = state.pot,
            "street dealt"
        );

        let bettors = state.players.iter().filter(|p| p.can_act()).count();
        if bettors >= 2 {
            let first = state.next_seat_where(state.dealer_index, Player::can_act);
            return Ok(give_turn(state, first));
        }
    }
}

fn give_turn(mut state: GameState, seat: usize) -> GameState {
    for (i, p) in state.players.iter_mut().enumerate() {
        p.is_turn = i == seat;
    }
    state.active_player_index = seat;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfig;
    use crate::deck::build_deck;
    use crate::player::Seat;

    fn table(stacks: &[u32]) -> GameState {
        let seats: Vec<Seat> = stacks
            .iter()
            .enumerate()
            .map(|(i, &c)| Seat::new(i as PlayerId, format!("p{i}"), c, i))
            .collect();
        GameState::deal(&seats, &TableConfig::default(), 0, build_deck()).unwrap()
    }

    #[test]
    fn big_blind_keeps_its_option() {
        // dealer 0, sb 1, bb 2, utg 0
        let s = table(&[1000, 1000, 1000]);
        let s = try_apply_action(&s, PlayerAction::Call).unwrap();
        let s = try_apply_action(&s, PlayerAction::Call).unwrap();
        assert_eq!(s.phase, Phase::Preflop);
        assert_eq!(s.active_player_index, 2);
        let s = try_apply_action(&s, PlayerAction::Check).unwrap();
        assert_eq!(s.phase, Phase::Flop);
        assert_eq!(s.community_cards.len(), 3);
    }

    #[test]
    fn raise_reopens_action() {
        let s = table(&[1000, 1000, 1000]);
        let s = try_apply_action(&s, PlayerAction::Call).unwrap();
        let s = try_apply_action(&s, PlayerAction::Raise(80)).unwrap();
        assert_eq!(s.active_player_index, 2);
        let s = try_apply_action(&s, PlayerAction::Call).unwrap();
        // the original limper still owes 60
        assert_eq!(s.phase, Phase::Preflop);
        assert_eq!(s.active_player_index, 0);
        assert_eq!(s.to_call(&s.players[0]), 60);
    }

    #[test]
    fn check_with_bet_outstanding_is_rejected() {
        let s = table(&[1000, 1000]);
        assert!(matches!(
            try_apply_action(&s, PlayerAction::Check),
            Err(GameError::InvalidAction { .. })
        ));
    }

    #[test]
    fn acting_out_of_turn_is_rejected() {
        let s = table(&[1000, 1000, 1000]);
        assert!(try_apply_action_for(&s, 1, PlayerAction::Fold).is_err());
        assert_eq!(
            try_apply_action_for(&s, 9, PlayerAction::Fold).unwrap_err(),
            GameError::PlayerNotFound(9)
        );
        assert!(try_apply_action_for(&s, 0, PlayerAction::Fold).is_ok());
    }

    #[test]
    fn short_blind_runs_out_the_board() {
        // sb posts its last 5 chips; bb owes nothing more
        let s = table(&[1000, 5]);
        assert_eq!(s.phase, Phase::Showdown);
        assert_eq!(s.community_cards.len(), 5);
        assert_eq!(s.chips_in_play(), 1005);
    }

    #[test]
    fn finished_hand_rejects_actions() {
        let s = table(&[1000, 1000]);
        let s = try_apply_action(&s, PlayerAction::Fold).unwrap();
        assert_eq!(
            try_apply_action(&s, PlayerAction::Check).unwrap_err(),
            GameError::NoHandInProgress
        );
    }
}
