use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::{Player, PlayerAction as A, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips to move in; below the amount owed when the caller is short (all-in)
    Call(u32),
    Raise { to: u32, delta: u32 },
}

/// Validates a player action against the table's current bet.
///
/// Converts a [`crate::player::PlayerAction`] into a [`ValidatedAction`]
/// describing the chips that actually move.
///
/// - `Check` needs `player.bet == current_bet`.
/// - `Call` with nothing owed is a check; a call the stack cannot cover is
///   capped at the stack (all-in).
/// - `Raise(to)` needs `to > current_bet` and enough chips to reach `to`.
///
/// # Errors
///
/// Returns [`GameError::InvalidAction`] for a check facing a bet, a raise at
/// or below the current bet, or a raise the player cannot afford.
///
/// # Examples
///
/// ```
/// use holdem_engine::player::{Player, PlayerAction, Seat};
/// use holdem_engine::rules::{validate_action, ValidatedAction};
///
/// let seats = [Seat::new(1, "a", 1000, 0), Seat::new(2, "b", 1000, 1)];
/// let state = holdem_engine::game::GameState::deal(
///     &seats,
///     &Default::default(),
///     0,
///     holdem_engine::deck::build_deck(),
/// )
/// .unwrap();
/// let sb: &Player = &state.players[1];
///
/// assert_eq!(validate_action(sb, 20, PlayerAction::Call), Ok(ValidatedAction::Call(10)));
/// assert!(validate_action(sb, 20, PlayerAction::Check).is_err());
/// assert!(validate_action(sb, 20, PlayerAction::Raise(20)).is_err());
/// ```
pub fn validate_action(
    player: &Player,
    current_bet: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    if !player.is_active {
        return Err(GameError::invalid_action(format!(
            "player {} is not in the hand",
            player.id
        )));
    }
    let to_call = current_bet.saturating_sub(player.bet);
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::invalid_action(format!(
                    "cannot check facing {to_call} to call"
                )))
            }
        }
        A::Call => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Ok(ValidatedAction::Call(to_call.min(player.chips)))
            }
        }
        A::Raise(to) => {
            if to <= current_bet {
                return Err(GameError::invalid_action(format!(
                    "raise to {to} must exceed current bet {current_bet}"
                )));
            }
            let delta = to - player.bet;
            if delta > player.chips {
                return Err(GameError::invalid_action(format!(
                    "raise to {to} needs {delta} chips, player has {}",
                    player.chips
                )));
            }
            Ok(ValidatedAction::Raise { to, delta })
        }
    }
}

/// What the player whose turn it is may do. Folding is always allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalActions {
    pub player_id: PlayerId,
    pub can_check: bool,
    /// Chips a call would move (capped at the stack); 0 when checking is possible
    pub call_amount: u32,
    /// Smallest legal raise target, if the player can raise at all
    pub min_raise_to: Option<u32>,
    /// All-in raise target
    pub max_raise_to: Option<u32>,
}

impl LegalActions {
    pub fn for_player(player: &Player, current_bet: u32) -> Self {
        let to_call = current_bet.saturating_sub(player.bet);
        let all_in_to = player.bet + player.chips;
        let can_raise = all_in_to > current_bet;
        Self {
            player_id: player.id,
            can_check: to_call == 0,
            call_amount: to_call.min(player.chips),
            min_raise_to: can_raise.then_some(current_bet + 1),
            max_raise_to: can_raise.then_some(all_in_to),
        }
    }

    pub fn allows(&self, action: A) -> bool {
        match action {
            A::Fold | A::Call => true,
            A::Check => self.can_check,
            A::Raise(to) => match (self.min_raise_to, self.max_raise_to) {
                (Some(lo), Some(hi)) => (lo..=hi).contains(&to),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Seat;

    fn player(chips: u32, bet: u32) -> Player {
        let mut p = Player::from_seat(&Seat::new(7, "p", chips + bet, 0));
        p.commit(bet);
        p
    }

    #[test]
    fn call_with_nothing_owed_is_check() {
        assert_eq!(validate_action(&player(100, 20), 20, A::Call), Ok(ValidatedAction::Check));
    }

    #[test]
    fn short_call_is_capped() {
        assert_eq!(validate_action(&player(15, 0), 40, A::Call), Ok(ValidatedAction::Call(15)));
    }

    #[test]
    fn raise_counts_chips_already_in() {
        assert_eq!(
            validate_action(&player(100, 20), 20, A::Raise(60)),
            Ok(ValidatedAction::Raise { to: 60, delta: 40 })
        );
    }

    #[test]
    fn unaffordable_raise_is_rejected() {
        assert!(matches!(
            validate_action(&player(30, 20), 20, A::Raise(60)),
            Err(GameError::InvalidAction { .. })
        ));
    }

    #[test]
    fn folded_player_cannot_act() {
        let mut p = player(100, 0);
        p.is_active = false;
        assert!(validate_action(&p, 0, A::Check).is_err());
    }

    #[test]
    fn legal_actions_for_short_stack() {
        let legal = LegalActions::for_player(&player(10, 0), 20);
        assert!(!legal.can_check);
        assert_eq!(legal.call_amount, 10);
        assert_eq!(legal.min_raise_to, None);
        assert!(!legal.allows(A::Raise(30)));
        assert!(legal.allows(A::Call));
    }

    #[test]
    fn legal_actions_raise_window() {
        let legal = LegalActions::for_player(&player(980, 20), 20);
        assert!(legal.can_check);
        assert_eq!(legal.min_raise_to, Some(21));
        assert_eq!(legal.max_raise_to, Some(1000));
        assert!(legal.allows(A::Raise(1000)));
        assert!(!legal.allows(A::Raise(1001)));
    }
}
