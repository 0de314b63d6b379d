//! One full turn: apply, check for a win, then end the game or pass the turn.

use crate::{GameState, Move, MoveError, Player, apply_move, player_won};
use tracing::{info, instrument};

/// What happened after a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The mover won; the game is now over.
    Won(Player),
    /// Play continues with `next` to move.
    Continue {
        /// Player to move next.
        next: Player,
    },
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Continue { .. } => None,
        }
    }
}

/// Plays `mv` for the current turn owner.
///
/// On a win the game is marked over and the turn stays with the winner;
/// otherwise the turn passes to the opponent.
///
/// # Errors
///
/// Propagates the [`MoveError`] from [`apply_move`]; `state` is unchanged.
#[instrument(skip(state), fields(player = %state.turn_owner()))]
pub fn play(mv: &Move, state: &mut GameState) -> Result<Outcome, MoveError> {
    apply_move(mv, state)?;

    let player = state.turn_owner();
    if player_won(player, mv, state) {
        state.finish();
        info!(%player, "Player won");
        Ok(Outcome::Won(player))
    } else {
        state.pass_turn();
        Ok(Outcome::Continue {
            next: state.turn_owner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::new_game;

    #[test]
    fn test_turn_passes_after_move() {
        let mut game = new_game();
        let outcome = play(&Move::new(0, 0), &mut game).unwrap();
        assert_eq!(outcome, Outcome::Continue { next: Player::O });
        assert_eq!(game.turn_owner(), Player::O);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = new_game();
        assert!(play(&Move::new(3, 0), &mut game).is_err());
        assert_eq!(game.turn_owner(), Player::X);
    }

    #[test]
    fn test_win_ends_game_and_keeps_winner_on_turn() {
        let mut game = new_game();
        for mv in [(0, 0), (0, 1), (1, 1), (0, 2)] {
            play(&Move::new(mv.0, mv.1), &mut game).unwrap();
        }
        let outcome = play(&Move::new(2, 2), &mut game).unwrap();
        assert_eq!(outcome.winner(), Some(Player::X));
        assert!(game.game_over());
        assert_eq!(game.turn_owner(), Player::X);
    }

    #[test]
    fn test_pass_turn_after_win_is_ignored() {
        let mut game = new_game();
        for mv in [(0, 0), (0, 1), (1, 1), (0, 2)] {
            play(&Move::new(mv.0, mv.1), &mut game).unwrap();
        }
        assert_eq!(play(&Move::new(2, 2), &mut game), Ok(Outcome::Won(Player::X)));
        let before = game.snapshot();

        game.pass_turn();
        assert_eq!(game.snapshot(), before);
        assert!(game.snapshot().x_is_next);
    }
}
