//! Move validation and application.

use crate::{GameState, Move, MoveError};
use tracing::{debug, instrument};

/// Validates `mv` against `state` and writes the turn owner's mark.
///
/// Checks run in order and the first failure wins: game over, then
/// coordinates off the board, then the cell already taken. On success
/// exactly one cell changes; turn and game-over flag are left alone.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`], [`MoveError::OutOfBounds`] or
/// [`MoveError::CellOccupied`], leaving `state` untouched.
#[instrument(skip(state), fields(player = %state.turn_owner()))]
pub fn apply_move(mv: &Move, state: &mut GameState) -> Result<(), MoveError> {
    if state.game_over() {
        return Err(MoveError::GameOver { mv: *mv });
    }

    let (row, col) = mv.cell().ok_or(MoveError::OutOfBounds { mv: *mv })?;

    if !state.board().is_empty(row, col) {
        return Err(MoveError::CellOccupied { mv: *mv });
    }

    let player = state.turn_owner();
    state.place(row, col, player);
    debug!(row, col, %player, "Mark placed");
    Ok(())
}
