//! Win detection logic for tic-tac-toe.

use crate::types::SIZE;
use crate::{GameState, Move, Player};
use tracing::instrument;

/// Reports whether `player` has won after playing `last_move`.
///
/// A win is either:
/// - the whole of `last_move`'s row AND the whole of its column hold
///   `player`'s mark, or
/// - the main diagonal `(0,0) (1,1) (2,2)` holds `player`'s mark, wherever
///   `last_move` was.
///
/// The anti-diagonal is not checked. A `last_move` off the board only gets
/// the diagonal check.
#[instrument(skip(state))]
pub fn player_won(player: Player, last_move: &Move, state: &GameState) -> bool {
    let board = state.board();
    let owns = |row: usize, col: usize| board.get(row, col).is_some_and(|s| s.is(player));

    let line_win = last_move
        .cell()
        .is_some_and(|(row, col)| (0..SIZE).all(|i| owns(row, i) && owns(i, col)));

    let diagonal_win = (0..SIZE).all(|i| owns(i, i));

    line_win || diagonal_win
}
