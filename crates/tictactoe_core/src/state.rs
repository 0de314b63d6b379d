//! Board state: the grid, whose turn it is, and whether the game is over.

use super::types::{Board, Player, SIZE, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of the single game a host is running.
///
/// The grid only changes through [`crate::apply_move`]; `game_over` only
/// ever goes from false to true. Starting over means replacing the value
/// with [`new_game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    game_over: bool,
    turn_owner: Player,
    board: Board,
}

/// Creates a fresh game: empty board, X to move, not over.
#[instrument]
pub fn new_game() -> GameState {
    GameState::new()
}

impl GameState {
    /// Creates a fresh game.
    pub fn new() -> Self {
        Self {
            game_over: false,
            turn_owner: Player::FIRST,
            board: Board::new(),
        }
    }

    /// Resumes play from an existing board with `turn_owner` to move.
    #[cfg(test)]
    pub(crate) fn from_board(board: Board, turn_owner: Player) -> Self {
        Self {
            game_over: false,
            turn_owner,
            board,
        }
    }

    /// Returns true once a win has been recorded.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the player whose move is legal next.
    pub fn turn_owner(&self) -> Player {
        self.turn_owner
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marks the game as decided. Calling it again has no effect.
    #[instrument(skip(self))]
    pub fn finish(&mut self) {
        debug!(winner = %self.turn_owner, "Game over");
        self.game_over = true;
    }

    /// Hands the move to the other player. A finished game keeps its turn.
    pub fn pass_turn(&mut self) {
        if self.game_over {
            return;
        }
        self.turn_owner = self.turn_owner.opponent();
    }

    /// Writes `player`'s mark at an on-board cell.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        let placed = self.board.set(row, col, Square::Occupied(player));
        debug_assert!(placed, "place called with off-board cell");
    }

    /// Returns a read-only view in the shape clients see.
    pub fn snapshot(&self) -> Snapshot {
        let rows = self.board.rows();
        Snapshot {
            game_over: self.game_over,
            x_is_next: self.turn_owner == Player::X,
            board: std::array::from_fn(|r| std::array::from_fn(|c| rows[r][c].to_string())),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Externally visible game state.
///
/// Serializes as `{"gameOver": .., "xIsNext": .., "board": [[..]]}` with
/// `""` for empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// True once a win has been recorded.
    pub game_over: bool,
    /// True when X moves next.
    pub x_is_next: bool,
    /// Cell marks by row, `"X"`, `"O"` or `""`.
    pub board: [[String; SIZE]; SIZE],
}
