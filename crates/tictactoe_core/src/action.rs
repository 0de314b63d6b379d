//! Move requests and the ways they can be rejected.

use super::types::SIZE;
use serde::{Deserialize, Serialize};

/// A request to claim the cell at `(row, col)`.
///
/// Coordinates are signed so that any integer a client sends reaches the
/// rules engine and is rejected there. On the wire the row is `x` and the
/// column is `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Row index, valid range `0..=2`.
    #[serde(rename = "x")]
    pub row: i64,
    /// Column index, valid range `0..=2`.
    #[serde(rename = "y")]
    pub col: i64,
}

impl Move {
    /// Returns board indices if both coordinates are on the board.
    pub fn cell(&self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok().filter(|r| *r < SIZE)?;
        let col = usize::try_from(self.col).ok().filter(|c| *c < SIZE)?;
        Some((row, col))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x:{}, y:{})", self.row, self.col)
    }
}

/// Reason a move was rejected. Every variant is a client error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already been decided.
    #[display("invalid move {mv} game is over")]
    GameOver {
        /// The rejected move.
        mv: Move,
    },

    /// A coordinate lies outside `0..=2`.
    #[display("invalid move {mv} 0 <= x,y <= 2")]
    OutOfBounds {
        /// The rejected move.
        mv: Move,
    },

    /// The target cell already holds a mark.
    #[display("invalid move {mv} already occupied")]
    CellOccupied {
        /// The rejected move.
        mv: Move,
    },
}

impl MoveError {
    /// Returns the move that was rejected.
    pub fn rejected(&self) -> Move {
        match self {
            MoveError::GameOver { mv }
            | MoveError::OutOfBounds { mv }
            | MoveError::CellOccupied { mv } => *mv,
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_in_bounds() {
        assert_eq!(Move::new(0, 2).cell(), Some((0, 2)));
        assert_eq!(Move::new(2, 0).cell(), Some((2, 0)));
    }

    #[test]
    fn test_cell_out_of_bounds() {
        assert_eq!(Move::new(3, 0).cell(), None);
        assert_eq!(Move::new(0, -1).cell(), None);
        assert_eq!(Move::new(i64::MIN, i64::MAX).cell(), None);
    }

    #[test]
    fn test_wire_names() {
        let mv: Move = serde_json::from_str(r#"{"x": 1, "y": 2}"#).unwrap();
        assert_eq!(mv, Move::new(1, 2));
    }

    #[test]
    fn test_error_messages() {
        let mv = Move::new(5, 0);
        assert_eq!(
            MoveError::OutOfBounds { mv }.to_string(),
            "invalid move (x:5, y:0) 0 <= x,y <= 2"
        );
        assert_eq!(
            MoveError::CellOccupied { mv: Move::new(0, 0) }.to_string(),
            "invalid move (x:0, y:0) already occupied"
        );
        assert_eq!(
            MoveError::GameOver { mv: Move::new(1, 1) }.to_string(),
            "invalid move (x:1, y:1) game is over"
        );
    }

    #[test]
    fn test_rejected_move_is_preserved() {
        let mv = Move::new(-1, 4);
        assert_eq!(MoveError::OutOfBounds { mv }.rejected(), mv);
    }
}
