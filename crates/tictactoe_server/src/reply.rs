//! Text replies shared by the HTTP routes and the terminal game.

use tictactoe_core::{Move, MoveError, Outcome};

/// Message for a move the engine accepted.
pub fn outcome_message(mv: &Move, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Won(player) => format!("Player {} wins! DELETE /game to reset", player),
        Outcome::Continue { .. } => format!("Move (x:{}, y:{}) applied", mv.row, mv.col),
    }
}

/// Message for a move the engine rejected.
pub fn rejection_message(err: &MoveError) -> String {
    match err {
        MoveError::GameOver { .. } => format!("{}. DELETE /game to reset.", err),
        MoveError::OutOfBounds { .. } | MoveError::CellOccupied { .. } => err.to_string(),
    }
}
