//! Tic-tac-toe board state and rules engine.
//!
//! A pure, in-memory state machine with no I/O and no internal locking.
//! A transport layer owns one [`GameState`], feeds moves to [`play`] (or to
//! [`apply_move`] and [`player_won`] directly) and reports the result.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Move, Outcome, Player, new_game, play};
//!
//! let mut game = new_game();
//! let outcome = play(&Move::new(1, 1), &mut game).expect("legal move");
//! assert_eq!(outcome, Outcome::Continue { next: Player::O });
//! assert_eq!(game.snapshot().board[1][1], "X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use game::{Outcome, play};
pub use rules::{apply_move, player_won};
pub use state::{GameState, Snapshot, new_game};
pub use types::{Board, Player, Square};
