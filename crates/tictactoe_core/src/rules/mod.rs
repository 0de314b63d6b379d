//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`GameState`](crate::GameState): move validation and
//! application, and win detection. Neither flips the turn nor ends the game;
//! see [`crate::play`] for that.

mod apply;
mod win;

pub use apply::apply_move;
pub use win::player_won;
