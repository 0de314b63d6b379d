//! The shared game behind the HTTP routes.

use crate::error::ApiError;
use std::sync::{Arc, Mutex};
use tictactoe_core::{GameState, new_game};
use tracing::{info, instrument};

/// Handle to the one game the server hosts.
///
/// Clones share the same game. Every access holds the lock for the whole
/// read-modify-write.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    game: Arc<Mutex<GameState>>,
}

impl AppState {
    /// Creates state holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating shared game state");
        Self::default()
    }

    /// Runs `f` with exclusive access to the game.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StateUnavailable`] if the lock is poisoned.
    pub fn with_game<T>(&self, f: impl FnOnce(&mut GameState) -> T) -> Result<T, ApiError> {
        let mut game = self.game.lock().map_err(|_| ApiError::StateUnavailable)?;
        Ok(f(&mut game))
    }

    /// Replaces the game with a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<GameState, ApiError> {
        info!("Resetting game");
        self.with_game(|game| {
            *game = new_game();
            game.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Move, play};

    #[test]
    fn test_clones_share_game() {
        let state = AppState::new();
        let other = state.clone();
        state
            .with_game(|game| play(&Move::new(1, 1), game))
            .unwrap()
            .unwrap();
        let occupied = other.with_game(|game| game.board().occupied()).unwrap();
        assert_eq!(occupied, 1);
    }

    #[test]
    fn test_reset_clears_board() {
        let state = AppState::new();
        state
            .with_game(|game| play(&Move::new(0, 0), game))
            .unwrap()
            .unwrap();
        let fresh = state.reset().unwrap();
        assert_eq!(fresh, GameState::new());
    }

    #[test]
    fn test_poisoned_lock_reported() {
        let state = AppState::new();
        let poisoner = state.clone();
        let _ = std::thread::spawn(move || {
            poisoner
                .with_game(|game| {
                    if !game.game_over() {
                        panic!("handler panicked");
                    }
                })
                .unwrap();
        })
        .join();

        assert!(matches!(
            state.with_game(|game| game.snapshot()),
            Err(ApiError::StateUnavailable)
        ));
    }
}
