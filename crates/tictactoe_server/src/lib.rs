//! REST server hosting a single shared tic-tac-toe game.
//!
//! # Architecture
//!
//! - **Config**: TOML file, then `HOST`/`PORT` environment, then CLI flags
//! - **State**: the one [`tictactoe_core::GameState`] behind a mutex
//! - **Routes**: `GET`, `POST` and `DELETE` on `/game`
//! - **Local**: the same game driven from a terminal

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;
mod local;
mod reply;
mod routes;
mod server;
mod state;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use local::run_local;
pub use reply::{outcome_message, rejection_message};
pub use routes::router;
pub use server::serve;
pub use state::AppState;
