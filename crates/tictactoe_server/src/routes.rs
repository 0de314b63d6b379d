//! HTTP routes for the shared game.

use crate::error::ApiError;
use crate::reply::outcome_message;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::routing::get;
use axum::{Json, Router};
use tictactoe_core::{Move, Snapshot, play};
use tower::ServiceBuilder;
use tracing::{info, instrument};

/// Builds the router serving `/game`.
///
/// - `GET /game` returns the snapshot
/// - `POST /game` plays a `{"x": row, "y": col}` move
/// - `DELETE /game` starts a new game and returns its snapshot
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/game", get(get_game).post(post_move).delete(reset_game))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(state)
}

fn log_request(req: Request) -> Request {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

#[instrument(skip_all)]
async fn get_game(State(state): State<AppState>) -> Result<Json<Snapshot>, ApiError> {
    let snapshot = state.with_game(|game| game.snapshot())?;
    Ok(Json(snapshot))
}

#[instrument(skip_all)]
async fn reset_game(State(state): State<AppState>) -> Result<Json<Snapshot>, ApiError> {
    let game = state.reset()?;
    Ok(Json(game.snapshot()))
}

#[instrument(skip_all)]
async fn post_move(
    State(state): State<AppState>,
    payload: Result<Json<Move>, JsonRejection>,
) -> Result<String, ApiError> {
    let Json(mv) = payload?;
    let outcome = state.with_game(|game| play(&mv, game))??;
    info!(%mv, ?outcome, "Move applied");
    Ok(outcome_message(&mv, &outcome))
}
