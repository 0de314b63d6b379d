//! Errors returned by the HTTP routes.

use crate::reply::rejection_message;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tictactoe_core::MoveError;
use tracing::{debug, error};

/// A request the server could not fulfil.
#[derive(Debug, derive_more::Display)]
pub enum ApiError {
    /// The rules engine rejected the move.
    #[display("{}", rejection_message(_0))]
    Move(MoveError),

    /// The request body was not a valid move.
    #[display("{_0}")]
    MalformedRequest(String),

    /// The game state lock was poisoned by a panicking request.
    #[display("game state unavailable")]
    StateUnavailable,
}

impl ApiError {
    /// Status code reported to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Move(_) | ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::StateUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::error::Error for ApiError {}

impl From<MoveError> for ApiError {
    fn from(err: MoveError) -> Self {
        ApiError::Move(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
            let reason = status.canonical_reason().unwrap_or("Internal Server Error");
            return (status, reason).into_response();
        }
        debug!(error = %self, "Request rejected");
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Move;

    #[test]
    fn test_move_errors_are_client_errors() {
        let mv = Move::new(0, 0);
        for err in [
            MoveError::GameOver { mv },
            MoveError::OutOfBounds { mv },
            MoveError::CellOccupied { mv },
        ] {
            assert_eq!(ApiError::from(err).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_poisoned_state_is_server_error() {
        let response = ApiError::StateUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
