use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ledger::ScoresView;
use crate::protocol::{GuessRequest, GuessResponse};

/// Failure talking to the game server.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("technology {index} not found")]
    NotFound { index: i64 },
    #[error("server error {status}: {detail}")]
    Server { status: u16, detail: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// The four calls a game session makes against the server.
#[async_trait]
pub trait QuizApi: Send + Sync {
    async fn technology_count(&self) -> Result<i64, QuizError>;

    async fn technology_image(&self, index: i64) -> Result<String, QuizError>;

    async fn submit_guess(&self, request: &GuessRequest) -> Result<GuessResponse, QuizError>;

    async fn scores(&self, player_name: &str) -> Result<ScoresView, QuizError>;
}
