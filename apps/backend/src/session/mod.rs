//! Client-side game session.
//!
//! A [`GameSession`] holds everything one player's game needs between calls;
//! the [`GameController`] moves it through `Init -> InProgress -> Finished`
//! using a [`QuizApi`] transport.

pub mod api;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

pub use api::{QuizApi, QuizError};

use crate::domain::guess::normalize_guess;
use crate::protocol::{GuessRequest, GuessResponse, DEFAULT_PLAYER_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    InProgress,
    Finished,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] QuizError),
    #[error("a guess is pending for technology {index}")]
    GuessPending { index: i64 },
    #[error("no technology is on screen")]
    NothingToGuess,
    #[error("the game is over")]
    Finished,
}

/// State of one player's game. Never persisted.
#[derive(Debug, Clone)]
pub struct GameSession {
    player_name: String,
    current_index: i64,
    total_count: Option<i64>,
    phase: Phase,
    current_image: Option<String>,
    final_score: Option<i64>,
}

impl GameSession {
    /// Start a session. The name is trimmed; a blank name plays as `Guest`.
    pub fn new(player_name: &str) -> Self {
        let trimmed = player_name.trim();
        let player_name = if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            trimmed.to_string()
        };

        Self {
            player_name,
            current_index: 0,
            total_count: None,
            phase: Phase::Init,
            current_image: None,
            final_score: None,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn current_index(&self) -> i64 {
        self.current_index
    }

    pub fn total_count(&self) -> Option<i64> {
        self.total_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Image currently shown, set by `advance` and cleared by a guess.
    pub fn current_image(&self) -> Option<&str> {
        self.current_image.as_deref()
    }

    /// True between showing an image and submitting the guess for it.
    pub fn awaiting_guess(&self) -> bool {
        self.current_image.is_some()
    }

    /// Score to show once finished. Missing scores display as 0.
    pub fn display_score(&self) -> i64 {
        self.final_score.unwrap_or(0)
    }
}

/// What a call to [`GameController::advance`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Reveal { index: i64, image: String },
    Finished { score: Option<i64> },
}

pub struct GameController {
    api: Arc<dyn QuizApi>,
}

impl GameController {
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self { api }
    }

    /// Show the next technology, or finish the game once the index reaches
    /// the catalog size.
    ///
    /// The first call fetches and caches the catalog size. An empty catalog
    /// finishes on that first call.
    pub async fn advance(&self, session: &mut GameSession) -> Result<Advance, SessionError> {
        match session.phase {
            Phase::Finished => {
                return Ok(Advance::Finished {
                    score: session.final_score,
                })
            }
            Phase::Init => {
                let total = self.api.technology_count().await?;
                debug!(total, "catalog size fetched");
                session.total_count = Some(total);
                session.phase = Phase::InProgress;
            }
            Phase::InProgress => {}
        }

        if session.awaiting_guess() {
            return Err(SessionError::GuessPending {
                index: session.current_index,
            });
        }

        let total = session.total_count.unwrap_or(0);
        if session.current_index >= total {
            let score = self.finish(session).await?;
            return Ok(Advance::Finished { score });
        }

        let index = session.current_index;
        let image = self.api.technology_image(index).await?;
        session.current_image = Some(image.clone());
        Ok(Advance::Reveal { index, image })
    }

    /// Submit a guess for the technology on screen and move to the next
    /// index. The guess is normalized before it leaves the client.
    ///
    /// On a transport error the session is left unchanged, so the same guess
    /// can be retried.
    pub async fn submit_guess(
        &self,
        session: &mut GameSession,
        raw_guess: &str,
    ) -> Result<GuessResponse, SessionError> {
        if session.phase == Phase::Finished {
            return Err(SessionError::Finished);
        }
        if !session.awaiting_guess() {
            return Err(SessionError::NothingToGuess);
        }

        let request = GuessRequest {
            index: session.current_index,
            guessed_name: normalize_guess(raw_guess),
            player_name: session.player_name.clone(),
        };
        let response = self.api.submit_guess(&request).await?;

        session.current_image = None;
        session.current_index += 1;
        Ok(response)
    }

    /// Fetch the player's scores and keep the value to display.
    ///
    /// A fallback to the whole ledger shows the last entry's value, which may
    /// belong to another player.
    async fn finish(&self, session: &mut GameSession) -> Result<Option<i64>, SessionError> {
        let view = self.api.scores(&session.player_name).await?;
        let score = view.display_value();

        info!(
            player = %session.player_name,
            score = score.unwrap_or(0),
            fallback = view.is_fallback(),
            "game finished"
        );

        session.final_score = score;
        session.phase = Phase::Finished;
        Ok(score)
    }
}
