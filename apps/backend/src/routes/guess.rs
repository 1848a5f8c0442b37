//! Guess submission route.

use actix_web::{web, Result};
use tracing::info;

use crate::error::AppError;
use crate::protocol::{GuessRequest, GuessResponse};
use crate::state::app_state::AppState;

/// POST /api/guess
///
/// Judges the guess, records the outcome (a miss records zero points) and
/// reveals the true name.
async fn post_guess(
    req: web::Json<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GuessResponse>, AppError> {
    let GuessRequest {
        index,
        guessed_name,
        player_name,
    } = req.into_inner();

    let outcome = app_state
        .guess_service()
        .submit(index, &guessed_name, &player_name)
        .await?;

    info!(
        index,
        player = %player_name,
        correct = outcome.is_correct,
        delta = outcome.delta,
        "guess submitted"
    );

    Ok(web::Json(GuessResponse {
        is_correct: outcome.is_correct,
        technology_name: outcome.technology_name,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/guess")
            .app_data(super::json_config())
            .route(web::post().to(post_guess)),
    );
}
