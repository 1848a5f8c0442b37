//! Score lookup routes.

use actix_web::{web, Result};

use crate::domain::ledger::ScoresView;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /api/scores/{name}
///
/// A bare array when the player has an entry; the whole `{ "scores": [...] }`
/// document otherwise.
async fn get_player_scores(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScoresView>, AppError> {
    let name = path.into_inner();
    Ok(web::Json(app_state.score_ledger().get(&name).await?))
}

/// GET /api/scores/ with an empty name always yields the whole ledger.
async fn get_all_scores(app_state: web::Data<AppState>) -> Result<web::Json<ScoresView>, AppError> {
    Ok(web::Json(app_state.score_ledger().get("").await?))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/scores/").route(web::get().to(get_all_scores)));
    cfg.service(web::resource("/api/scores/{name}").route(web::get().to(get_player_scores)));
}
