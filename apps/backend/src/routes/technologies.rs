//! Catalog HTTP routes.

use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::protocol::TechnologyImageResponse;
use crate::state::app_state::AppState;

/// GET /api/technologies
///
/// Returns the catalog size as a bare JSON integer so the client knows where
/// the game ends without probing for a 404.
async fn get_technology_count(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let count = app_state.catalog_service().count().await?;
    Ok(HttpResponse::Ok().json(count))
}

/// GET /api/technology/{index}
///
/// Returns only the image reference; the name stays server-side until a
/// guess is submitted.
async fn get_technology_image(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TechnologyImageResponse>, AppError> {
    let index = path.into_inner();
    let image = app_state.catalog_service().image_at(index).await?;
    Ok(web::Json(TechnologyImageResponse { image }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/technologies").route(web::get().to(get_technology_count)));
    cfg.service(
        web::resource("/api/technology/{index}")
            .app_data(super::index_path_config())
            .route(web::get().to(get_technology_image)),
    );
}
