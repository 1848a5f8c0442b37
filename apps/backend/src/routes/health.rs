use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::state::app_state::AppState;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("Hello from TechGuess! Guess the technology from its logo."))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    catalog: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog_size: Option<usize>,
    ledger: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Reports whether both data documents are currently readable. Always 200;
/// the per-document fields carry the detail.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let app_version = env!("CARGO_PKG_VERSION").to_string();
    let mut errors = Vec::new();

    let (catalog, catalog_size) = match app_state.catalog.load().await {
        Ok(records) => ("ok".to_string(), Some(records.len())),
        Err(e) => {
            errors.push(format!("catalog: {e}"));
            ("error".to_string(), None)
        }
    };

    let ledger = match app_state.ledger.read_all().await {
        Ok(_) => "ok".to_string(),
        Err(e) => {
            errors.push(format!("ledger: {e}"));
            "error".to_string()
        }
    };

    let response = HealthResponse {
        status: if errors.is_empty() { "ok" } else { "degraded" }.to_string(),
        app_version,
        catalog,
        catalog_size,
        ledger,
        error: (!errors.is_empty()).then(|| errors.join("; ")),
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}
