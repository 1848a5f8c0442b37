use actix_web::web;
use tracing::warn;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod guess;
pub mod health;
pub mod scores;
pub mod technologies;

/// Register every application route.
///
/// `main.rs` wraps these with the CORS and tracing middleware; tests mount
/// the same function on a bare test app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(technologies::configure_routes)
        .configure(guess::configure_routes)
        .configure(scores::configure_routes);
}

/// JSON body errors become 400 Problem Details instead of actix's plain text.
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "rejected JSON body");
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid JSON body: {err}")).into()
    })
}

/// A catalog index that is not an integer cannot name a technology.
pub(crate) fn index_path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::not_found(
            ErrorCode::TechnologyNotFound,
            format!("Technology not found: {err}"),
        )
        .into()
    })
}
