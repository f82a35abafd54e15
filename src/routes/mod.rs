use actix_web::web;

use crate::{
    error::AppError,
    handlers::{health, shared},
};

pub mod players;
pub mod teams;

/// JSON bodies that fail to parse come back as enveloped 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(health::hello))
        .route("/health", web::get().to(health::health))
        .service(
            web::scope("/api/v1")
                .configure(teams::configure)
                .configure(players::configure),
        )
        .default_service(web::to(shared::not_found));
}
