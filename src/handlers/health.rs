use actix_web::{HttpResponse, Result, web};
use serde_json::json;

use crate::{database::Database, handlers::shared::ApiResponse};

pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "data": "Hello World" }))
}

/// Pings the store; an unreachable store is a 500.
pub async fn health(database: web::Data<Database>) -> Result<HttpResponse> {
    database.ping().await?;

    Ok(ApiResponse::ok(
        json!({
            "status": "ok",
            "timestamp": chrono::Utc::now()
        }),
        "Database reachable",
    ))
}
