use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Body shape shared by every endpoint.
///
/// `error` is false exactly when the status is 2xx. Error bodies carry an empty
/// object in `data`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub error: bool,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            data,
            error: false,
            message: message.to_string(),
        }
    }

    /// 200 with data
    pub fn ok(data: T, message: &str) -> HttpResponse {
        HttpResponse::Ok().json(Self::success(data, message))
    }

    /// 201 with data
    pub fn created(data: T, message: &str) -> HttpResponse {
        HttpResponse::Created().json(Self::success(data, message))
    }
}

impl ApiResponse<Map<String, Value>> {
    pub fn error(message: &str) -> Self {
        Self {
            data: Map::new(),
            error: true,
            message: message.to_string(),
        }
    }
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Resource not found".to_string()))
}

/// Insert acknowledgment returned by the create endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertResult {
    pub inserted_id: String,
}
