pub mod player;
pub mod team;

// Re-export all models for easy importing
pub use player::*;
pub use team::*;

use uuid::Uuid;

use crate::error::AppError;

/// Normalises a path identifier into the stored form.
///
/// Returns `None` when the value is not a UUID; such identifiers can never match a
/// stored record.
pub fn parse_record_id(raw: &str) -> Option<String> {
    Uuid::parse_str(raw.trim()).ok().map(|id| id.to_string())
}

pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Rejects a required string field that is absent or blank.
pub fn require_field(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}
