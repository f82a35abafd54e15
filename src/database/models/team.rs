use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Player, new_record_id, require_field};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Filled only by the with-players read.
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: new_record_id(),
            name,
            players: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamInput {
    #[serde(default)]
    pub name: String,
}

impl TeamInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require_field("name", &self.name)
    }
}
