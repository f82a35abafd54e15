use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Team, new_record_id, require_field};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub team_id: String,
    /// Resolved team, if the reference points at an existing one.
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Box<Team>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    pub fn new(name: String, team_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: new_record_id(),
            name,
            team_id,
            team: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_team(mut self, team: Option<Team>) -> Self {
        self.team = team.map(Box::new);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub team_id: String,
}

impl PlayerInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require_field("name", &self.name)?;
        require_field("team_id", &self.team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn input_requires_name_and_team_id() {
        let missing_team: PlayerInput = serde_json::from_str(r#"{"name":"Cruyff"}"#).unwrap();
        assert_eq!(
            missing_team.validate().unwrap_err().to_string(),
            "Bad request: team_id is required"
        );

        let missing_name: PlayerInput = serde_json::from_str(r#"{"team_id":"x"}"#).unwrap();
        assert_eq!(
            missing_name.validate().unwrap_err().to_string(),
            "Bad request: name is required"
        );

        let complete: PlayerInput =
            serde_json::from_str(r#"{"name":"Cruyff","team_id":"x"}"#).unwrap();
        assert!(complete.validate().is_ok());
    }

    #[test]
    fn unresolved_team_is_omitted() {
        let player = Player::new("Cruyff".to_string(), "missing".to_string()).with_team(None);
        let json = serde_json::to_value(&player).unwrap();

        assert!(json.get("team").is_none());
        assert_eq!(json["team_id"], "missing");
    }
}
