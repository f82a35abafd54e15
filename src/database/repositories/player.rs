use chrono::Utc;

use crate::{
    database::{Collection, models::Player},
    error::AppError,
};

#[derive(Debug, Clone)]
pub struct PlayerRepository {
    collection: Collection,
}

impl PlayerRepository {
    pub fn new(collection: Collection) -> Self {
        Self { collection }
    }

    pub async fn create_player(&self, player: &Player) -> Result<(), AppError> {
        let query = format!(
            "INSERT INTO {} (id, name, team_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
            self.collection.name()
        );

        self.collection
            .run(
                sqlx::query(&query)
                    .bind(&player.id)
                    .bind(&player.name)
                    .bind(&player.team_id)
                    .bind(player.created_at)
                    .bind(player.updated_at)
                    .execute(self.collection.pool()),
            )
            .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Player>, AppError> {
        let query = format!(
            "SELECT id, name, team_id, created_at, updated_at FROM {} WHERE id = ?",
            self.collection.name()
        );

        self.collection
            .run(
                sqlx::query_as::<_, Player>(&query)
                    .bind(id)
                    .fetch_optional(self.collection.pool()),
            )
            .await
    }

    /// Every player referencing `team_id`, oldest first.
    pub async fn find_by_team(&self, team_id: &str) -> Result<Vec<Player>, AppError> {
        let query = format!(
            "SELECT id, name, team_id, created_at, updated_at FROM {} WHERE team_id = ? ORDER BY created_at",
            self.collection.name()
        );

        self.collection
            .run(
                sqlx::query_as::<_, Player>(&query)
                    .bind(team_id)
                    .fetch_all(self.collection.pool()),
            )
            .await
    }

    // team_id is immutable
    pub async fn update_name(&self, id: &str, name: &str) -> Result<u64, AppError> {
        let query = format!(
            "UPDATE {} SET name = ?, updated_at = ? WHERE id = ?",
            self.collection.name()
        );

        let result = self
            .collection
            .run(
                sqlx::query(&query)
                    .bind(name)
                    .bind(Utc::now())
                    .bind(id)
                    .execute(self.collection.pool()),
            )
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_player(&self, id: &str) -> Result<bool, AppError> {
        let query = format!("DELETE FROM {} WHERE id = ?", self.collection.name());

        let result = self
            .collection
            .run(
                sqlx::query(&query)
                    .bind(id)
                    .execute(self.collection.pool()),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_players(&self, limit: i64) -> Result<Vec<Player>, AppError> {
        let query = format!(
            "SELECT id, name, team_id, created_at, updated_at FROM {} LIMIT ?",
            self.collection.name()
        );

        self.collection
            .run(
                sqlx::query_as::<_, Player>(&query)
                    .bind(limit)
                    .fetch_all(self.collection.pool()),
            )
            .await
    }
}
