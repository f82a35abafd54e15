use chrono::Utc;

use crate::{
    database::{Collection, models::Team},
    error::AppError,
};

#[derive(Debug, Clone)]
pub struct TeamRepository {
    collection: Collection,
}

impl TeamRepository {
    pub fn new(collection: Collection) -> Self {
        Self { collection }
    }

    pub async fn create_team(&self, team: &Team) -> Result<(), AppError> {
        let query = format!(
            "INSERT INTO {} (id, name, created_at, updated_at) VALUES (?, ?, ?, ?)",
            self.collection.name()
        );

        self.collection
            .run(
                sqlx::query(&query)
                    .bind(&team.id)
                    .bind(&team.name)
                    .bind(team.created_at)
                    .bind(team.updated_at)
                    .execute(self.collection.pool()),
            )
            .await?;

        Ok(())
    }

    /// `id` must already be in stored form, see `parse_record_id`.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Team>, AppError> {
        let query = format!(
            "SELECT id, name, created_at, updated_at FROM {} WHERE id = ?",
            self.collection.name()
        );

        self.collection
            .run(
                sqlx::query_as::<_, Team>(&query)
                    .bind(id)
                    .fetch_optional(self.collection.pool()),
            )
            .await
    }

    /// Sets the name and bumps `updated_at`. Returns the number of matched rows.
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

    pub async fn delete_team(&self, id: &str) -> Result<bool, AppError> {
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

    pub async fn list_teams(&self, limit: i64) -> Result<Vec<Team>, AppError> {
        let query = format!(
            "SELECT id, name, created_at, updated_at FROM {} LIMIT ?",
            self.collection.name()
        );

        self.collection
            .run(
                sqlx::query_as::<_, Team>(&query)
                    .bind(limit)
                    .fetch_all(self.collection.pool()),
            )
            .await
    }
}
