use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use sqlx::{
    Sqlite,
    migrate::MigrateDatabase,
    sqlite::{SqlitePool, SqlitePoolOptions},
};

use crate::{config::Config, error::AppError};

pub mod models;
pub mod repositories;

pub const TEAM_COLLECTION: &str = "team";
pub const PLAYER_COLLECTION: &str = "player";

/// Shared handle to the document store.
///
/// Built once at startup and cloned into every repository; clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    timeout: Duration,
}

impl Database {
    /// Opens the pool, applies the table layout and pings the store.
    pub async fn connect(config: &Config) -> Result<Self> {
        let database_url = config.database_url.as_str();

        // Create database if it doesn't exist
        if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
            log::info!("Creating database {}", database_url);
            Sqlite::create_database(database_url).await?;
        }

        let pool = SqlitePoolOptions::new()
            .acquire_timeout(config.db_timeout())
            .connect(database_url)
            .await?;

        log::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;

        let database = Self {
            pool,
            timeout: config.db_timeout(),
        };
        database.ping().await?;

        log::info!("Connected to database '{}'", config.database_name);
        Ok(database)
    }

    pub fn collection(&self, name: &'static str) -> Collection {
        Collection {
            pool: self.pool.clone(),
            name,
            timeout: self.timeout,
        }
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        with_deadline(self.timeout, sqlx::query("SELECT 1").execute(&self.pool)).await?;
        Ok(())
    }

    /// Releases the pool. Calling it on a closed pool does nothing.
    pub async fn close(&self) {
        if self.pool.is_closed() {
            return;
        }

        self.pool.close().await;
        log::info!("Connection to database closed.");
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// A named table inside the store, carrying the pool and the operation deadline.
#[derive(Debug, Clone)]
pub struct Collection {
    pool: SqlitePool,
    name: &'static str,
    timeout: Duration,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn run<T, F>(&self, operation: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        with_deadline(self.timeout, operation).await
    }
}

/// Runs a store operation, failing with [`AppError::Timeout`] once `limit` elapses.
pub async fn with_deadline<T, F>(limit: Duration, operation: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result.map_err(AppError::from),
        Err(_) => {
            log::error!("Database operation exceeded deadline of {:?}", limit);
            Err(AppError::Timeout(limit))
        }
    }
}
