#![allow(dead_code)]

use actix_web::{
    App, Error,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
};
use anyhow::Result;
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::SqlitePool;
use std::env;
use tempfile::TempDir;

use soccer_api::database::models::{Player, Team};
use soccer_api::handlers::shared::ApiResponse;
use soccer_api::{AppData, Config, Database, routes};

// Test database wrapper
pub struct TestDb {
    pub database: Database,
    pub config: Config,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config = test_config(format!("sqlite:{}/test.db", temp_dir.path().display()));
        let database = Database::connect(&config).await?;

        Ok(TestDb {
            database,
            config,
            _temp_dir: temp_dir,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        self.database.pool()
    }
}

pub fn test_config(database_url: String) -> Config {
    Config {
        database_url,
        database_name: "soccer-api-test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        trusted_proxies: vec!["127.0.0.1".parse().unwrap()],
        db_timeout_secs: 10,
    }
}

// Test application wrapper
pub struct TestApp {
    pub db: TestDb,
    pub app_data: AppData,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let db = TestDb::new().await?;
        let app_data = AppData::new(db.database.clone());

        Ok(TestApp { db, app_data })
    }

    /// Create an Actix web app configured like the server
    pub fn create_app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = Error,
            InitError = (),
        > + use<>,
    > {
        let app_data = self.app_data.clone();
        App::new()
            .configure(move |cfg| app_data.register(cfg))
            .configure(routes::configure)
    }
}

/// Mock data generators using the fake crate
pub struct MockData;

impl MockData {
    pub fn team_name() -> String {
        format!("{} FC", CompanyName().fake::<String>())
    }

    pub fn player_name() -> String {
        Name().fake()
    }
}

// Test assertion helpers
pub struct TestAssertions;

impl TestAssertions {
    pub fn assert_success_response<T>(body: &[u8]) -> T
    where
        T: DeserializeOwned,
    {
        let response: ApiResponse<T> =
            serde_json::from_slice(body).expect("Failed to parse JSON response");

        assert!(
            !response.error,
            "Expected successful response but got error: {}",
            response.message
        );
        response.data
    }

    pub fn assert_error_response(body: &[u8]) -> String {
        let response: Value = serde_json::from_slice(body).expect("Failed to parse JSON response");

        assert_eq!(response["error"], true, "Response should be an error");
        assert_eq!(response["data"], serde_json::json!({}));
        response["message"]
            .as_str()
            .expect("Error should have a string message")
            .to_string()
    }

    pub async fn assert_record_count(pool: &SqlitePool, table: &str, expected_count: i64) {
        let query = format!("SELECT COUNT(*) as count FROM {}", table);
        let result = sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(pool)
            .await
            .expect("Failed to count records");

        assert_eq!(
            result, expected_count,
            "Expected {} records in {} table, but found {}",
            expected_count, table, result
        );
    }
}

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}

impl TestApp {
    /// Insert a team directly, bypassing the HTTP layer
    pub async fn insert_team(&self, name: &str) -> Team {
        let team = Team::new(name.to_string());
        self.app_data
            .teams
            .create_team(&team)
            .await
            .expect("Failed to insert test team");
        team
    }

    /// Insert a player directly, bypassing the HTTP layer
    pub async fn insert_player(&self, name: &str, team_id: &str) -> Player {
        let player = Player::new(name.to_string(), team_id.to_string());
        self.app_data
            .players
            .create_player(&player)
            .await
            .expect("Failed to insert test player");
        player
    }
}
