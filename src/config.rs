use anyhow::Result;
use std::env;
use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub trusted_proxies: Vec<IpAddr>,
    pub db_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        let database_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "soccer-api".to_string());

        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| format!("sqlite:./{}.db", database_name)),
            database_name,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("APP_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            trusted_proxies: parse_trusted_proxies(
                &env::var("TRUSTED_PROXIES").unwrap_or_else(|_| "127.0.0.1".to_string()),
            ),
            db_timeout_secs: env::var("DB_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Upper bound applied to every database operation.
    pub fn db_timeout(&self) -> Duration {
        Duration::from_secs(self.db_timeout_secs)
    }
}

/// Parses a comma separated list of addresses, skipping entries that are not IPs.
pub fn parse_trusted_proxies(raw: &str) -> Vec<IpAddr> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<IpAddr>() {
            Ok(ip) => Some(ip),
            Err(_) => {
                log::warn!("Ignoring invalid trusted proxy address: {}", entry);
                None
            }
        })
        .collect()
}
