use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Result;

use soccer_api::middleware::{ClientIpMiddleware, TrustedProxies, client_ip::log_client_ip};
use soccer_api::{AppData, Config, Database, routes};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    log::info!("Starting soccer API server...");

    let config = Config::from_env()?;
    log::info!(
        "Configuration loaded (environment: {})",
        config.environment
    );
    if config.is_development() {
        log::debug!("Database URL: {}", config.database_url);
        log::debug!("Trusted proxies: {:?}", config.trusted_proxies);
    }

    let database = match Database::connect(&config).await {
        Ok(database) => database,
        Err(err) => {
            log::error!("Could not connect to database {}: {}", config.database_url, err);
            return Err(err);
        }
    };

    let app_data = AppData::new(database.clone());
    let trusted_proxies = TrustedProxies::new(config.trusted_proxies.clone());

    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    let result = HttpServer::new(move || {
        App::new()
            .configure(|cfg| app_data.register(cfg))
            .wrap(
                Logger::new(r#"%{client_ip}xi "%r" %s %b "%{User-Agent}i" %T"#)
                    .custom_request_replace("client_ip", log_client_ip),
            )
            .wrap(ClientIpMiddleware::new(trusted_proxies.clone()))
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e));

    database.close().await;

    result
}
