// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;
#[cfg(test)]
mod test_support;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{anyhow, Context};
use config::Config;
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.log_level);
    }
    env_logger::init();

    for ignored in &config.ignored_values {
        log::warn!("{}", ignored);
    }

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        return Err(anyhow!("invalid configuration: {}", e));
    }

    log::info!("Starting transactions service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool; the service never serves without it
    let pool = config::init_db_pool(&config)
        .await
        .map_err(|e| {
            log::error!("Failed to connect to database: {}", e);
            e
        })
        .context("database not reachable at startup")?;

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let pool = web::Data::new(pool);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (database pool and config)
            .app_data(pool.clone())
            .app_data(config.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::transactions_config)
    })
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {}", server_addr))?
    .run()
    .await
    .context("HTTP server terminated with an error")
}
