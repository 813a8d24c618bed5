// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup and health-check the PostgreSQL connection pool

use crate::config::Config;
use crate::db::{Deadline, StoreError};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Connection;
use std::time::Duration;

/// Pool settings shared by eager and lazy construction
fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        // Maximum concurrent connections
        .max_connections(config.db_max_connections)
        // Timeout waiting for connection from pool
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
}

/// Initialize PostgreSQL connection pool
/// DOCUMENTATION: Connects and verifies the store within DB_CONNECTION_TIMEOUT
/// Called once during application startup in main.rs; failure is fatal there
pub async fn init_db_pool(config: &Config) -> Result<PgPool, StoreError> {
    log::info!(
        "Initializing database pool: {}",
        config.redacted_database_url()
    );

    let deadline = Deadline::after(Duration::from_secs(config.db_connection_timeout));

    let pool = deadline
        .run(pool_options(config).connect(&config.database_url))
        .await?;

    // Verify connection works
    deadline
        .run(async { sqlx::query("SELECT 1").execute(&pool).await.map(|_| ()) })
        .await?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}

/// Build the pool without opening any connection
/// DOCUMENTATION: Connections are established on first acquire
#[cfg(test)]
pub fn lazy_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect_lazy(&config.database_url)
}

/// Check that a pooled connection can be acquired and answers a ping
/// DOCUMENTATION: Used by GET /health/ready
pub async fn ping_db(pool: &PgPool, timeout: Duration) -> Result<(), StoreError> {
    let deadline = Deadline::after(timeout);
    let mut conn = deadline.run(pool.acquire()).await?;
    deadline.run(conn.ping()).await
}
