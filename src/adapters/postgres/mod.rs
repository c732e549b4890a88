//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresClientRepository` - client/project reads and client edits
//! - `connect_pool` - builds the pool from `DatabaseConfig`

mod client_repository;

pub use client_repository::PostgresClientRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Opens a connection pool sized and timed from configuration.
pub async fn connect_pool(config: &DatabaseConfig, url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(url)
        .await
}
