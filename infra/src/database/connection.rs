//! MySQL pool and the embedded schema applied at startup

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    MySqlPool,
};
use std::str::FromStr;
use std::time::Duration;
use tm_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Schema applied by [`DatabasePool::run_migrations`]
const INIT_SCHEMA: &str = include_str!("../../migrations/0001_init.sql");

/// Shared handle to the MySQL pool; clones share connections
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connect using `config`; fails with `Config` when no URL is set
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| InfrastructureError::Config("DATABASE_URL is not set".to_string()))?;

        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to MySQL"
        );

        let connect_options = MySqlConnectOptions::from_str(url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?;

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "MySQL connection failed");
                InfrastructureError::Database(e)
            })?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Check if the database answers a trivial query
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let value: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Database health check failed");
                InfrastructureError::Database(e)
            })?;
        Ok(value == 1)
    }

    pub async fn close(&self) {
        tracing::info!(open = self.pool.size(), idle = self.pool.num_idle(), "Closing MySQL pool");
        self.pool.close().await;
    }

    /// Apply the embedded schema
    ///
    /// Every statement is `CREATE TABLE IF NOT EXISTS`, so reruns are no-ops.
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        let statements = schema_statements(INIT_SCHEMA);
        for statement in &statements {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        tracing::info!(statements = statements.len(), "Schema applied");
        Ok(())
    }
}

/// Split a schema file into executable statements, dropping comments
fn schema_statements(schema: &str) -> Vec<String> {
    let without_comments: String = schema
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    without_comments
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
