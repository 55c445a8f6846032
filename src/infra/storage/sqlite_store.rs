use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::domain::ports::DeviceStore;
use crate::error::ClientError;

/// SQLite-backed device key-value store. Values are plain strings with
/// no schema versioning, booleans included.
pub struct SqliteDeviceStore {
    pool: SqlitePool,
}

impl SqliteDeviceStore {
    pub async fn open(path: &str) -> Result<Self, ClientError> {
        let opts = SqliteConnectOptions::from_str(&format!("sqlite://{path}"))
            .map_err(ClientError::Storage)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| ClientError::Internal(format!("Device store migration failed: {e}")))?;

        info!("Device store opened at {}", path);
        Ok(Self { pool })
    }
}

#[async_trait]
impl DeviceStore for SqliteDeviceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM device_store WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        sqlx::query(
            r#"INSERT INTO device_store (key, value, updated_at)
               VALUES (?, ?, ?)
               ON CONFLICT(key) DO UPDATE SET
               value=excluded.value,
               updated_at=excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ClientError> {
        sqlx::query("DELETE FROM device_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
