use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::SecondsFormat;
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

use crate::models::call_log_model::CallLogEntry;

/// Almacén append-only de llamadas. `insert` devuelve el id asignado.
#[async_trait]
pub trait CallLogStore: Send + Sync {
    async fn insert(&self, entry: &CallLogEntry) -> Result<String>;
}

#[derive(Clone, Debug)]
pub struct CallLogService {
    db_pool: Pool<Sqlite>,
}

impl CallLogService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        CallLogService { db_pool }
    }

    /// Corre migraciones con sqlx
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db_pool)
            .await
            .context("Failed to run call_logs migrations")?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM call_logs")
            .fetch_one(&self.db_pool)
            .await?;
        let cnt: i64 = row.try_get("cnt")?;
        Ok(cnt as u64)
    }
}

#[async_trait]
impl CallLogStore for CallLogService {
    async fn insert(&self, entry: &CallLogEntry) -> Result<String> {
        let id = Uuid::new_v4().to_string();

        // Sin .context(): el mensaje crudo de sqlx es lo que ve el cliente.
        // Micros fijos: el texto ordena igual que el tiempo.
        sqlx::query(
            r#"
            INSERT INTO call_logs (id, phone_number, status, timestamp)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&id)
        .bind(&entry.phone_number)
        .bind(&entry.status)
        .bind(entry.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&self.db_pool)
        .await?;

        Ok(id)
    }
}
