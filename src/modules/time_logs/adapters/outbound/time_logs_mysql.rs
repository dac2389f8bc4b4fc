// MySQL time log store backed by a sqlx pool.
//
// Responsibilities
// - Open the pool at startup and fail fast when the database is unreachable.
// - Bound reads by the configured timeout on the client side.
// - Bound writes by pool acquire and the session lock wait timeout only; an insert is never
//   dropped mid-statement, so a write reported as failed has not been committed.
// - Read timestamps as text so a single bad row can be skipped instead of failing the query.

use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;
use sqlx::{
    MySqlPool, Row,
    mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlRow},
};
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

use crate::modules::time_logs::core::ports::{GatewayError, TimeLogGateway};
use crate::modules::time_logs::core::time_log_entry::{
    StoredRow, TimeLogEntry, entries_from_rows, stored_utc,
};
use crate::shared::infrastructure::config::DbConfig;

const INSERT_TIME_LOG: &str = "INSERT INTO time_log (`timestamp`) VALUES (?)";
const SELECT_TIME_LOGS: &str = "SELECT CAST(id AS SIGNED) AS id, CAST(`timestamp` AS CHAR) AS ts \
     FROM time_log ORDER BY id ASC";

pub struct MySqlTimeLogs {
    pool: MySqlPool,
    zone: Tz,
    timeout: Duration,
}

impl MySqlTimeLogs {
    pub async fn connect(config: &DbConfig, zone: Tz) -> Result<Self, sqlx::Error> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let session = session_settings(config.timeout);

        // connect_with opens one connection up front, which doubles as the startup ping.
        let pool = MySqlPoolOptions::new()
            .acquire_timeout(config.timeout)
            .after_connect(move |conn, _meta| {
                let session = session.clone();
                Box::pin(async move {
                    sqlx::query(&session).execute(conn).await?;
                    Ok(())
                })
            })
            .connect_with(options)
            .await?;

        info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            "database connection established"
        );
        Ok(Self::from_pool(pool, zone, config.timeout))
    }

    pub fn from_pool(pool: MySqlPool, zone: Tz, timeout: Duration) -> Self {
        Self {
            pool,
            zone,
            timeout,
        }
    }

    async fn bounded<T, F>(&self, operation: &'static str, future: F) -> Result<T, GatewayError>
    where
        F: Future<Output = Result<T, GatewayError>>,
    {
        tokio::time::timeout(self.timeout, future)
            .await
            .map_err(|_| GatewayError::Timeout {
                operation,
                seconds: self.timeout.as_secs(),
            })?
    }
}

/// Run on every new connection: a write stuck behind a row lock gives up server side after the
/// store timeout. The server minimum is 1 second.
fn session_settings(timeout: Duration) -> String {
    format!(
        "SET SESSION innodb_lock_wait_timeout = {}",
        timeout.as_secs().max(1)
    )
}

fn stored_row(row: &MySqlRow) -> Result<StoredRow, sqlx::Error> {
    Ok(StoredRow {
        id: row.try_get("id")?,
        timestamp: row.try_get("ts")?,
    })
}

#[async_trait]
impl TimeLogGateway for MySqlTimeLogs {
    async fn insert(&self, instant: &DateTime<Tz>) -> Result<i64, GatewayError> {
        let result = sqlx::query(INSERT_TIME_LOG)
            .bind(stored_utc(instant))
            .execute(&self.pool)
            .await
            .map_err(|e| GatewayError::StorageWrite(e.to_string()))?;

        let id = result.last_insert_id();
        i64::try_from(id)
            .map_err(|_| GatewayError::StorageWrite(format!("assigned id {id} is out of range")))
    }

    async fn list_all(&self) -> Result<Vec<TimeLogEntry>, GatewayError> {
        let rows = self
            .bounded("list_all", async {
                sqlx::query(SELECT_TIME_LOGS)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(|e| GatewayError::StorageRead(e.to_string()))
            })
            .await?;

        let stored = rows
            .iter()
            .filter_map(|row| match stored_row(row) {
                Ok(stored) => Some(stored),
                Err(error) => {
                    warn!(%error, "skipping unreadable time log row");
                    None
                }
            })
            .collect();

        Ok(entries_from_rows(stored, self.zone))
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("database connection closed");
    }
}
