// Ports define what the core needs from the outside world, without implementing it.
//
// Responsibilities
// - Describe the persistence gateway as a trait so handlers never see a concrete store.
//
// Testing guidance
// - The in memory adapter implements the same trait for tests.

use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;
use thiserror::Error;

use crate::modules::time_logs::core::time_log_entry::TimeLogEntry;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("storage write failed: {0}")]
    StorageWrite(String),

    #[error("storage read failed: {0}")]
    StorageRead(String),

    #[error("storage operation '{operation}' timed out after {seconds}s")]
    Timeout {
        operation: &'static str,
        seconds: u64,
    },
}

#[async_trait]
pub trait TimeLogGateway: Send + Sync {
    /// Appends one entry and returns the id the store assigned to it.
    async fn insert(&self, instant: &DateTime<Tz>) -> Result<i64, GatewayError>;

    /// Every stored entry, ascending by id.
    async fn list_all(&self) -> Result<Vec<TimeLogEntry>, GatewayError>;

    async fn close(&self);
}
