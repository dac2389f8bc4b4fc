// In memory time log store.
//
// Purpose
// - Exercise handlers and the shell without a database.
//
// Responsibilities
// - Keep rows in the same naive UTC text form the database uses, so the skip policy runs here too.
// - Assign ids the way an auto increment column does.

use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::modules::time_logs::core::ports::{GatewayError, TimeLogGateway};
use crate::modules::time_logs::core::time_log_entry::{
    StoredRow, TimeLogEntry, entries_from_rows, format_stored_timestamp,
};

#[derive(Default)]
struct Table {
    rows: Vec<StoredRow>,
    last_id: i64,
}

impl Table {
    fn push(&mut self, timestamp: String) -> i64 {
        self.last_id += 1;
        self.rows.push(StoredRow {
            id: self.last_id,
            timestamp,
        });
        self.last_id
    }
}

pub struct InMemoryTimeLogs {
    table: RwLock<Table>,
    zone: Tz,
    is_offline: bool,
    close_calls: AtomicUsize,
}

impl InMemoryTimeLogs {
    pub fn new(zone: Tz) -> Self {
        Self {
            table: RwLock::new(Table::default()),
            zone,
            is_offline: false,
            close_calls: AtomicUsize::new(0),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Stores a raw timestamp text as is, bypassing formatting.
    pub async fn insert_raw(&self, timestamp: impl Into<String>) -> i64 {
        self.table.write().await.push(timestamp.into())
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TimeLogGateway for InMemoryTimeLogs {
    async fn insert(&self, instant: &DateTime<Tz>) -> Result<i64, GatewayError> {
        if self.is_offline {
            return Err(GatewayError::StorageWrite("Time log store offline".into()));
        }

        let stored = format_stored_timestamp(instant);
        Ok(self.table.write().await.push(stored))
    }

    async fn list_all(&self) -> Result<Vec<TimeLogEntry>, GatewayError> {
        if self.is_offline {
            return Err(GatewayError::StorageRead("Time log store offline".into()));
        }

        let rows = self.table.read().await.rows.clone();
        Ok(entries_from_rows(rows, self.zone))
    }

    async fn close(&self) {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
    }
}
