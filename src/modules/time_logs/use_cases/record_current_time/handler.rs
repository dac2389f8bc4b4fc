use chrono::DateTime;
use chrono_tz::Tz;
use std::sync::Arc;
use thiserror::Error;

use crate::modules::time_logs::core::clock::{Clock, ClockError};
use crate::modules::time_logs::core::ports::{GatewayError, TimeLogGateway};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error(transparent)]
    Storage(#[from] GatewayError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTime {
    pub id: i64,
    pub timestamp: DateTime<Tz>,
}

pub struct RecordCurrentTimeHandler {
    clock: Arc<dyn Clock + Send + Sync>,
    gateway: Arc<dyn TimeLogGateway>,
}

impl RecordCurrentTimeHandler {
    pub fn new(clock: Arc<dyn Clock + Send + Sync>, gateway: Arc<dyn TimeLogGateway>) -> Self {
        Self { clock, gateway }
    }

    /// Reads the clock and stores the reading. Nothing is stored when the clock fails.
    pub async fn handle(&self) -> Result<RecordedTime, ApplicationError> {
        let timestamp = self.clock.now()?;
        let id = self.gateway.insert(&timestamp).await?;
        Ok(RecordedTime { id, timestamp })
    }
}
