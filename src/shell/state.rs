use crate::modules::time_logs::core::clock::Clock;
use crate::modules::time_logs::core::ports::TimeLogGateway;
use crate::modules::time_logs::use_cases::record_current_time::handler::RecordCurrentTimeHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub record_handler: Arc<RecordCurrentTimeHandler>,
    pub gateway: Arc<dyn TimeLogGateway>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock + Send + Sync>, gateway: Arc<dyn TimeLogGateway>) -> Self {
        Self {
            record_handler: Arc::new(RecordCurrentTimeHandler::new(clock, gateway.clone())),
            gateway,
        }
    }
}
