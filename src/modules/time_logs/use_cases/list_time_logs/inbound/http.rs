use axum::{Json, extract::State, response::IntoResponse};
use tracing::{error, info};

use crate::modules::time_logs::use_cases::list_time_logs::projection::TimeLogEntryView;
use crate::shell::http::internal_server_error;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    info!("Received request on /time-logs endpoint");

    match state.gateway.list_all().await {
        Ok(entries) => {
            let views: Vec<TimeLogEntryView> = entries.into_iter().map(Into::into).collect();
            info!(count = views.len(), "Time logs successfully returned");
            Json(views).into_response()
        }
        Err(error) => {
            error!(%error, "Error querying time logs");
            internal_server_error()
        }
    }
}
