use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use tracing::{error, info};

use crate::shell::http::internal_server_error;
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct CurrentTimeResponse {
    pub current_time: String,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    info!("Received request on /current-time endpoint");

    match state.record_handler.handle().await {
        Ok(recorded) => {
            let current_time = recorded.timestamp.to_rfc3339();
            info!(id = recorded.id, %current_time, "Current time returned");
            Json(CurrentTimeResponse { current_time }).into_response()
        }
        Err(error) => {
            error!(%error, "Error recording current time");
            internal_server_error()
        }
    }
}
