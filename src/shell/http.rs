use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::modules::time_logs::use_cases::list_time_logs::inbound::http as list_http;
use crate::modules::time_logs::use_cases::record_current_time::inbound::http as record_http;
use crate::shell::state::AppState;

pub const INTERNAL_SERVER_ERROR_BODY: &str = "Internal Server Error";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/current-time",
            get(record_http::handle).post(record_http::handle),
        )
        .route("/time-logs", get(list_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Generic failure response; details stay in the server log.
pub fn internal_server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_BODY).into_response()
}
