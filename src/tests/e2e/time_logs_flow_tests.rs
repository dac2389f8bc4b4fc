use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use http_body_util::BodyExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tower::ServiceExt;

use crate::modules::time_logs::adapters::outbound::time_logs_in_memory::InMemoryTimeLogs;
use crate::modules::time_logs::core::clock::{Clock, ClockError};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::clock::{FixedClock, ZONE, june_first_nine_am};

/// Advances one minute per reading.
struct SteppingClock {
    start: DateTime<Tz>,
    readings: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> Result<DateTime<Tz>, ClockError> {
        let step = self.readings.fetch_add(1, Ordering::SeqCst);
        Ok(self.start + Duration::minutes(step))
    }
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn records_the_current_time_and_lists_it_back() {
    let store = Arc::new(InMemoryTimeLogs::new(ZONE));
    let app = router(AppState::new(
        Arc::new(FixedClock::new(june_first_nine_am())),
        store,
    ));

    let (status, body) = call(&app, get("/current-time")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({"current_time": "2024-06-01T09:00:00-04:00"})
    );

    let (status, body) = call(&app, get("/time-logs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!([{"id": 1, "timestamp": "2024-06-01T09:00:00-04:00"}])
    );
}

#[tokio::test]
async fn n_writes_yield_n_entries_with_increasing_ids() {
    let store = Arc::new(InMemoryTimeLogs::new(ZONE));
    let clock = Arc::new(SteppingClock {
        start: june_first_nine_am(),
        readings: AtomicI64::new(0),
    });
    let app = router(AppState::new(clock, store));

    let mut written = Vec::new();
    for _ in 0..5 {
        let (status, body) = call(&app, get("/current-time")).await;
        assert_eq!(status, StatusCode::OK);
        written.push(body["current_time"].as_str().unwrap().to_string());
    }

    let (status, body) = call(&app, get("/time-logs")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 5);

    let ids: Vec<i64> = listed.iter().map(|e| e["id"].as_i64().unwrap()).collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    let timestamps: Vec<String> = listed
        .iter()
        .map(|e| e["timestamp"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(timestamps, written);
}

#[tokio::test]
async fn a_corrupted_row_does_not_hide_the_valid_ones() {
    let store = Arc::new(InMemoryTimeLogs::new(ZONE));
    let app = router(AppState::new(
        Arc::new(FixedClock::new(june_first_nine_am())),
        store.clone(),
    ));

    call(&app, get("/current-time")).await;
    store.insert_raw("31/12/2023 23:59").await;
    call(&app, get("/current-time")).await;

    let (status, body) = call(&app, get("/time-logs")).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn list_rejects_methods_other_than_get() {
    let app = router(AppState::new(
        Arc::new(FixedClock::new(june_first_nine_am())),
        Arc::new(InMemoryTimeLogs::new(ZONE)),
    ));

    let response = app
        .oneshot(Request::post("/time-logs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn an_unreachable_store_fails_both_endpoints_with_500() {
    let mut store = InMemoryTimeLogs::new(ZONE);
    store.toggle_offline();
    let store = Arc::new(store);
    let app = router(AppState::new(
        Arc::new(FixedClock::new(june_first_nine_am())),
        store.clone(),
    ));

    for uri in ["/current-time", "/time-logs"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Internal Server Error");
    }
    assert!(store.is_empty().await);
}
