use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use jiff::tz::TimeZone;
use serde_json::{json, Value};
use tower::ServiceExt;

use gymdesk_api::router;
use gymdesk_api::state::AppState;
use gymdesk_storage::memory::MemoryObjectStore;

fn app() -> (Router, Arc<MemoryObjectStore>) {
    let store = Arc::new(MemoryObjectStore::new());
    (router(AppState::new(store.clone(), TimeZone::UTC)), store)
}

async fn post_estimate(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/assessments/estimate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn measurements(sex: &str) -> Value {
    json!({
        "bodyMassKg": 80,
        "heightCm": 180,
        "sex": sex,
        "skinfolds": {
            "triceps": 10, "subscapular": 10, "biceps": 10, "axilarMedia": 10,
            "suprailiaca": 10, "abdominal": 10, "coxa": 10
        }
    })
}

#[tokio::test]
async fn estimate_with_explicit_age() {
    let (app, store) = app();
    let mut body = measurements("male");
    body["ageYears"] = json!(30);

    let (status, result) = post_estimate(app, body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["ageYears"], 30);
    assert_eq!(result["sumSkinfolds"], 70.0);
    assert_eq!(result["fatPercent"], 10.2);
    assert_eq!(result["fatMass"], 8.2);
    assert_eq!(result["leanMass"], 71.8);
    assert_eq!(result["bmi"], 24.7);
    // Previews never persist.
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn estimate_derives_age_from_birth_date() {
    let (app, _) = app();
    let mut body = measurements("masculino");
    body["birthDate"] = json!("1994-06-15");
    body["assessedOn"] = json!("2024-06-14");

    let (status, result) = post_estimate(app, body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["ageYears"], 29);
}

#[tokio::test]
async fn birth_date_takes_precedence_over_age() {
    let (app, _) = app();
    let mut body = measurements("female");
    body["ageYears"] = json!(70);
    body["birthDate"] = json!("2000-01-01");
    body["assessedOn"] = json!("2024-01-01");

    let (_, result) = post_estimate(app, body).await;
    assert_eq!(result["ageYears"], 24);
}

#[tokio::test]
async fn estimate_requires_an_age_source() {
    let (app, _) = app();
    let (status, error) = post_estimate(app, measurements("female")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "either birthDate or ageYears is required");
}

#[tokio::test]
async fn birth_date_after_assessment_is_rejected() {
    let (app, _) = app();
    let mut body = measurements("female");
    body["birthDate"] = json!("2025-01-01");
    body["assessedOn"] = json!("2024-01-01");

    let (status, _) = post_estimate(app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_positive_height_is_rejected() {
    let (app, _) = app();
    let mut body = measurements("male");
    body["ageYears"] = json!(30);
    body["heightCm"] = json!(0);

    let (status, error) = post_estimate(app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].as_str().unwrap().contains("height"));
}

#[tokio::test]
async fn assessed_on_without_birth_date_is_rejected() {
    let (app, _) = app();
    let mut body = measurements("male");
    body["ageYears"] = json!(30);
    body["assessedOn"] = json!("2024-01-01");

    let (status, error) = post_estimate(app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "assessedOn applies only together with birthDate");
}
