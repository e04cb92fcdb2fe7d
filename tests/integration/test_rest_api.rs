//! HTTP surface tests against the in-process router.

use std::fs::File;
use std::io::Write;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use aequery::agent::Agent;
use aequery::dataset::load_csv;
use aequery::resolve::IntentResolver;
use aequery::{create_combined_router, RestApiConfig};

const TEST_CSV: &str = "\
USUBJID,AESEV,AETERM,AESOC,AEBODSYS,AEDECOD,TRTEMFL,AEREL,ACTARM
SUBJ-001,SEVERE,HEADACHE,NERVOUS SYSTEM DISORDERS,NERVOUS SYSTEM DISORDERS,HEADACHE,Y,POSSIBLE,Placebo
SUBJ-002,MODERATE,HEADACHE,NERVOUS SYSTEM DISORDERS,NERVOUS SYSTEM DISORDERS,HEADACHE,N,,Drug A
SUBJ-003,SEVERE,PALPITATIONS,CARDIAC DISORDERS,CARDIAC DISORDERS,PALPITATIONS,Y,PROBABLE,Drug A
";

fn create_test_router(dir: &TempDir) -> Router {
    let csv_path = dir.path().join("adae.csv");
    let mut file = File::create(&csv_path).unwrap();
    file.write_all(TEST_CSV.as_bytes()).unwrap();

    let dataset = load_csv(&csv_path).unwrap();
    let agent = Arc::new(Agent::new(IntentResolver::with_rules(), Arc::new(dataset)));
    create_combined_router(agent, &RestApiConfig::default())
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_ask_endpoint_answers() {
    let dir = TempDir::new().unwrap();
    let router = create_test_router(&dir);

    let request = json_request(
        "/api/v1/ask",
        serde_json::json!({ "question": "Which subjects had severe adverse events?" }),
    );
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["count"], 2);
    assert_eq!(
        body["subjects"],
        serde_json::json!(["SUBJ-001", "SUBJ-003"])
    );
}

#[tokio::test]
async fn test_ask_endpoint_clarifies() {
    let dir = TempDir::new().unwrap();
    let router = create_test_router(&dir);

    let request = json_request(
        "/api/v1/ask",
        serde_json::json!({ "question": "tell me everything about this" }),
    );
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["needs_clarification"], true);
    assert!(body["question"].as_str().unwrap().contains("clarify"));
}

#[tokio::test]
async fn test_ae_query_endpoint() {
    let dir = TempDir::new().unwrap();
    let router = create_test_router(&dir);

    let request = json_request(
        "/api/v1/ae-query",
        serde_json::json!({ "severity": ["SEVERE"], "treatment_arm": "Drug A" }),
    );
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["subjects"], serde_json::json!(["SUBJ-003"]));
}

#[tokio::test]
async fn test_subject_risk_endpoint() {
    let dir = TempDir::new().unwrap();
    let router = create_test_router(&dir);

    let request = Request::builder()
        .uri("/api/v1/subject-risk/SUBJ-001")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["subject_id"], "SUBJ-001");
    assert_eq!(body["score"], 5);
    assert_eq!(body["category"], "Medium");
}

#[tokio::test]
async fn test_subject_risk_not_found() {
    let dir = TempDir::new().unwrap();
    let router = create_test_router(&dir);

    let request = Request::builder()
        .uri("/api/v1/subject-risk/SUBJ-999")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["code"], "subject_not_found");
}

#[tokio::test]
async fn test_api_info() {
    let dir = TempDir::new().unwrap();
    let router = create_test_router(&dir);

    let request = Request::builder()
        .uri("/api")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!(body["endpoints"].is_object());
}
