use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::workflows::hiring::evaluation::EvaluationConfig;
use crate::workflows::hiring::repository::HiringRepository;
use crate::workflows::hiring::router::{evaluate_handler, EvaluationRequest};
use crate::workflows::hiring::{hiring_router, HiringService};

fn router_with(repository: Arc<MemoryRepository>) -> Router {
    hiring_router(Arc::new(HiringService::new(
        repository,
        EvaluationConfig::default(),
    )))
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn register_candidate_route_returns_created() {
    let router = router_with(Arc::new(MemoryRepository::default()));

    let response = router
        .oneshot(post_json(
            "/api/v1/candidates",
            json!({
                "name": "Alice",
                "email": "alice@example.com",
                "resume_text": "Python developer with 5 years",
                "skills": ["React"],
                "experience_years": 5.0,
                "location": "San Francisco, CA"
            }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["id"], "cand-000001");
    assert_eq!(body["education"], "bachelor");
    assert_eq!(body["skills"], json!(["python", "react"]));
}

#[tokio::test]
async fn unknown_candidate_returns_not_found() {
    let router = router_with(Arc::new(MemoryRepository::default()));

    let response = router
        .oneshot(get("/api/v1/candidates/cand-000404"))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn inverted_salary_is_unprocessable() {
    let router = router_with(Arc::new(MemoryRepository::default()));

    let response = router
        .oneshot(post_json(
            "/api/v1/jobs",
            json!({
                "title": "Python Developer",
                "company": "TechCorp",
                "required_skills": ["python"],
                "salary": { "low": 180000.0, "high": 120000.0 }
            }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn evaluation_and_report_routes_round_trip() {
    let repository = Arc::new(MemoryRepository::default());
    repository.insert_candidate(alice()).expect("seeded");
    repository.insert_job(python_job()).expect("seeded");
    let router = router_with(repository);

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/evaluations",
            json!({ "candidate_id": "C001", "job_id": "J001" }),
        ))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::CREATED);
    let record = read_json_body(response).await;
    let score = record["composite_score"].as_f64().expect("numeric score");
    assert!((score - 0.83).abs() < 1e-9);
    assert_eq!(record["bias_flagged"], false);

    let response = router
        .clone()
        .oneshot(get("/api/v1/jobs/J001/report"))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);
    let report = read_json_body(response).await;
    assert_eq!(report["total_evaluations"], 1);
    assert_eq!(report["top_candidates"][0]["name"], "Alice");
    assert_eq!(
        report["bias"]["recommendation"],
        "Bias levels are acceptable"
    );

    let response = router
        .clone()
        .oneshot(get("/api/v1/candidates/C001/standing"))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);
    let standing = read_json_body(response).await;
    assert_eq!(standing["candidate_id"], "C001");
    assert_eq!(standing["evaluations"], 1);
    assert_eq!(standing["bias_detected"], false);
    let average = standing["average_score"].as_f64().expect("numeric average");
    assert!((average - 0.83).abs() < 1e-9);

    let response = router
        .oneshot(get("/api/v1/jobs/J001/top-candidates"))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);
    let ranked = read_json_body(response).await;
    assert_eq!(ranked[0]["candidate"]["id"], "C001");
}

#[tokio::test]
async fn report_without_evaluations_is_not_found() {
    let repository = Arc::new(MemoryRepository::default());
    repository.insert_job(python_job()).expect("seeded");
    let router = router_with(repository);

    let response = router
        .oneshot(get("/api/v1/jobs/J001/report"))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn evaluate_handler_flags_failed_evaluations() {
    let repository = Arc::new(MemoryRepository::default());
    let mut profile = alice();
    profile.experience_years = f64::NAN;
    repository.insert_candidate(profile).expect("seeded");
    repository.insert_job(python_job()).expect("seeded");
    let service = Arc::new(HiringService::new(
        repository.clone(),
        EvaluationConfig::default(),
    ));

    let response = evaluate_handler::<MemoryRepository>(
        State(service),
        axum::Json(EvaluationRequest {
            candidate_id: "C001".to_string(),
            job_id: "J001".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["evaluation_failed"], true);
    assert!(repository.evaluations().expect("listed").is_empty());
}

#[tokio::test]
async fn analysis_routes_expose_pure_operations() {
    let router = router_with(Arc::new(MemoryRepository::default()));

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/bias/scan",
            json!({
                "resume_text": "Young female developer, local candidates only",
                "job_text": "Developer Acme"
            }),
        ))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);
    let findings = read_json_body(response).await;
    assert_eq!(findings["flagged"], true);
    assert_eq!(findings["categories"], json!(["gender", "age", "location"]));

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/skills/match",
            json!({
                "candidate_skills": ["Python", "Docker"],
                "required_skills": ["python", "AWS"],
                "preferred_skills": ["docker"]
            }),
        ))
        .await
        .expect("route responds");
    let body = read_json_body(response).await;
    let score = body["score"].as_f64().expect("numeric score");
    assert!((score - 0.5).abs() < 1e-9);
    assert_eq!(body["missing_skills"], json!(["AWS"]));

    let response = router
        .oneshot(post_json(
            "/api/v1/resume/extract",
            json!({ "resume_text": ALICE_RESUME }),
        ))
        .await
        .expect("route responds");
    let features = read_json_body(response).await;
    assert_eq!(features["experience_years"], 5.0);
    assert_eq!(features["location"], "Unknown");
}
