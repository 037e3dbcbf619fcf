use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::cohort::CohortError;
use super::domain::{CandidateId, CandidateSubmission, JobId, JobSubmission};
use super::repository::{HiringRepository, RepositoryError};
use super::service::{HiringService, HiringServiceError};

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationRequest {
    pub(crate) candidate_id: String,
    pub(crate) job_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractRequest {
    pub(crate) resume_text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SkillMatchRequest {
    pub(crate) candidate_skills: Vec<String>,
    pub(crate) required_skills: Vec<String>,
    #[serde(default)]
    pub(crate) preferred_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BiasScanRequest {
    pub(crate) resume_text: String,
    #[serde(default)]
    pub(crate) job_text: String,
}

/// Router builder exposing the evaluation pipeline over HTTP.
pub fn hiring_router<R>(service: Arc<HiringService<R>>) -> Router
where
    R: HiringRepository + 'static,
{
    Router::new()
        .route("/api/v1/candidates", post(register_candidate_handler::<R>))
        .route("/api/v1/candidates/:candidate_id", get(candidate_handler::<R>))
        .route(
            "/api/v1/candidates/:candidate_id/evaluations",
            get(candidate_evaluations_handler::<R>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/standing",
            get(candidate_standing_handler::<R>),
        )
        .route("/api/v1/jobs", post(register_job_handler::<R>))
        .route("/api/v1/jobs/:job_id", get(job_handler::<R>))
        .route(
            "/api/v1/jobs/:job_id/evaluations",
            get(job_evaluations_handler::<R>),
        )
        .route(
            "/api/v1/jobs/:job_id/top-candidates",
            get(top_candidates_handler::<R>),
        )
        .route("/api/v1/jobs/:job_id/report", get(report_handler::<R>))
        .route("/api/v1/evaluations", post(evaluate_handler::<R>))
        .route("/api/v1/resume/extract", post(extract_handler::<R>))
        .route("/api/v1/skills/match", post(skill_match_handler::<R>))
        .route("/api/v1/bias/scan", post(bias_scan_handler::<R>))
        .with_state(service)
}

pub(crate) async fn register_candidate_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Json(submission): Json<CandidateSubmission>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.register_candidate(submission) {
        Ok(candidate) => (StatusCode::CREATED, Json(candidate)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn candidate_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.candidate(&CandidateId(candidate_id)) {
        Ok(candidate) => (StatusCode::OK, Json(candidate)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn candidate_evaluations_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.evaluations_for_candidate(&CandidateId(candidate_id)) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn candidate_standing_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.candidate_standing(&CandidateId(candidate_id)) {
        Ok(standing) => (StatusCode::OK, Json(standing)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn register_job_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Json(submission): Json<JobSubmission>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.register_job(submission) {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn job_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.job(&JobId(job_id)) {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn job_evaluations_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.evaluations_for_job(&JobId(job_id)) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn top_candidates_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.top_candidates(&JobId(job_id), None) {
        Ok(ranked) => (StatusCode::OK, Json(ranked)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.cohort_report(&JobId(job_id)) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn evaluate_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Json(request): Json<EvaluationRequest>,
) -> Response
where
    R: HiringRepository + 'static,
{
    let candidate_id = CandidateId(request.candidate_id);
    let job_id = JobId(request.job_id);
    match service.evaluate(&candidate_id, &job_id) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn extract_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Json(request): Json<ExtractRequest>,
) -> Response
where
    R: HiringRepository + 'static,
{
    let features = service.extract_features(&request.resume_text);
    (StatusCode::OK, Json(features)).into_response()
}

pub(crate) async fn skill_match_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Json(request): Json<SkillMatchRequest>,
) -> Response
where
    R: HiringRepository + 'static,
{
    let score = service.match_skills(
        &request.candidate_skills,
        &request.required_skills,
        &request.preferred_skills,
    );
    let missing = service.missing_skills(&request.candidate_skills, &request.required_skills);
    let payload = json!({
        "score": score,
        "missing_skills": missing,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn bias_scan_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Json(request): Json<BiasScanRequest>,
) -> Response
where
    R: HiringRepository + 'static,
{
    let findings = service.scan_bias(&request.resume_text, &request.job_text);
    let payload = json!({
        "flagged": findings.is_flagged(),
        "categories": findings.categories(),
        "matches": findings.matches,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

fn error_response(err: HiringServiceError) -> Response {
    let status = match &err {
        HiringServiceError::Repository(RepositoryError::NotFound)
        | HiringServiceError::Cohort(CohortError::JobNotFound(_))
        | HiringServiceError::Cohort(CohortError::NoEvaluations(_)) => StatusCode::NOT_FOUND,
        HiringServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        HiringServiceError::InvalidJob(_) => StatusCode::UNPROCESSABLE_ENTITY,
        HiringServiceError::Evaluation(_) => {
            let payload = json!({
                "error": err.to_string(),
                "evaluation_failed": true,
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
        HiringServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
