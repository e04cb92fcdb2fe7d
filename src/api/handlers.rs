//! REST API request handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::agent::{Agent, AskOutcome};
use crate::error::{AeQueryError, DataError, QueryError};
use crate::query::QueryResult;
use crate::resolve::FilterSpec;
use crate::risk::RiskProfile;

/// Application state shared across handlers.
pub struct ApiState {
    /// Agent answering questions over the loaded dataset.
    pub agent: Arc<Agent>,
}

impl ApiState {
    /// Create new API state.
    pub fn new(agent: Arc<Agent>) -> Self {
        Self { agent }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Natural-language question request.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    /// Question text.
    pub question: String,
}

/// Answer to a natural-language question.
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub filters: FilterSpec,
    pub count: usize,
    pub subjects: Vec<String>,
}

impl From<QueryResult> for AskResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            filters: result.filters,
            count: result.count,
            subjects: result.subjects,
        }
    }
}

/// Clarification response when a question is too vague to answer.
#[derive(Debug, Clone, Serialize)]
pub struct ClarificationResponse {
    pub needs_clarification: bool,
    pub question: String,
}

/// Structured adverse-event query request.
#[derive(Debug, Clone, Deserialize)]
pub struct AeQueryRequest {
    /// Severity values to match (union). Empty means any severity.
    #[serde(default)]
    pub severity: Vec<String>,
    /// Exact treatment arm to match.
    #[serde(default)]
    pub treatment_arm: Option<String>,
}

/// Structured adverse-event query response.
#[derive(Debug, Clone, Serialize)]
pub struct AeQueryResponse {
    pub count: usize,
    pub subjects: Vec<String>,
}

/// Subject risk response.
#[derive(Debug, Clone, Serialize)]
pub struct RiskResponse {
    pub subject_id: String,
    pub score: u32,
    pub category: String,
}

impl From<RiskProfile> for RiskResponse {
    fn from(profile: RiskProfile) -> Self {
        Self {
            subject_id: profile.subject_id,
            score: profile.score,
            category: profile.category.to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

fn error_response(err: AeQueryError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match &err {
        AeQueryError::Query(QueryError::UnknownColumn(_)) => {
            (StatusCode::BAD_REQUEST, "unknown_column")
        }
        AeQueryError::Query(QueryError::UnsupportedOperator(_)) => {
            (StatusCode::BAD_REQUEST, "unsupported_operator")
        }
        AeQueryError::Data(DataError::SubjectNotFound(_)) => {
            (StatusCode::NOT_FOUND, "subject_not_found")
        }
        AeQueryError::Model(_) => (StatusCode::BAD_GATEWAY, "model_invocation_failed"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: code.to_string(),
        }),
    )
}

// ============================================================================
// Handler Functions
// ============================================================================

/// POST /api/v1/ask - Answer a natural-language question.
pub async fn ask_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse {
    match state.agent.ask(&request.question).await {
        Ok(AskOutcome::Answer(result)) => {
            (StatusCode::OK, Json(AskResponse::from(result))).into_response()
        }
        Ok(AskOutcome::Clarify(clarification)) => (
            StatusCode::OK,
            Json(ClarificationResponse {
                needs_clarification: true,
                question: clarification.question,
            }),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

/// POST /api/v1/ae-query - Structured severity/arm query.
pub async fn ae_query_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<AeQueryRequest>,
) -> impl IntoResponse {
    match state
        .agent
        .ae_query(&request.severity, request.treatment_arm.as_deref())
    {
        Ok(subjects) => (
            StatusCode::OK,
            Json(AeQueryResponse {
                count: subjects.len(),
                subjects,
            }),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

/// GET /api/v1/subject-risk/{id} - Risk profile for one subject.
pub async fn subject_risk_handler(
    State(state): State<Arc<ApiState>>,
    Path(subject_id): Path<String>,
) -> impl IntoResponse {
    match state.agent.subject_risk(&subject_id) {
        Ok(profile) => (StatusCode::OK, Json(RiskResponse::from(profile))).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}
