//! REST API router and configuration.

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::agent::Agent;
use crate::api::handlers::{ae_query_handler, ask_handler, subject_risk_handler, ApiState};

/// REST API configuration.
#[derive(Debug, Clone)]
pub struct RestApiConfig {
    /// Enable CORS.
    pub enable_cors: bool,
    /// Allowed origins for CORS.
    pub cors_origins: Vec<String>,
    /// API prefix (e.g., "/api/v1").
    pub prefix: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
            prefix: "/api/v1".to_string(),
        }
    }
}

/// Create the REST API router.
///
/// Endpoints:
/// - POST /api/v1/ask               - Answer a natural-language question
/// - POST /api/v1/ae-query          - Structured severity/arm query
/// - GET  /api/v1/subject-risk/:id  - Risk profile for one subject
pub fn create_rest_router(agent: Arc<Agent>, config: &RestApiConfig) -> Router {
    let state = Arc::new(ApiState::new(agent));

    let api_routes = Router::new()
        .route("/ask", post(ask_handler))
        .route("/ae-query", post(ae_query_handler))
        .route("/subject-risk/:id", get(subject_risk_handler))
        .with_state(state);

    // Build the full router with prefix
    let router = Router::new().nest(&config.prefix, api_routes);

    // Add CORS if enabled
    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_origin(Any);

        router.layer(cors)
    } else {
        router
    }
}

/// Create a combined router with both REST API and additional routes.
pub fn create_combined_router(agent: Arc<Agent>, config: &RestApiConfig) -> Router {
    let rest_router = create_rest_router(agent, config);

    // Add API info route
    let info_route = Router::new().route("/api", get(api_info_handler));

    rest_router.merge(info_route)
}

/// API info handler.
async fn api_info_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "AEQuery REST API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "REST API for querying clinical adverse-event data",
        "endpoints": {
            "ask": {
                "method": "POST",
                "path": "/api/v1/ask",
                "description": "Answer a natural-language question about adverse events",
                "body": {
                    "question": "Question text (required)"
                }
            },
            "ae_query": {
                "method": "POST",
                "path": "/api/v1/ae-query",
                "description": "Find subjects by severity and treatment arm",
                "body": {
                    "severity": "Severity values to match, any-of (optional)",
                    "treatment_arm": "Exact treatment arm (optional)"
                }
            },
            "subject_risk": {
                "method": "GET",
                "path": "/api/v1/subject-risk/:id",
                "description": "Weighted severity risk profile for a subject"
            }
        }
    }))
}
