//! Axum routes for the attack-path service.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::state::AppState;
use crate::adapters::outbound::console::TracingProgressReporter;
use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::application::dto::PathQueryRequest;
use crate::application::use_cases::AnalyzePathsUseCase;
use crate::path_analysis::domain::{AnnotatedPath, FilterOptions};
use crate::shared::error::AnalysisError;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query string of `GET /all-paths`
///
/// A flag is on only when it appears once with the value `true`. Any other
/// value (`1`, `TRUE`) or a repeated key leaves it off.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathQueryParams {
    pub exposed_only: Vec<String>,
    pub sink_only: Vec<String>,
    pub vulnerable_only: Vec<String>,
}

impl PathQueryParams {
    pub fn filter_options(&self) -> FilterOptions {
        fn is_true(values: &[String]) -> bool {
            matches!(values, [value] if value == "true")
        }
        FilterOptions::new(
            is_true(&self.exposed_only),
            is_true(&self.sink_only),
            is_true(&self.vulnerable_only),
        )
    }
}

impl FromIterator<(String, String)> for PathQueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "exposedOnly" => params.exposed_only.push(value),
                "sinkOnly" => params.sink_only.push(value),
                "vulnerableOnly" => params.vulnerable_only.push(value),
                _ => {}
            }
        }
        params
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error body returned instead of a path array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// An error body paired with its HTTP status
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, code: &str, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(code, error),
        }
    }

    /// Maps an analysis failure to a distinct status so callers never
    /// confuse it with an empty result.
    pub fn from_analysis(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<AnalysisError>() {
            Some(analysis_err) if analysis_err.is_input_error() => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                analysis_err.code(),
                analysis_err.to_string(),
            ),
            Some(analysis_err) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                analysis_err.code(),
                analysis_err.to_string(),
            ),
            None => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
                format!("{:#}", err),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(
            status = self.status.as_u16(),
            code = %self.body.code,
            error = %self.body.error,
            "Request error"
        );
        (self.status, Json(self.body)).into_response()
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Runs one path query against the current data file.
///
/// Enumeration is CPU-bound, so it runs on the blocking pool under the
/// configured deadline. A query that times out keeps running on its blocking
/// thread until it finishes; only the response is abandoned.
async fn all_paths_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<AnnotatedPath>>, ApiError> {
    let Query(pairs) = query.map_err(|rejection| {
        ApiError::new(StatusCode::BAD_REQUEST, "VALIDATION", rejection.body_text())
    })?;
    let params: PathQueryParams = pairs.into_iter().collect();

    let request = PathQueryRequest::new(
        state.data_path.clone(),
        params.filter_options(),
        state.sink_policy.clone(),
    );

    let task = tokio::task::spawn_blocking(move || {
        AnalyzePathsUseCase::new(FileSystemReader::new(), TracingProgressReporter::new())
            .execute(request)
    });

    match tokio::time::timeout(state.query_timeout, task).await {
        Ok(Ok(Ok(response))) => Ok(Json(response.paths)),
        Ok(Ok(Err(err))) => Err(ApiError::from_analysis(&err)),
        Ok(Err(join_err)) => Err(ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            format!("Analysis task failed: {}", join_err),
        )),
        Err(_) => Err(ApiError::new(
            StatusCode::GATEWAY_TIMEOUT,
            "ANALYSIS_TIMEOUT",
            format!(
                "Path analysis did not finish within {} ms",
                state.query_timeout.as_millis()
            ),
        )),
    }
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/all-paths", get(all_paths_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}
