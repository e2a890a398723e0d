pub mod routes;

use crate::errors::AnalyzerError;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;

/// HTTP surface: analysis endpoint plus health and counters.
pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/analyze", axum::routing::post(routes::analyze))
        .route("/health", axum::routing::get(routes::health))
        .route("/api/counters", axum::routing::get(routes::get_counters))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(state)
}

impl AnalyzerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalyzerError::Decode(_)
            | AnalyzerError::EmptyPortfolio
            | AnalyzerError::InvalidContract { .. }
            | AnalyzerError::SweepTooWide { .. }
            | AnalyzerError::NonFinitePayoff { .. } => StatusCode::BAD_REQUEST,
            AnalyzerError::TooManyContracts { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AnalyzerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalyzerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
