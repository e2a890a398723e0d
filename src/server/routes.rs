use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::payoff::{self, AnalysisResult, Contract};
use crate::state::{AppState, CounterSnapshot};
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use portable_atomic::Ordering::Relaxed;
use std::sync::Arc;

/// POST /analyze -- payoff curve and risk metrics for a list of contracts
///
/// The body is decoded by hand so malformed input maps to a 400 with the
/// decoder's message instead of the extractor's default rejection.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, AnalyzerError> {
    state.counters.requests_received.fetch_add(1, Relaxed);

    match run_analysis(&state, &body) {
        Ok(result) => {
            state.counters.analyses_completed.fetch_add(1, Relaxed);
            tracing::info!(
                samples = result.curve.len(),
                max_profit = result.max_profit,
                max_loss = result.max_loss,
                break_evens = result.break_even_points.len(),
                "analysis completed"
            );
            Ok(Json(result))
        }
        Err(e) => {
            state.counters.requests_rejected.fetch_add(1, Relaxed);
            tracing::warn!(error = %e, "analysis request rejected");
            Err(e)
        }
    }
}

fn run_analysis(state: &AppState, body: &[u8]) -> AnalyzerResult<AnalysisResult> {
    let contracts: Vec<Contract> = serde_json::from_slice(body)?;

    let max = state.config.max_contracts;
    if contracts.len() > max {
        return Err(AnalyzerError::TooManyContracts { count: contracts.len(), max });
    }

    tracing::debug!(contracts = contracts.len(), "analyzing portfolio");
    payoff::analyze(&contracts, state.config.max_curve_samples)
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/counters -- request counters (lock-free reads)
pub async fn get_counters(State(state): State<Arc<AppState>>) -> Json<CounterSnapshot> {
    Json(state.counters.snapshot())
}
