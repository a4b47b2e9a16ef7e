//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe. The dataset is loaded before the listener
/// binds, so a running server is always ready.
pub async fn readiness(State(_state): State<Arc<AppState>>) -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status with dataset details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if state.dataset.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        records: state.dataset.len(),
        sites: state.dataset.sites().len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;
    use crate::dataset::{Dataset, LaunchRecord, Outcome};

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_full_health_reports_dataset() {
        let dataset = Dataset::from_records(vec![LaunchRecord::new(
            "A",
            100.0,
            "FT",
            Outcome::Success,
        )]);
        let state = Arc::new(AppState::new(Arc::new(dataset), ApiConfig::default()));

        let Json(health) = full_health(State(state)).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.records, 1);
        assert_eq!(health.sites, 1);
    }

    #[tokio::test]
    async fn test_full_health_empty_dataset_degraded() {
        let state = Arc::new(AppState::new(
            Arc::new(Dataset::default()),
            ApiConfig::default(),
        ));

        let Json(health) = full_health(State(state)).await;
        assert_eq!(health.status, "degraded");
    }
}
