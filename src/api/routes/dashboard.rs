//! Dashboard Routes
//!
//! The single dashboard page and the settings its controls are built from.
//!
//! - GET / - Dashboard page
//! - GET /api/v1/controls - Dropdown options and slider settings

use axum::{
    extract::State,
    http::Uri,
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::dto::ControlsResponse;
use crate::api::error::ApiError;
use crate::api::state::AppState;

const DASHBOARD_HTML: &str = include_str!("../../../assets/dashboard.html");

/// GET /
///
/// The page owns the selection state and re-requests the charts on every
/// control change.
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// GET /api/v1/controls
pub async fn controls(State(state): State<Arc<AppState>>) -> Json<ControlsResponse> {
    Json(ControlsResponse::from_dataset(
        &state.dataset,
        state.config.slider_step,
    ))
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wires_both_charts() {
        assert!(DASHBOARD_HTML.contains("SpaceX Launch Records Dashboard"));
        assert!(DASHBOARD_HTML.contains("site-dropdown"));
        assert!(DASHBOARD_HTML.contains("success-pie-chart"));
        assert!(DASHBOARD_HTML.contains("success-payload-scatter-chart"));
        assert!(DASHBOARD_HTML.contains("/api/v1/controls"));
    }

    #[tokio::test]
    async fn test_not_found_carries_path() {
        let err = not_found(Uri::from_static("/missing")).await;
        assert_eq!(err.to_string(), "Not found: /missing");
    }
}
