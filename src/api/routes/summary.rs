//! Summary Routes
//!
//! Raw transform output for clients that draw their own charts.
//!
//! - GET /api/v1/summary/pie?site= - Launch counts per outcome class
//! - GET /api/v1/summary/scatter?site=&low=&high= - Filtered payload/outcome points

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{PieSummaryResponse, ScatterSummaryResponse, SelectionParams};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::{pie_summary, scatter_summary};

/// GET /api/v1/summary/pie
pub async fn pie(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> Json<PieSummaryResponse> {
    let site = params.site_filter();
    super::log_selection(&state.dataset, &site, None);
    let counts = pie_summary(&state.dataset, &site);

    tracing::debug!(site = %site, total = counts.total(), "Pie summary");

    Json(PieSummaryResponse {
        total: counts.total(),
        site,
        counts,
    })
}

/// GET /api/v1/summary/scatter
pub async fn scatter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Json<ScatterSummaryResponse>> {
    let site = params.site_filter();
    let range = params.payload_range(&state.dataset)?;
    super::log_selection(&state.dataset, &site, Some(range));
    let points = scatter_summary(&state.dataset, &site, range);

    tracing::debug!(site = %site, range = %range, count = points.len(), "Scatter summary");

    Ok(Json(ScatterSummaryResponse {
        count: points.len(),
        site,
        range,
        points,
    }))
}
