//! Chart Routes
//!
//! Figures for the two dashboard charts, as JSON or rendered SVG.
//!
//! - GET /api/v1/charts/pie?site=&format= - Success vs. failure pie chart
//! - GET /api/v1/charts/scatter?site=&low=&high=&format= - Payload vs. outcome scatter chart

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartFormat, SelectionParams};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::chart::{render_pie_svg, render_scatter_svg, PieFigure, ScatterFigure};
use crate::query::{pie_summary, scatter_summary};

/// GET /api/v1/charts/pie
///
/// Re-rendered whenever the site dropdown changes.
pub async fn pie_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Response> {
    let format = params.chart_format()?;
    let site = params.site_filter();
    super::log_selection(&state.dataset, &site, None);

    let summary = pie_summary(&state.dataset, &site);
    let figure = PieFigure::from_summary(&site, &summary);

    Ok(match format {
        ChartFormat::Json => (StatusCode::OK, Json(figure)).into_response(),
        ChartFormat::Svg => svg_response(render_pie_svg(&figure)),
    })
}

/// GET /api/v1/charts/scatter
///
/// Re-rendered whenever either control changes.
pub async fn scatter_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Response> {
    let format = params.chart_format()?;
    let site = params.site_filter();
    let range = params.payload_range(&state.dataset)?;
    super::log_selection(&state.dataset, &site, Some(range));

    let summary = scatter_summary(&state.dataset, &site, range);
    let figure = ScatterFigure::from_summary(&site, &summary);

    Ok(match format {
        ChartFormat::Json => (StatusCode::OK, Json(figure)).into_response(),
        ChartFormat::Svg => svg_response(render_scatter_svg(&figure)),
    })
}

fn svg_response(svg: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/svg+xml")],
        svg,
    )
        .into_response()
}
