//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::dataset::Dataset;
use crate::query::{PayloadRange, PieSummary, ScatterSummary, SiteFilter, ALL_SITES};

// ============================================
// SELECTION DTOs
// ============================================

/// Filter selection sent by the dashboard controls
#[derive(Debug, Default, Deserialize)]
pub struct SelectionParams {
    /// Dropdown value, defaults to "ALL"
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound (kg), defaults to 0
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound (kg), defaults to the heaviest payload
    #[serde(default)]
    pub high: Option<f64>,
    /// Chart output format: json or svg
    #[serde(default)]
    pub format: Option<String>,
}

impl SelectionParams {
    pub fn site_filter(&self) -> SiteFilter {
        self.site
            .as_deref()
            .map(SiteFilter::parse)
            .unwrap_or_default()
    }

    /// Payload range with missing bounds taken from the slider default
    ///
    /// `NaN` and infinite bounds parse as numbers but are rejected.
    pub fn payload_range(&self, dataset: &Dataset) -> ApiResult<PayloadRange> {
        let default = dataset.default_payload_range();
        Ok(PayloadRange::new(
            finite_bound("low", self.low)?.unwrap_or(default.low),
            finite_bound("high", self.high)?.unwrap_or(default.high),
        ))
    }

    pub fn chart_format(&self) -> ApiResult<ChartFormat> {
        match self.format.as_deref().map(str::to_lowercase).as_deref() {
            None | Some("json") => Ok(ChartFormat::Json),
            Some("svg") => Ok(ChartFormat::Svg),
            Some(other) => Err(ApiError::Validation(format!(
                "unknown chart format: {} (expected json or svg)",
                other
            ))),
        }
    }
}

fn finite_bound(name: &str, value: Option<f64>) -> ApiResult<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() => Err(ApiError::Validation(format!(
            "payload bound {} must be a finite number, got {}",
            name, v
        ))),
        _ => Ok(value),
    }
}

/// Chart response encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Json,
    Svg,
}

// ============================================
// CONTROL DTOs
// ============================================

/// One dropdown option
#[derive(Debug, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Payload range slider settings
#[derive(Debug, Serialize)]
pub struct SliderSettings {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Upper end of the slider track: `max` rounded up to a whole step, so a
    /// handle snapped to the step grid can still reach `max`
    pub track_max: f64,
    /// Initial `[low, high]` selection
    pub value: [f64; 2],
}

/// Dashboard control settings
#[derive(Debug, Serialize)]
pub struct ControlsResponse {
    /// "All Sites" followed by every site in the dataset
    pub sites: Vec<SiteOption>,
    /// Initially selected dropdown value
    pub default_site: String,
    pub payload: SliderSettings,
}

impl ControlsResponse {
    pub fn from_dataset(dataset: &Dataset, step: f64) -> Self {
        let mut sites = vec![SiteOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        sites.extend(dataset.sites().iter().map(|s| SiteOption {
            label: s.clone(),
            value: s.clone(),
        }));

        let (min, max) = dataset.payload_bounds().unwrap_or((0.0, 0.0));
        let default = dataset.default_payload_range();

        Self {
            sites,
            default_site: ALL_SITES.to_string(),
            payload: SliderSettings {
                min,
                max,
                step,
                track_max: track_max(max, step),
                value: [default.low, default.high],
            },
        }
    }
}

fn track_max(max: f64, step: f64) -> f64 {
    if step > 0.0 {
        (max / step).ceil() * step
    } else {
        max
    }
}

// ============================================
// SUMMARY DTOs
// ============================================

/// Pie summary response
#[derive(Debug, Serialize)]
pub struct PieSummaryResponse {
    pub site: SiteFilter,
    /// Counts keyed by outcome class
    pub counts: PieSummary,
    pub total: usize,
}

/// Scatter summary response
#[derive(Debug, Serialize)]
pub struct ScatterSummaryResponse {
    pub site: SiteFilter,
    pub range: PayloadRange,
    pub points: ScatterSummary,
    pub count: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded (empty dataset)
    pub status: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
