//! # Launch Dashboard
//!
//! Launch Records Dashboard - an interactive single-page dashboard over a
//! static table of rocket launches.
//!
//! ## Features
//!
//! - **Immutable dataset**: launch records loaded once from CSV and shared read-only
//! - **Pure transforms**: pie and scatter summaries computed from the current filters
//! - **Server-side charts**: figure descriptions and SVG rendering
//! - **Dashboard page**: dropdown and payload slider driving both charts
//!
//! ## Modules
//!
//! - [`dataset`]: Launch records and CSV loading
//! - [`query`]: Filter selections and summary transforms
//! - [`chart`]: Figures built from summaries, rendered to SVG
//! - [`api`]: REST API and dashboard page with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launch_dashboard::dataset::Dataset;
//! use launch_dashboard::query::{pie_summary, scatter_summary, PayloadRange, SiteFilter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load("spacex_launch_dash.csv")?;
//!
//!     let pie = pie_summary(&dataset, &SiteFilter::All);
//!     println!("{} successes", pie.successes());
//!
//!     let range = PayloadRange::new(1000.0, 5000.0);
//!     let points = scatter_summary(&dataset, &SiteFilter::parse("CCAFS LC-40"), range);
//!     println!("{} launches between 1000 and 5000 kg", points.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod query;

// Re-export top-level types for convenience
pub use dataset::{Dataset, DatasetError, DatasetResult, DatasetStats, LaunchRecord, Outcome};

pub use query::{pie_summary, scatter_summary, PayloadRange, PieSummary, ScatterPoint, ScatterSummary, SiteFilter};

pub use chart::{render_pie_svg, render_scatter_svg, PieFigure, ScatterFigure};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig, ServerConfig};
